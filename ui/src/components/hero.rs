use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="py-24">
            <h1 class="text-5xl sm:text-7xl font-display text-text mb-6 leading-tight">
            "Fix real tickets,"<br/>"land the helpdesk job."
            </h1>
            <p class="text-lg text-text mb-8 max-w-2xl">
                "Hands-on IT support training: password resets, printer queues, flaky Wi-Fi and everything in between."
            </p>

            <a
                href="/dashboard"
                class="inline-block bg-primary text-neutral-dark px-8 py-4 rounded-full hover:brightness-90 transition"
            >"Start learning"</a>
        </section>
    }
}
