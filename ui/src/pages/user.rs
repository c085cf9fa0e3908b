use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};
use leptos_meta::Title;

#[component]
pub fn UserProfile(id: String) -> impl IntoView {
    let title = format!("User {id} | Helpdesk Academy");

    view! {
        <Title text=title/>
        <section class="max-w-3xl mx-auto px-6 py-12 text-text">
            <h1 class="text-3xl font-bold mb-4">"Learner profile"</h1>
            <p>"Learner id: "<code>{ id }</code></p>
            <a href="/dashboard" class="inline-block mt-6 underline">"Back to dashboard"</a>
        </section>
    }
}
