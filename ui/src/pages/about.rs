use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};
use leptos_meta::Title;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text="About | Helpdesk Academy"/>
        <section class="max-w-3xl mx-auto px-6 py-16 text-text">
            <h1 class="text-4xl font-bold mb-6">"About"</h1>
            <p class="mb-4 text-lg">
                "We started as a handful of support engineers tired of training new hires on slide decks."
            </p>
            <p class="text-lg">
                "Every lesson here is built from tickets we actually closed. Read the ticket, reproduce it, fix it, write it up."
            </p>
        </section>
    }
}
