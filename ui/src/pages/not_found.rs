use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};
use leptos_meta::Title;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <Title text="Not found | Helpdesk Academy"/>
        <section class="max-w-3xl mx-auto px-6 py-16 text-text">
            <h1 class="text-4xl font-bold mb-4">"404 – not found"</h1>
            <p class="mb-6">"Nothing lives at "<code>{ path }</code>"."</p>
            <a href="/" class="underline">"Go home"</a>
        </section>
    }
}
