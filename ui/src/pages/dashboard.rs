use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};
use leptos_meta::Title;

const TRACKS: &[(&str, &str)] = &[
    ("/users/me", "Your profile"),
    ("/about", "How the course works"),
];

#[component]
pub fn Dashboard() -> impl IntoView {
    let links = TRACKS
        .iter()
        .map(|&(href, label)| view! { <li><a href=href class="underline">{ label }</a></li> })
        .collect::<Vec<_>>();

    view! {
        <Title text="Dashboard | Helpdesk Academy"/>
        <section class="max-w-4xl mx-auto px-6 py-12 text-text">
            <h1 class="text-3xl font-bold mb-4">"Dashboard"</h1>
            <p class="mb-6">"Pick up where you left off."</p>
            <ul class="list-disc pl-6 space-y-2">{ links }</ul>
        </section>
    }
}
