use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

struct Feature {
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Ticket simulator",
        blurb: "Work a live queue of user issues with realistic priorities and SLAs.",
    },
    Feature {
        title: "Virtual labs",
        blurb: "Break and repair Windows, macOS and Linux machines in the browser.",
    },
    Feature {
        title: "Cert prep",
        blurb: "Practice exams mapped to the objectives entry-level certifications test.",
    },
    Feature {
        title: "Mentor reviews",
        blurb: "Senior technicians review your ticket notes and escalations.",
    },
];

#[component]
pub fn FeatureGrid() -> impl IntoView {
    let cards = FEATURES
        .iter()
        .map(|f| {
            view! {
                <article class="bg-neutral-light rounded-xl p-6 shadow">
                    <h3 class="font-semibold text-lg mb-2">{ f.title }</h3>
                    <p class="text-sm">{ f.blurb }</p>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="py-16">
            <h2 class="text-3xl font-bold mb-8 text-text">"What you get"</h2>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                { cards }
            </div>
        </section>
    }
}
