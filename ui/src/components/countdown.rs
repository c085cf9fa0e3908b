use chrono::{DateTime, Utc};
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::IntoAny;
use leptos::prelude::RwSignal;
use leptos::{IntoView, component, view};

use crate::countdown::{Remaining, format_unit, parse_launch};

/// Start of the next cohort
pub const LAUNCH_AT: &str = "2027-01-11T09:00:00Z";

#[component]
pub fn LaunchCountdown(now: RwSignal<DateTime<Utc>>) -> impl IntoView {
    let target = match parse_launch(LAUNCH_AT) {
        Ok(at) => at,
        Err(err) => {
            log::error!("countdown hidden: {err:#}");
            return ().into_any();
        }
    };

    let body = move || {
        let left = Remaining::between(now.get(), target);
        if left.is_over() {
            return view! {
                <p class="text-xl text-text">"Enrollment is open. Jump in!"</p>
            }
            .into_any();
        }

        let cells = left
            .units()
            .into_iter()
            .map(|(value, label)| {
                view! {
                    <div class="flex flex-col items-center min-w-20">
                        <span class="text-4xl font-display tabular-nums">{ format_unit(value) }</span>
                        <span class="text-xs uppercase tracking-wide">{ label }</span>
                    </div>
                }
            })
            .collect::<Vec<_>>();

        view! { <div class="flex gap-6 text-text">{ cells }</div> }.into_any()
    };

    view! {
        <section class="py-12">
            <h2 class="text-2xl font-bold mb-6 text-text">"Next cohort starts in"</h2>
            { body }
        </section>
    }
    .into_any()
}
