use chrono::{DateTime, Utc};
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::RwSignal;
use leptos::{IntoView, component, view};
use leptos_meta::Title;

use crate::components::{countdown::LaunchCountdown, features::FeatureGrid, hero::Hero};

#[component]
pub fn Home(now: RwSignal<DateTime<Utc>>) -> impl IntoView {
    view! {
        <Title text="Helpdesk Academy"/>
        <div class="max-w-6xl mx-auto px-6">
            <Hero/>
            <LaunchCountdown now/>
            <FeatureGrid/>
        </div>
    }
}
