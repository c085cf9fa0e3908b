use anyhow::anyhow;
use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::IntoAny;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::AnyView;
use leptos::{IntoView, component, view};
use leptos_meta::provide_meta_context;

use crate::pages::{
    about::About, dashboard::Dashboard, home::Home, not_found::NotFound, user::UserProfile,
};
use crate::router::{BrowserHistory, History, Router};

/// What the router has asked the shell to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Loading,
    Home,
    About,
    Dashboard,
    User(String),
    NotFound(String),
}

impl Page {
    pub fn render(self, now: RwSignal<DateTime<Utc>>) -> AnyView {
        match self {
            Page::Loading => view! { <p class="text-text">"Loading…"</p> }.into_any(),
            Page::Home => view! { <Home now/> }.into_any(),
            Page::About => view! { <About/> }.into_any(),
            Page::Dashboard => view! { <Dashboard/> }.into_any(),
            Page::User(id) => view! { <UserProfile id/> }.into_any(),
            Page::NotFound(path) => view! { <NotFound path/> }.into_any(),
        }
    }
}

/// Every route the shell knows about. Handlers only flip the page signal.
pub fn register_routes<H: History + 'static>(router: &Router<H>, page: RwSignal<Page>) {
    router
        .register("/", move |_| {
            page.set(Page::Home);
            Ok(())
        })
        .register("/about", move |_| {
            page.set(Page::About);
            Ok(())
        })
        .register("/dashboard", move |_| {
            page.set(Page::Dashboard);
            Ok(())
        })
        .register("/users/:id", move |m| {
            let id = m
                .params
                .get("id")
                .cloned()
                .ok_or_else(|| anyhow!("{} matched without :id", m.path))?;
            page.set(Page::User(id));
            Ok(())
        })
        .register("/404", move |m| {
            page.set(Page::NotFound(m.path.clone()));
            Ok(())
        });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = RwSignal::new(Page::Loading);

    // one clock for the whole session; the countdown reads it
    let now = RwSignal::new(Utc::now());
    Interval::new(1_000, move || now.set(Utc::now())).forget();

    match BrowserHistory::new() {
        Ok(history) => {
            let router = Router::new(history);
            register_routes(&router, page);
            router.init();
        }
        Err(err) => {
            log::error!("router disabled: {err:#}");
            page.set(Page::Home);
        }
    }

    view! {
        <header class="sticky top-0 bg-surface/85 backdrop-blur">
          <div class="max-w-6xl mx-auto flex justify-between items-center px-6 py-4">
            <a href="/" class="text-2xl font-extrabold text-primary">"Helpdesk Academy"</a>
            <nav class="hidden md:flex gap-8 text-text">
              <a href="/about">"About"</a>
              <a href="/dashboard">"Dashboard"</a>
            </nav>
          </div>
        </header>

        <main class="min-h-screen p-4">
          { move || page.get().render(now) }
        </main>

        <footer class="bg-surface text-text py-8">
          <div class="max-w-6xl mx-auto px-6 flex flex-col sm:flex-row justify-between gap-8">
            <p>"© 2026 Helpdesk Academy. Learn IT support by fixing real tickets."</p>
            <nav class="flex gap-6 underline-offset-4">
              <a href="/about">"About"</a>
              <a href="mailto:hello@helpdesk.academy">"Contact"</a>
            </nav>
          </div>
        </footer>
    }
}
