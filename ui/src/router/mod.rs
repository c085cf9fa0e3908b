//! Client-side path router.
//!
//! Routes are registered up front, then [`Router::init`] hooks the router
//! into the history (back/forward + in-app link clicks) and dispatches
//! whatever path the page was loaded with.
//!
//! ```ignore
//! let router = Router::new(BrowserHistory::new()?);
//! router
//!     .register("/", |_| Ok(()))
//!     .register("/users/:id", |m| { log::info!("user {}", m.params["id"]); Ok(()) })
//!     .register("/404", |m| { log::warn!("nothing at {}", m.path); Ok(()) });
//! router.init();
//! router.navigate("/users/42");
//! ```

pub mod history;
pub mod pattern;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use indexmap::IndexMap;

pub use history::{History, MemoryHistory};
#[cfg(feature = "web")]
pub use history::BrowserHistory;
pub use pattern::PathPattern;

pub type Handler = Rc<dyn Fn(&RouteMatch) -> anyhow::Result<()>>;

#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Pattern key of the fallback handler
    pub not_found: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { not_found: "/404".to_owned() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Uninitialized,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Pattern,
    NotFound,
}

/// What a handler gets to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// path without `?query` / `#fragment`
    pub path: String,
    /// the key the handler was registered under
    pub pattern: String,
    pub kind: MatchKind,
    pub params: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled(MatchKind),
    /// handler ran and returned an error (already logged)
    Failed(MatchKind),
    /// no route and no fallback
    Unmatched,
}

struct Route {
    pattern: PathPattern,
    handler: Handler,
}

struct Inner<H> {
    history: H,
    config: RouterConfig,
    routes: RefCell<IndexMap<String, Route>>,
    state: Cell<RouterState>,
    current: RefCell<Option<String>>,
    on_unmatched: RefCell<Option<Rc<dyn Fn(&str)>>>,
}

/// Cheap to clone; clones share one route table.
pub struct Router<H> {
    inner: Rc<Inner<H>>,
}

impl<H> Clone for Router<H> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<H: History + 'static> Router<H> {
    pub fn new(history: H) -> Self {
        Self::with_config(history, RouterConfig::default())
    }

    pub fn with_config(history: H, config: RouterConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                history,
                config,
                routes: RefCell::new(IndexMap::new()),
                state: Cell::new(RouterState::Uninitialized),
                current: RefCell::new(None),
                on_unmatched: RefCell::new(None),
            }),
        }
    }

    pub fn history(&self) -> &H {
        &self.inner.history
    }

    pub fn state(&self) -> RouterState {
        self.inner.state.get()
    }

    /// Last dispatched path, if any.
    pub fn current_path(&self) -> Option<String> {
        self.inner.current.borrow().clone()
    }

    /// Adds or replaces the handler for `pattern`.
    ///
    /// Pattern syntax is not checked. A replaced pattern keeps its place in
    /// the matching order.
    pub fn register<F>(&self, pattern: &str, handler: F) -> &Self
    where
        F: Fn(&RouteMatch) -> anyhow::Result<()> + 'static,
    {
        if self.state() == RouterState::Active {
            log::debug!("route {pattern} registered after init");
        }

        let route = Route {
            pattern: PathPattern::compile(pattern),
            handler: Rc::new(handler),
        };
        if self.inner.routes.borrow_mut().insert(pattern.to_owned(), route).is_some() {
            log::debug!("route {pattern} replaced");
        }
        self
    }

    /// Called with the path whenever a dispatch finds neither a route nor
    /// a fallback.
    pub fn on_unmatched<F>(&self, hook: F) -> &Self
    where
        F: Fn(&str) + 'static,
    {
        *self.inner.on_unmatched.borrow_mut() = Some(Rc::new(hook));
        self
    }

    /// Pushes a history entry for `path` and dispatches it.
    pub fn navigate(&self, path: &str) {
        if let Err(err) = self.inner.history.push(path) {
            log::error!("history push for {path} failed: {err:#}");
        }

        if self.state() == RouterState::Uninitialized {
            log::warn!("navigate({path}) before init; dispatch deferred to init");
            return;
        }
        self.dispatch(path);
    }

    /// Subscribes to history events and dispatches the current location.
    /// Only the first call does anything.
    pub fn init(&self) {
        if self.state() == RouterState::Active {
            log::warn!("router already initialized");
            return;
        }
        self.inner.state.set(RouterState::Active);

        let router = self.clone();
        if let Err(err) = self.inner.history.listen(Box::new(move |path: String| {
            router.dispatch(&path);
        })) {
            log::error!("could not subscribe to history events: {err:#}");
        }

        let router = self.clone();
        if let Err(err) = self.inner.history.intercept_links(Box::new(move |path: String| {
            router.navigate(&path);
        })) {
            log::error!("could not intercept links: {err:#}");
        }

        let path = self.inner.history.current_path();
        log::debug!("router active at {path}");
        self.dispatch(&path);
    }

    /// Resolves `path` and runs the handler: exact key first, then patterns
    /// in registration order, then the not-found key.
    pub fn dispatch(&self, path: &str) -> DispatchOutcome {
        let path = strip_suffixes(path);
        *self.inner.current.borrow_mut() = Some(path.to_owned());

        let Some((found, handler)) = self.resolve(path) else {
            log::warn!("no route for {path} and no {} handler", self.inner.config.not_found);
            let hook = self.inner.on_unmatched.borrow().clone();
            if let Some(hook) = hook {
                hook(path);
            }
            return DispatchOutcome::Unmatched;
        };

        log::debug!("{path} -> {} ({:?})", found.pattern, found.kind);
        // handler runs with no borrow held, so it may navigate or register
        match handler(&found) {
            Ok(()) => DispatchOutcome::Handled(found.kind),
            Err(err) => {
                log::error!("handler for {} failed on {path}: {err:#}", found.pattern);
                DispatchOutcome::Failed(found.kind)
            }
        }
    }

    fn resolve(&self, path: &str) -> Option<(RouteMatch, Handler)> {
        let routes = self.inner.routes.borrow();
        let found = |key: &str, kind, params| RouteMatch {
            path: path.to_owned(),
            pattern: key.to_owned(),
            kind,
            params,
        };

        if let Some(route) = routes.get(path) {
            return Some((found(path, MatchKind::Exact, HashMap::new()), route.handler.clone()));
        }

        let hit = routes.iter().find_map(|(key, route)| {
            route
                .pattern
                .captures(path)
                .map(|params| (found(key, MatchKind::Pattern, params), route.handler.clone()))
        });
        if hit.is_some() {
            return hit;
        }

        let key = self.inner.config.not_found.as_str();
        routes
            .get(key)
            .map(|route| (found(key, MatchKind::NotFound, HashMap::new()), route.handler.clone()))
    }
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
