use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

/// Called with the path the history moved to.
pub type Listener = Box<dyn Fn(String)>;

/// What the router needs from the host: read the location, push entries,
/// and hear about back/forward moves.
pub trait History {
    fn current_path(&self) -> String;

    /// New entry, no reload.
    fn push(&self, path: &str) -> Result<()>;

    /// Back/forward (popstate).
    fn listen(&self, on_pop: Listener) -> Result<()>;

    /// Same-origin link clicks that should stay in the app.
    fn intercept_links(&self, _on_link: Listener) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct MemoryState {
    entries: Vec<String>,
    cursor: usize,
    on_pop: Option<Rc<dyn Fn(String)>>,
    on_link: Option<Rc<dyn Fn(String)>>,
}

/// In-process history stack. Clones share the same stack, so a caller can
/// keep a handle after handing one to a router.
#[derive(Clone, Default)]
pub struct MemoryHistory {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryHistory {
    pub fn new(start: &str) -> Self {
        let state = MemoryState {
            entries: vec![start.to_owned()],
            ..Default::default()
        };
        Self { state: Rc::new(RefCell::new(state)) }
    }

    pub fn entries(&self) -> Vec<String> {
        self.state.borrow().entries.clone()
    }

    /// Moves one entry back and fires the pop listener, like the browser
    /// back button. Does nothing at the first entry.
    pub fn back(&self) {
        self.step(-1);
    }

    pub fn forward(&self) {
        self.step(1);
    }

    /// A click on an in-app `<a href>`.
    pub fn follow_link(&self, path: &str) {
        let listener = self.state.borrow().on_link.clone();
        if let Some(cb) = listener {
            cb(path.to_owned());
        }
    }

    fn step(&self, delta: isize) {
        // release the borrow before calling out; the listener may push
        let (path, listener) = {
            let mut st = self.state.borrow_mut();
            let Some(next) = st.cursor.checked_add_signed(delta) else {
                return;
            };
            if next >= st.entries.len() {
                return;
            }
            st.cursor = next;
            (st.entries[next].clone(), st.on_pop.clone())
        };

        if let Some(cb) = listener {
            cb(path);
        }
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        let st = self.state.borrow();
        st.entries.get(st.cursor).cloned().unwrap_or_else(|| "/".to_owned())
    }

    fn push(&self, path: &str) -> Result<()> {
        let mut st = self.state.borrow_mut();
        if st.entries.is_empty() {
            st.entries.push(path.to_owned());
            st.cursor = 0;
            return Ok(());
        }
        let keep = st.cursor + 1;
        st.entries.truncate(keep);
        st.entries.push(path.to_owned());
        st.cursor = keep;
        Ok(())
    }

    fn listen(&self, on_pop: Listener) -> Result<()> {
        self.state.borrow_mut().on_pop = Some(Rc::from(on_pop));
        Ok(())
    }

    fn intercept_links(&self, on_link: Listener) -> Result<()> {
        self.state.borrow_mut().on_link = Some(Rc::from(on_link));
        Ok(())
    }
}

#[cfg(feature = "web")]
pub use browser::BrowserHistory;

#[cfg(feature = "web")]
mod browser {
    use anyhow::{Result, anyhow};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::Closure;
    use web_sys::{HtmlAnchorElement, MouseEvent, Window};

    use super::{History, Listener};

    fn js_err(ctx: &str, err: JsValue) -> anyhow::Error {
        anyhow!("{ctx}: {err:?}")
    }

    /// `window.history` + `window.location`.
    ///
    /// Listener closures are leaked on purpose: they live as long as the page.
    #[derive(Clone)]
    pub struct BrowserHistory {
        window: Window,
    }

    impl BrowserHistory {
        pub fn new() -> Result<Self> {
            let window = web_sys::window().ok_or_else(|| anyhow!("no global `window`"))?;
            Ok(Self { window })
        }

        fn origin(&self) -> Option<String> {
            self.window.location().origin().ok()
        }
    }

    impl History for BrowserHistory {
        fn current_path(&self) -> String {
            let loc = self.window.location();
            let path = loc.pathname().unwrap_or_else(|_| "/".to_owned());
            let search = loc.search().unwrap_or_default();
            let hash = loc.hash().unwrap_or_default();
            format!("{path}{search}{hash}")
        }

        fn push(&self, path: &str) -> Result<()> {
            let history = self
                .window
                .history()
                .map_err(|e| js_err("window.history", e))?;
            history
                .push_state_with_url(&JsValue::NULL, "", Some(path))
                .map_err(|e| js_err("pushState", e))
        }

        fn listen(&self, on_pop: Listener) -> Result<()> {
            let this = self.clone();
            let cb = Closure::wrap(Box::new(move |_: web_sys::PopStateEvent| {
                on_pop(this.current_path());
            }) as Box<dyn FnMut(_)>);

            self.window
                .add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref())
                .map_err(|e| js_err("popstate listener", e))?;
            cb.forget();
            Ok(())
        }

        fn intercept_links(&self, on_link: Listener) -> Result<()> {
            let document = self
                .window
                .document()
                .ok_or_else(|| anyhow!("no `document` on window"))?;
            let origin = self.origin();

            let cb = Closure::wrap(Box::new(move |e: MouseEvent| {
                if e.default_prevented()
                    || e.button() != 0
                    || e.ctrl_key()
                    || e.meta_key()
                    || e.shift_key()
                    || e.alt_key()
                {
                    return;
                }

                let Some(anchor) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest("a[href]").ok().flatten())
                    .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
                else {
                    return;
                };

                let target = anchor.target();
                if (!target.is_empty() && target != "_self") || anchor.has_attribute("download") {
                    return;
                }
                if origin.as_deref() != Some(anchor.origin().as_str()) {
                    return;
                }

                e.prevent_default();
                on_link(format!("{}{}{}", anchor.pathname(), anchor.search(), anchor.hash()));
            }) as Box<dyn FnMut(_)>);

            document
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                .map_err(|e| js_err("click listener", e))?;
            cb.forget();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorded(history: &MemoryHistory) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        history
            .listen(Box::new(move |p: String| sink.borrow_mut().push(p)))
            .unwrap();
        seen
    }

    #[test]
    fn push_moves_cursor() {
        let h = MemoryHistory::new("/");
        h.push("/a").unwrap();
        h.push("/b").unwrap();

        assert_eq!(h.current_path(), "/b");
        assert_eq!(h.entries(), vec!["/", "/a", "/b"]);
    }

    #[test]
    fn back_and_forward_fire_listener() {
        let h = MemoryHistory::new("/");
        let seen = recorded(&h);
        h.push("/a").unwrap();

        h.back();
        assert_eq!(h.current_path(), "/");
        h.forward();
        assert_eq!(h.current_path(), "/a");

        assert_eq!(*seen.borrow(), vec!["/", "/a"]);
    }

    #[test]
    fn moves_past_the_ends_are_ignored() {
        let h = MemoryHistory::new("/");
        let seen = recorded(&h);

        h.back();
        h.forward();

        assert_eq!(h.current_path(), "/");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let h = MemoryHistory::new("/");
        h.push("/a").unwrap();
        h.push("/b").unwrap();
        h.back();
        h.push("/c").unwrap();

        assert_eq!(h.entries(), vec!["/", "/a", "/c"]);
        h.forward();
        assert_eq!(h.current_path(), "/c");
    }

    #[test]
    fn follow_link_without_interceptor_is_noop() {
        let h = MemoryHistory::new("/");
        h.follow_link("/about");
        assert_eq!(h.current_path(), "/");
    }
}
