use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use ui::router::{DispatchOutcome, MatchKind, MemoryHistory, RouteMatch, Router};

type Log = Rc<RefCell<Vec<(&'static str, String)>>>;

fn record(log: &Log, label: &'static str) -> impl Fn(&RouteMatch) -> anyhow::Result<()> + use<> {
    let log = log.clone();
    move |m: &RouteMatch| {
        log.borrow_mut().push((label, m.path.clone()));
        Ok(())
    }
}

fn site_router(start: &str, log: &Log) -> Router<MemoryHistory> {
    let router = Router::new(MemoryHistory::new(start));
    router
        .register("/", record(log, "A"))
        .register("/about", record(log, "B"))
        .register("/users/:id", record(log, "C"))
        .register("/404", record(log, "D"));
    router
}

#[test]
fn landing_then_user_then_missing() {
    let log = Log::default();
    let router = site_router("/about", &log);

    router.init();
    assert_eq!(log.borrow().clone(), vec![("B", "/about".to_owned())]);

    router.navigate("/users/99");
    router.navigate("/missing");

    assert_eq!(
        log.borrow().clone(),
        vec![
            ("B", "/about".to_owned()),
            ("C", "/users/99".to_owned()),
            ("D", "/missing".to_owned()),
        ]
    );
    assert_eq!(
        router.history().entries(),
        vec!["/about", "/users/99", "/missing"]
    );
}

#[test]
fn history_walk_redispatches_each_entry() {
    let log = Log::default();
    let router = site_router("/", &log);
    router.init();

    router.navigate("/users/7");
    router.history().back();
    router.history().forward();
    router.history().forward();

    let labels: Vec<_> = log.borrow().iter().map(|(l, _)| *l).collect();
    assert_eq!(labels, vec!["A", "C", "A", "C"]);
    assert_eq!(router.current_path().as_deref(), Some("/users/7"));
}

#[test]
fn prefix_of_a_pattern_falls_back() {
    let log = Log::default();
    let router = site_router("/", &log);

    assert_eq!(
        router.dispatch("/users/42/extra"),
        DispatchOutcome::Handled(MatchKind::NotFound)
    );
    assert_eq!(log.borrow().clone(), vec![("D", "/users/42/extra".to_owned())]);
}
