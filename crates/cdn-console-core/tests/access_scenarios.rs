//! End-to-end access scenarios: hub, classifier, nav filter and shell together.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cdn_console_core::routes::{AUTHENTICATED_LANDING, PUBLIC_LANDING};
use cdn_console_core::{
    Access, AuthHub, AuthSignal, AuthSource, HistoryMode, Navigator, Redirect, ShellController,
    SignOutError, decide, nav_items, pending_redirect, visible_items,
};

/// Guard that re-decides whenever the hub publishes.
struct LiveGuard {
    decision: Rc<RefCell<Access>>,
    evaluations: Rc<Cell<usize>>,
}

impl LiveGuard {
    fn mount(hub: &AuthHub, path: &'static str) -> Self {
        let decision = Rc::new(RefCell::new(decide(path, &hub.current())));
        let evaluations = Rc::new(Cell::new(0));
        let (slot, count) = (Rc::clone(&decision), Rc::clone(&evaluations));
        hub.subscribe(move |auth| {
            count.set(count.get() + 1);
            *slot.borrow_mut() = decide(path, auth);
        });
        Self {
            decision,
            evaluations,
        }
    }

    fn decision(&self) -> Access {
        *self.decision.borrow()
    }
}

struct HubSource(AuthHub);

impl AuthSource for HubSource {
    fn current(&self) -> AuthSignal {
        self.0.current()
    }

    fn sign_out(&self) -> Result<(), SignOutError> {
        self.0
            .publish(AuthSignal::Unauthenticated)
            .map(|_| ())
            .map_err(|e| SignOutError::Rejected(e.to_string()))
    }
}

#[derive(Default)]
struct Recorder(RefCell<Vec<(String, HistoryMode)>>);

impl Navigator for Recorder {
    fn navigate(&self, path: &str, mode: HistoryMode) {
        self.0.borrow_mut().push((path.to_string(), mode));
    }
}

#[test]
fn placeholder_becomes_render_on_resolution() {
    let hub = AuthHub::new();
    let guard = LiveGuard::mount(&hub, "/dashboard");
    assert_eq!(guard.decision(), Access::Placeholder);

    hub.publish(AuthSignal::signed_in("Ada")).unwrap();

    assert_eq!(guard.decision(), Access::Render);
    assert_eq!(guard.evaluations.get(), 1);
}

#[test]
fn every_active_guard_reevaluates_once() {
    let hub = AuthHub::new();
    let guards: Vec<_> = ["/dashboard", "/login", "/library"]
        .into_iter()
        .map(|p| LiveGuard::mount(&hub, p))
        .collect();

    hub.publish(AuthSignal::Unauthenticated).unwrap();

    assert!(guards.iter().all(|g| g.evaluations.get() == 1));
    assert_eq!(guards[1].decision(), Access::Render);
}

#[test]
fn sign_in_on_login_page_redirects_to_landing() {
    let hub = AuthHub::with_state(AuthSignal::Unauthenticated);
    let guard = LiveGuard::mount(&hub, "/login");
    assert_eq!(guard.decision(), Access::Render);

    hub.publish(AuthSignal::signed_in("Ada")).unwrap();

    assert_eq!(
        guard.decision(),
        Access::Redirect(Redirect::replace(AUTHENTICATED_LANDING))
    );
}

#[test]
fn unknown_path_always_goes_home() {
    let hub = AuthHub::new();
    let guard = LiveGuard::mount(&hub, "/nonexistent");
    let home = Access::Redirect(Redirect::replace(PUBLIC_LANDING));
    assert_eq!(guard.decision(), home);

    hub.publish(AuthSignal::signed_in("Ada")).unwrap();
    assert_eq!(guard.decision(), home);

    hub.publish(AuthSignal::Unauthenticated).unwrap();
    assert_eq!(guard.decision(), home);
}

#[test]
fn visible_items_follow_hub() {
    let hub = AuthHub::new();
    let items = nav_items();
    let visible = Rc::new(RefCell::new(visible_items(&items, &hub.current())));
    let sink = Rc::clone(&visible);
    let all = items.clone();
    hub.subscribe(move |auth| *sink.borrow_mut() = visible_items(&all, auth));

    assert!(visible.borrow().is_empty());
    hub.publish(AuthSignal::signed_in("Ada")).unwrap();
    assert_eq!(*visible.borrow(), items);
    hub.publish(AuthSignal::Unauthenticated).unwrap();
    assert!(visible.borrow().is_empty());
}

#[test]
fn sign_out_from_protected_page() {
    let hub = AuthHub::with_state(AuthSignal::signed_in("Ada"));
    let guard = LiveGuard::mount(&hub, "/profile");
    let source = HubSource(hub.clone());
    let nav = Recorder::default();
    let mut shell = ShellController::new();
    shell.toggle_menu();

    shell.sign_out(&source, &nav);

    assert!(!shell.is_menu_open());
    assert_eq!(hub.current(), AuthSignal::Unauthenticated);
    assert_eq!(
        *nav.0.borrow(),
        vec![(PUBLIC_LANDING.to_string(), HistoryMode::Push)]
    );
    assert!(matches!(guard.decision(), Access::Redirect(_)));
}

#[test]
fn stale_guard_stays_quiet_after_sign_out() {
    let hub = AuthHub::with_state(AuthSignal::signed_in("Ada"));
    let guard = LiveGuard::mount(&hub, "/profile");
    let source = HubSource(hub.clone());
    let nav = Recorder::default();
    let mut shell = ShellController::new();

    shell.sign_out(&source, &nav);
    let current = nav.0.borrow().last().map(|(to, _)| to.clone());

    assert_eq!(current.as_deref(), Some(PUBLIC_LANDING));
    assert_eq!(
        pending_redirect(guard.decision(), "/profile", PUBLIC_LANDING),
        None
    );
}

#[test]
fn resolution_redirect_closes_open_menu() {
    let hub = AuthHub::new();
    let guard = LiveGuard::mount(&hub, "/analytics");
    let nav = Recorder::default();
    let mut shell = ShellController::new();
    let mut current = "/analytics".to_string();
    shell.location_changed(None, &current);
    shell.toggle_menu();

    hub.publish(AuthSignal::Unauthenticated).unwrap();
    if let Some(redirect) = pending_redirect(guard.decision(), "/analytics", &current) {
        redirect.perform(&nav);
    }
    let previous = std::mem::replace(&mut current, nav.0.borrow()[0].0.clone());
    shell.location_changed(Some(&previous), &current);

    assert_eq!(current, "/login");
    assert_eq!(nav.0.borrow()[0].1, HistoryMode::Replace);
    assert!(!shell.is_menu_open());
}

#[test]
fn unsubscribed_guard_stops_reevaluating() {
    let hub = AuthHub::new();
    let decision = Rc::new(RefCell::new(Access::Placeholder));
    let sink = Rc::clone(&decision);
    let id = hub.subscribe(move |auth| *sink.borrow_mut() = decide("/upload", auth));

    assert!(hub.unsubscribe(id));
    hub.publish(AuthSignal::signed_in("Ada")).unwrap();

    assert_eq!(*decision.borrow(), Access::Placeholder);
}
