use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// =============================================================
// Fake observation backend
// =============================================================

/// Tracks live subscriptions the way a browser observer registry would.
#[derive(Clone, Default)]
struct Registry(Rc<RefCell<RegistryInner>>);

#[derive(Default)]
struct RegistryInner {
    live: usize,
    subscribed: usize,
    unsubscribed: usize,
}

impl Registry {
    fn subscribe(&self) -> Result<FakeSubscription, ObserveError> {
        let mut inner = self.0.borrow_mut();
        inner.live += 1;
        inner.subscribed += 1;
        Ok(FakeSubscription { registry: self.clone(), live: true })
    }

    fn live(&self) -> usize {
        self.0.borrow().live
    }

    fn unsubscribed(&self) -> usize {
        self.0.borrow().unsubscribed
    }
}

struct FakeSubscription {
    registry: Registry,
    live: bool,
}

impl Subscription for FakeSubscription {
    fn unsubscribe(&mut self) {
        if self.live {
            self.live = false;
            let mut inner = self.registry.0.borrow_mut();
            inner.live -= 1;
            inner.unsubscribed += 1;
        }
    }
}

/// Delivers a sample only while the controller still holds a subscription,
/// modelling a browser that stops invoking callbacks after `disconnect()`.
fn deliver(controller: &mut RevealController<FakeSubscription>, ratio: f64) -> Option<bool> {
    if controller.is_subscribed() { controller.observe(ratio) } else { None }
}

fn observing(options: RevealOptions, registry: &Registry) -> RevealController<FakeSubscription> {
    let mut controller = RevealController::new(options);
    controller.attach(|| registry.subscribe());
    controller
}

// =============================================================
// Options
// =============================================================

#[test]
fn default_options_trigger_once_without_margin() {
    let options = RevealOptions::default();
    assert!(options.once);
    assert_eq!(options.amount, 0.0);
    assert_eq!(options.margin, RootMargin::ZERO);
}

#[test]
fn section_preset_trims_ten_percent_vertically() {
    let options = RevealOptions::section();
    assert_eq!(options.margin.to_css(), "-10% 0px -10% 0px");
    assert!(options.once);
}

#[test]
fn zero_amount_needs_strictly_positive_ratio() {
    let options = RevealOptions::default();
    assert!(!options.crosses(0.0));
    assert!(options.crosses(0.0001));
}

#[test]
fn explicit_amount_is_inclusive_and_clamped() {
    let options = RevealOptions::default().with_amount(0.5);
    assert!(!options.crosses(0.49));
    assert!(options.crosses(0.5));
    assert_eq!(RevealOptions::default().with_amount(3.0).amount, 1.0);
}

#[test]
fn zero_amount_registers_an_edge_threshold() {
    assert_eq!(RevealOptions::default().thresholds(), vec![0.0, EDGE_THRESHOLD]);
    assert_eq!(RevealOptions::section().thresholds(), vec![0.0, EDGE_THRESHOLD]);
    assert!(RevealOptions::default().crosses(EDGE_THRESHOLD));
}

#[test]
fn explicit_amount_is_the_only_threshold() {
    assert_eq!(RevealOptions::default().with_amount(0.25).thresholds(), vec![0.25]);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_controller_is_pending_and_hidden() {
    let controller = RevealController::<FakeSubscription>::new(RevealOptions::default());
    assert_eq!(controller.phase(), Phase::Pending);
    assert!(!controller.is_revealed());
    assert_eq!(controller.state(), RevealState::default());
}

#[test]
fn samples_before_attach_are_ignored() {
    let mut controller = RevealController::<FakeSubscription>::new(RevealOptions::default());
    assert_eq!(controller.observe(1.0), None);
    assert!(!controller.is_revealed());
    assert_eq!(controller.samples_processed(), 0);
}

#[test]
fn attach_subscribes_once() {
    let registry = Registry::default();
    let mut controller = observing(RevealOptions::default(), &registry);
    controller.attach(|| registry.subscribe());
    assert_eq!(controller.phase(), Phase::Observing);
    assert_eq!(registry.live(), 1);
}

#[test]
fn first_crossing_reveals_and_detaches() {
    let registry = Registry::default();
    let mut controller = observing(RevealOptions::default(), &registry);

    assert_eq!(deliver(&mut controller, 0.0), None);
    assert_eq!(deliver(&mut controller, 0.3), Some(true));

    assert!(controller.is_revealed());
    assert_eq!(controller.phase(), Phase::Settled);
    assert_eq!(registry.live(), 0);
    assert_eq!(registry.unsubscribed(), 1);
}

#[test]
fn reveal_is_monotonic_after_leaving_viewport() {
    let registry = Registry::default();
    let mut controller = observing(RevealOptions::default(), &registry);

    deliver(&mut controller, 0.5);
    for ratio in [0.0, 0.0, 0.7, 0.0] {
        assert_eq!(deliver(&mut controller, ratio), None);
        assert!(controller.is_revealed());
    }
    // Direct calls after settling are dropped as well.
    assert_eq!(controller.observe(0.0), None);
    assert!(controller.state().has_been_visible);
    assert_eq!(controller.samples_processed(), 1);
}

#[test]
fn repeated_crossings_do_not_grow_subscriptions() {
    let registry = Registry::default();
    let mut controller = observing(RevealOptions::default(), &registry);
    for _ in 0..50 {
        deliver(&mut controller, 1.0);
        deliver(&mut controller, 0.0);
    }
    assert_eq!(registry.live(), 0);
    assert_eq!(registry.0.borrow().subscribed, 1);
    assert_eq!(controller.samples_processed(), 1);
}

#[test]
fn continuous_mode_tracks_latest_sample() {
    let registry = Registry::default();
    let mut controller = observing(RevealOptions::default().with_once(false), &registry);

    assert_eq!(deliver(&mut controller, 0.2), Some(true));
    assert_eq!(deliver(&mut controller, 0.4), None);
    assert_eq!(deliver(&mut controller, 0.0), Some(false));

    assert!(!controller.is_revealed());
    assert!(controller.state().has_been_visible);
    assert_eq!(controller.phase(), Phase::Observing);
    assert_eq!(registry.live(), 1);
}

#[test]
fn independent_regions_do_not_interact() {
    let registry = Registry::default();
    let mut a = observing(RevealOptions::section(), &registry);
    let mut b = observing(RevealOptions::section(), &registry);

    deliver(&mut a, 0.6);

    assert!(a.is_revealed());
    assert!(!b.is_revealed());
    assert_eq!(b.phase(), Phase::Observing);
    assert_eq!(registry.live(), 1);

    assert_eq!(deliver(&mut b, 0.1), Some(true));
    assert_eq!(registry.live(), 0);
}

// =============================================================
// Fail-open + teardown
// =============================================================

#[test]
fn unsupported_observer_fails_open() {
    let mut controller = RevealController::<FakeSubscription>::new(RevealOptions::section());
    controller.attach(|| Err(ObserveError::Unsupported));

    assert!(controller.is_revealed());
    assert!(controller.state().has_been_visible);
    assert_eq!(controller.phase(), Phase::Settled);
    assert!(!controller.is_subscribed());
}

#[test]
fn rejected_observer_fails_open_in_continuous_mode_too() {
    let mut controller = RevealController::<FakeSubscription>::new(RevealOptions::default().with_once(false));
    controller.attach(|| Err(ObserveError::Rejected("TypeError".to_owned())));
    assert!(controller.is_revealed());
}

#[test]
fn release_before_visible_unsubscribes_and_blocks_callbacks() {
    let registry = Registry::default();
    let mut controller = observing(RevealOptions::section(), &registry);
    deliver(&mut controller, 0.0);

    controller.release();

    assert_eq!(controller.phase(), Phase::Released);
    assert_eq!(registry.live(), 0);
    assert_eq!(deliver(&mut controller, 1.0), None);
    assert_eq!(controller.observe(1.0), None);
    assert!(!controller.is_revealed());
}

#[test]
fn release_is_idempotent_and_safe_when_pending() {
    let registry = Registry::default();
    let mut pending = RevealController::<FakeSubscription>::new(RevealOptions::default());
    pending.release();
    pending.release();
    assert_eq!(pending.phase(), Phase::Released);

    let mut settled = observing(RevealOptions::default(), &registry);
    deliver(&mut settled, 1.0);
    settled.release();
    settled.release();
    assert_eq!(registry.unsubscribed(), 1);
    assert!(settled.is_revealed());
}

#[test]
fn attach_after_release_is_ignored() {
    let registry = Registry::default();
    let mut controller = RevealController::<FakeSubscription>::new(RevealOptions::default());
    controller.release();
    controller.attach(|| registry.subscribe());
    assert_eq!(registry.live(), 0);
    assert_eq!(controller.phase(), Phase::Released);
}

#[test]
fn observe_error_messages() {
    assert_eq!(
        ObserveError::Unsupported.to_string(),
        "visibility observation is not supported in this environment"
    );
    assert_eq!(
        ObserveError::Rejected("boom".to_owned()).to_string(),
        "visibility observer rejected the region: boom"
    );
}
