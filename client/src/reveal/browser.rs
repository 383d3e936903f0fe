//! `IntersectionObserver` binding for the reveal controller.
//!
//! Browser-only; compiled with the `hydrate` feature.

use js_sys::Array;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::controller::{ObserveError, Phase, RevealController, RevealOptions, Subscription};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live observer plus the callback it invokes. Dropping disconnects.
pub struct ObserverSubscription {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Subscription for ObserverSubscription {
    fn unsubscribe(&mut self) {
        self.observer.disconnect();
    }
}

impl Drop for ObserverSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

type Controller = StoredValue<RevealController<ObserverSubscription>, LocalStorage>;

fn observer_supported() -> bool {
    web_sys::window().is_some_and(|window| {
        js_sys::Reflect::has(&window, &"IntersectionObserver".into()).unwrap_or(false)
    })
}

fn subscribe(
    element: &Element,
    options: RevealOptions,
    controller: Controller,
    revealed: RwSignal<bool>,
) -> Result<ObserverSubscription, ObserveError> {
    if !observer_supported() {
        return Err(ObserveError::Unsupported);
    }

    let callback: ObserverCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let ratio = entry.intersection_ratio();
            if let Some(Some(next)) = controller.try_update_value(|c| c.observe(ratio)) {
                revealed.set(next);
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.margin.to_css());
    let thresholds: Array = options.thresholds().into_iter().map(JsValue::from).collect();
    init.set_threshold_f64_sequence(&thresholds);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| ObserveError::Rejected(format!("{e:?}")))?;
    observer.observe(element);
    log::debug!("reveal observer attached (margin {})", options.margin);

    Ok(ObserverSubscription { observer, _callback: callback })
}

/// Attach a controller to `target` once it mounts and release it with the
/// owning scope.
pub(super) fn bind(target: NodeRef<html::Div>, options: RevealOptions, revealed: RwSignal<bool>) {
    let controller: Controller = StoredValue::new_local(RevealController::new(options));

    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        let fell_open = controller.try_update_value(|c| {
            if c.phase() != Phase::Pending {
                return false;
            }
            c.attach(|| subscribe(&element, options, controller, revealed));
            c.is_revealed()
        });
        if fell_open == Some(true) {
            revealed.set(true);
        }
    });

    on_cleanup(move || {
        if controller.try_update_value(RevealController::release).is_none() {
            log::debug!("reveal controller already disposed");
        }
    });
}
