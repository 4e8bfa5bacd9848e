//! Ambient (operating environment) color preference
//!
//! The environment reports its preference through an [`AmbientSource`]: a
//! synchronous read of the current value plus a callback subscription that
//! fires whenever the environment says the preference flipped. Nothing
//! polls. An [`AmbientObserver`] sits between a source and the resolver and
//! only re-signals when the value actually changes.

use std::cell::{Cell, RefCell};
use std::fmt::{Display, Formatter};
use std::rc::{Rc, Weak};
use tinct_core::ListenerRegistry;

/// Color preference reported by the environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbientPreference {
    Light,
    Dark,
    /// No preference reported, or one this crate does not recognize
    #[default]
    Unknown,
}

impl AmbientPreference {
    /// Map a raw environment value. Only the exact strings `"light"` and
    /// `"dark"` are recognized; anything else, including `None`, is unknown.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for AmbientPreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Callback invoked by a source when the environment preference changes
pub type AmbientCallback = Box<dyn Fn(AmbientPreference)>;

/// Handle to an active source subscription
///
/// Cancelling is idempotent; dropping the handle cancels.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct AmbientSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl AmbientSubscription {
    pub fn new<F: FnOnce() + 'static>(cancel: F) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to release
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Release the subscription. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for AmbientSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for AmbientSubscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbientSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Environment-level preference source
pub trait AmbientSource {
    /// Current preference, read synchronously
    fn current(&self) -> AmbientPreference;

    /// Register `callback` for change notifications
    fn subscribe(&self, callback: AmbientCallback) -> AmbientSubscription;
}

/// A source whose preference never changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedAmbient(pub AmbientPreference);

impl AmbientSource for FixedAmbient {
    fn current(&self) -> AmbientPreference {
        self.0
    }

    fn subscribe(&self, _callback: AmbientCallback) -> AmbientSubscription {
        AmbientSubscription::noop()
    }
}

struct ManualInner {
    value: Cell<AmbientPreference>,
    listeners: RefCell<ListenerRegistry<AmbientPreference>>,
}

/// Host-driven source
///
/// The platform layer calls [`ManualAmbient::emit`] from its own
/// theme-changed callback (or a test calls it directly). Every emission is
/// forwarded, repeated values included, the way an OS may fire redundant
/// notifications.
#[derive(Clone)]
pub struct ManualAmbient {
    inner: Rc<ManualInner>,
}

impl ManualAmbient {
    pub fn new(initial: AmbientPreference) -> Self {
        Self {
            inner: Rc::new(ManualInner {
                value: Cell::new(initial),
                listeners: RefCell::new(ListenerRegistry::new()),
            }),
        }
    }

    /// Report a preference to every subscriber
    pub fn emit(&self, preference: AmbientPreference) {
        self.inner.value.set(preference);
        let listeners = self.inner.listeners.borrow().snapshot();
        tracing::trace!(%preference, subscribers = listeners.len(), "ambient: emit");
        for listener in listeners {
            listener(&preference);
        }
    }

    /// Report a raw environment value (see [`AmbientPreference::from_raw`])
    pub fn emit_raw(&self, raw: Option<&str>) {
        self.emit(AmbientPreference::from_raw(raw));
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl Default for ManualAmbient {
    fn default() -> Self {
        Self::new(AmbientPreference::Unknown)
    }
}

impl AmbientSource for ManualAmbient {
    fn current(&self) -> AmbientPreference {
        self.inner.value.get()
    }

    fn subscribe(&self, callback: AmbientCallback) -> AmbientSubscription {
        let id = self
            .inner
            .listeners
            .borrow_mut()
            .register(move |pref: &AmbientPreference| callback(*pref));

        let weak: Weak<ManualInner> = Rc::downgrade(&self.inner);
        AmbientSubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().unregister(id);
            }
        })
    }
}

/// Tracks one source and re-signals only on actual changes
pub struct AmbientObserver {
    last: Rc<Cell<AmbientPreference>>,
    subscription: AmbientSubscription,
}

impl AmbientObserver {
    /// Read the source's current value and subscribe. `on_change` runs
    /// synchronously inside the source's callback, only when the
    /// preference differs from the last one seen.
    pub fn attach<F>(source: &dyn AmbientSource, on_change: F) -> Self
    where
        F: Fn(AmbientPreference) + 'static,
    {
        let last = Rc::new(Cell::new(source.current()));
        let seen = Rc::clone(&last);
        let subscription = source.subscribe(Box::new(move |preference| {
            if seen.replace(preference) == preference {
                tracing::trace!(%preference, "ambient: duplicate notification ignored");
                return;
            }
            on_change(preference);
        }));

        Self { last, subscription }
    }

    /// Last preference seen
    pub fn current(&self) -> AmbientPreference {
        self.last.get()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }

    /// Unsubscribe from the source. Safe to call more than once.
    pub fn detach(&mut self) {
        self.subscription.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_only_recognizes_exact_values() {
        assert_eq!(AmbientPreference::from_raw(Some("dark")), AmbientPreference::Dark);
        assert_eq!(AmbientPreference::from_raw(Some("light")), AmbientPreference::Light);
        assert_eq!(AmbientPreference::from_raw(Some("Dark")), AmbientPreference::Unknown);
        assert_eq!(AmbientPreference::from_raw(Some("")), AmbientPreference::Unknown);
        assert_eq!(AmbientPreference::from_raw(None), AmbientPreference::Unknown);
    }

    #[test]
    fn test_manual_source_forwards_every_emission() {
        let source = ManualAmbient::new(AmbientPreference::Light);
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        let _sub = source.subscribe(Box::new(move |_| c.set(c.get() + 1)));

        source.emit(AmbientPreference::Dark);
        source.emit(AmbientPreference::Dark);
        assert_eq!(count.get(), 2);
        assert_eq!(source.current(), AmbientPreference::Dark);
    }

    #[test]
    fn test_observer_collapses_duplicates() {
        let source = ManualAmbient::new(AmbientPreference::Light);
        let changes = Rc::new(RefCell::new(Vec::new()));

        let log = changes.clone();
        let observer = AmbientObserver::attach(&source, move |p| log.borrow_mut().push(p));

        source.emit(AmbientPreference::Light);
        source.emit(AmbientPreference::Dark);
        source.emit(AmbientPreference::Dark);
        source.emit(AmbientPreference::Dark);
        source.emit_raw(None);

        assert_eq!(
            *changes.borrow(),
            vec![AmbientPreference::Dark, AmbientPreference::Unknown]
        );
        assert_eq!(observer.current(), AmbientPreference::Unknown);
    }

    #[test]
    fn test_detach_is_idempotent_and_releases_source() {
        let source = ManualAmbient::default();
        let mut observer = AmbientObserver::attach(&source, |_| {});
        assert_eq!(source.subscriber_count(), 1);

        observer.detach();
        observer.detach();
        assert!(!observer.is_attached());
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_cancel_after_source_dropped() {
        let source = ManualAmbient::default();
        let mut sub = source.subscribe(Box::new(|_| {}));
        drop(source);
        sub.cancel();
        assert!(!sub.is_active());
    }

    #[test]
    fn test_fixed_source() {
        let fixed = FixedAmbient(AmbientPreference::Dark);
        assert_eq!(fixed.current(), AmbientPreference::Dark);
        assert!(!fixed.subscribe(Box::new(|_| {})).is_active());
    }
}
