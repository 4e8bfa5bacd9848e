//! Theme distribution
//!
//! [`ThemeDistributor`] owns the mode store, the ambient observer and the
//! resolver, and publishes every new [`ResolvedTheme`] to registered
//! listeners. Consumers never hold the distributor itself: they receive a
//! [`ThemeContext`] through a [`Scope`] and read or change the theme
//! through it.
//!
//! # Ordering
//!
//! Mode changes and ambient notifications funnel into one input queue with
//! a single consumer. Each input is processed to completion (store update,
//! re-resolution, listener notification) before the next one is taken, so
//! at most one recompute is ever in flight. An input submitted from inside
//! a listener is queued and handled after the current notification round.
//!
//! ```rust,ignore
//! let registry = Arc::new(SchemeRegistry::builtin()?);
//! let ambient = ManualAmbient::new(AmbientPreference::Light);
//!
//! let distributor = ThemeDistributor::mount(registry, &ambient);
//! let scope = distributor.provide(&Scope::root());
//!
//! // Anywhere below:
//! let theme = use_app_theme(&scope)?;
//! ```

use crate::ambient::{AmbientObserver, AmbientPreference, AmbientSource};
use crate::error::{Result, ThemeError};
use crate::mode::ThemeMode;
use crate::registry::SchemeRegistry;
use crate::resolver::{ResolvedTheme, ThemeResolver};
use crate::theme::AppTheme;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use tinct_core::{ListenerId, ListenerRegistry, Scope};

/// One input to the resolver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ThemeInput {
    Mode(ThemeMode),
    Ambient(AmbientPreference),
}

struct DistributorInner {
    resolver: RefCell<ThemeResolver>,
    listeners: RefCell<ListenerRegistry<ResolvedTheme>>,
    queue: RefCell<VecDeque<ThemeInput>>,
    dispatching: Cell<bool>,
    mounted: Cell<bool>,
}

/// Resets the dispatching flag even if a listener panics
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl DistributorInner {
    fn submit(&self, input: ThemeInput) {
        if !self.mounted.get() {
            tracing::trace!(?input, "distributor: input after unmount dropped");
            return;
        }
        self.queue.borrow_mut().push_back(input);
        if self.dispatching.get() {
            return;
        }

        self.dispatching.set(true);
        let _guard = DispatchGuard(&self.dispatching);
        loop {
            let Some(input) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            if let Some(resolved) = self.apply(input) {
                self.publish(&resolved);
            }
        }
    }

    fn apply(&self, input: ThemeInput) -> Option<ResolvedTheme> {
        let mut resolver = self.resolver.borrow_mut();
        match input {
            ThemeInput::Mode(mode) => {
                let resolved = resolver.set_mode(mode).cloned();
                if resolved.is_some() {
                    tracing::debug!(%mode, "theme mode set");
                }
                resolved
            }
            ThemeInput::Ambient(ambient) => resolver.set_ambient(ambient).cloned(),
        }
    }

    fn publish(&self, resolved: &ResolvedTheme) {
        let listeners = self.listeners.borrow().snapshot();
        tracing::trace!(
            revision = resolved.revision(),
            listeners = listeners.len(),
            "distributor: publishing"
        );
        for listener in listeners {
            if !self.mounted.get() {
                break;
            }
            listener(resolved);
        }
    }

    fn resolved(&self) -> ResolvedTheme {
        self.resolver.borrow().resolved().clone()
    }
}

/// Owner of the theme state for one consumer tree
///
/// Mounting reads the ambient preference and subscribes to changes;
/// unmounting (or dropping) releases the subscription and invalidates
/// every [`ThemeContext`] handed out.
pub struct ThemeDistributor {
    inner: Rc<DistributorInner>,
    observer: AmbientObserver,
}

impl ThemeDistributor {
    /// Mount with the mode defaulting to [`ThemeMode::System`]
    pub fn mount(registry: Arc<SchemeRegistry>, ambient: &dyn AmbientSource) -> Self {
        Self::mount_with_mode(registry, ambient, ThemeMode::System)
    }

    /// Mount with an explicit starting mode
    pub fn mount_with_mode(
        registry: Arc<SchemeRegistry>,
        ambient: &dyn AmbientSource,
        mode: ThemeMode,
    ) -> Self {
        let inner = Rc::new(DistributorInner {
            resolver: RefCell::new(ThemeResolver::new(registry, mode, ambient.current())),
            listeners: RefCell::new(ListenerRegistry::new()),
            queue: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
            mounted: Cell::new(true),
        });

        let weak = Rc::downgrade(&inner);
        let observer = AmbientObserver::attach(ambient, move |preference| {
            if let Some(inner) = weak.upgrade() {
                tracing::debug!(%preference, "ambient preference changed");
                inner.submit(ThemeInput::Ambient(preference));
            }
        });

        // The source may have changed between the two reads
        let observed = observer.current();
        inner.submit(ThemeInput::Ambient(observed));

        let resolved = inner.resolved();
        tracing::debug!(
            %mode,
            ambient = %resolved.ambient(),
            scheme = %resolved.scheme(),
            "theme distributor mounted"
        );

        Self { inner, observer }
    }

    /// Handle for consumers
    pub fn context(&self) -> ThemeContext {
        ThemeContext {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Child scope providing this distributor's context
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.context())
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.inner.resolved()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    /// Release the ambient subscription, drop listeners and invalidate
    /// contexts. Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.inner.mounted.replace(false) {
            return;
        }
        self.observer.detach();
        self.inner.queue.borrow_mut().clear();
        // Listener closures may be running; clearing only drops the
        // registry's copies
        self.inner.listeners.borrow_mut().clear();
        tracing::debug!("theme distributor unmounted");
    }
}

impl Drop for ThemeDistributor {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Consumer handle onto a mounted distributor
///
/// Cheap to clone. Every method fails with
/// [`ThemeError::NoProviderInScope`] once the distributor is gone.
#[derive(Clone)]
pub struct ThemeContext {
    inner: Weak<DistributorInner>,
}

impl ThemeContext {
    fn inner(&self) -> Result<Rc<DistributorInner>> {
        self.inner
            .upgrade()
            .filter(|inner| inner.mounted.get())
            .ok_or(ThemeError::NoProviderInScope)
    }

    /// Whether the distributor behind this context is still mounted
    pub fn is_live(&self) -> bool {
        self.inner().is_ok()
    }

    /// The snapshot in effect
    pub fn resolved(&self) -> Result<ResolvedTheme> {
        Ok(self.inner()?.resolved())
    }

    /// The bundle in effect
    pub fn theme(&self) -> Result<Arc<AppTheme>> {
        Ok(Arc::clone(self.inner()?.resolved().theme()))
    }

    pub fn mode(&self) -> Result<ThemeMode> {
        Ok(self.inner()?.resolver.borrow().mode())
    }

    pub fn ambient(&self) -> Result<AmbientPreference> {
        Ok(self.inner()?.resolver.borrow().ambient())
    }

    /// Change the explicit mode. Setting the current mode is a no-op.
    pub fn set_mode(&self, mode: ThemeMode) -> Result<()> {
        self.inner()?.submit(ThemeInput::Mode(mode));
        Ok(())
    }

    /// Parse and apply a mode name. Leaves the state untouched on
    /// [`ThemeError::InvalidMode`].
    pub fn set_mode_str(&self, mode: &str) -> Result<()> {
        self.set_mode(mode.parse()?)
    }

    /// Pin the scheme opposite to the one currently resolved
    pub fn toggle(&self) -> Result<()> {
        let next = match self.resolved()?.scheme().toggle() {
            crate::tokens::SchemeKind::Light => ThemeMode::Light,
            crate::tokens::SchemeKind::Dark => ThemeMode::Dark,
        };
        self.set_mode(next)
    }

    /// Be notified of every published snapshot
    pub fn subscribe<F>(&self, listener: F) -> Result<ListenerId>
    where
        F: Fn(&ResolvedTheme) + 'static,
    {
        Ok(self.inner()?.listeners.borrow_mut().register(listener))
    }

    /// Stop notifications for `id`. Returns false if already removed or
    /// the distributor is gone.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner.listeners.borrow_mut().unregister(id),
            None => false,
        }
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("live", &self.is_live())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::ManualAmbient;

    fn mount(ambient: &ManualAmbient) -> (Arc<SchemeRegistry>, ThemeDistributor) {
        let registry = Arc::new(SchemeRegistry::builtin().unwrap());
        let distributor = ThemeDistributor::mount(Arc::clone(&registry), ambient);
        (registry, distributor)
    }

    #[test]
    fn test_mount_reads_current_ambient() {
        let ambient = ManualAmbient::new(AmbientPreference::Dark);
        let (registry, distributor) = mount(&ambient);

        let resolved = distributor.resolved();
        assert_eq!(resolved.mode(), ThemeMode::System);
        assert!(Arc::ptr_eq(resolved.theme(), registry.dark_theme()));
        assert_eq!(ambient.subscriber_count(), 1);
    }

    #[test]
    fn test_listeners_notified_in_order_with_final_value() {
        let ambient = ManualAmbient::new(AmbientPreference::Light);
        let (_registry, distributor) = mount(&ambient);
        let context = distributor.context();
        let log = Rc::new(RefCell::new(Vec::new()));

        for name in ["first", "second"] {
            let log = log.clone();
            context
                .subscribe(move |r| log.borrow_mut().push((name, r.is_dark())))
                .unwrap();
        }

        ambient.emit(AmbientPreference::Dark);
        assert_eq!(*log.borrow(), vec![("first", true), ("second", true)]);
    }

    #[test]
    fn test_reentrant_set_mode_is_queued() {
        let ambient = ManualAmbient::new(AmbientPreference::Light);
        let (_registry, distributor) = mount(&ambient);
        let context = distributor.context();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let ctx = context.clone();
        let log = seen.clone();
        context
            .subscribe(move |r| {
                log.borrow_mut().push(r.mode());
                if r.mode() == ThemeMode::Dark {
                    // Runs after this round completes
                    ctx.set_mode(ThemeMode::Light).unwrap();
                    assert_eq!(ctx.mode().unwrap(), ThemeMode::Dark);
                }
            })
            .unwrap();

        context.set_mode(ThemeMode::Dark).unwrap();
        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
        assert_eq!(context.mode().unwrap(), ThemeMode::Light);
    }

    #[test]
    fn test_setting_current_mode_publishes_nothing() {
        let ambient = ManualAmbient::new(AmbientPreference::Light);
        let (_registry, distributor) = mount(&ambient);
        let context = distributor.context();
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        context
            .subscribe(move |_| counter.set(counter.get() + 1))
            .unwrap();

        context.set_mode(ThemeMode::System).unwrap();
        context.set_mode(ThemeMode::System).unwrap();
        assert_eq!(calls.get(), 0);
        assert_eq!(distributor.resolved().revision(), 0);

        context.set_mode(ThemeMode::Dark).unwrap();
        context.set_mode(ThemeMode::Dark).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(distributor.resolved().revision(), 1);
    }

    #[test]
    fn test_unmount_invalidates_contexts() {
        let ambient = ManualAmbient::new(AmbientPreference::Light);
        let (_registry, mut distributor) = mount(&ambient);
        let context = distributor.context();

        distributor.unmount();
        distributor.unmount();

        assert!(!distributor.is_mounted());
        assert_eq!(ambient.subscriber_count(), 0);
        assert!(matches!(context.theme(), Err(ThemeError::NoProviderInScope)));
        // A late notification from the environment is harmless
        ambient.emit(AmbientPreference::Dark);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let ambient = ManualAmbient::new(AmbientPreference::Light);
        let (_registry, distributor) = mount(&ambient);
        let context = distributor.context();

        drop(distributor);
        assert_eq!(ambient.subscriber_count(), 0);
        assert!(!context.is_live());
    }

    #[test]
    fn test_toggle_pins_opposite_scheme() {
        let ambient = ManualAmbient::new(AmbientPreference::Dark);
        let (_registry, distributor) = mount(&ambient);
        let context = distributor.context();

        context.toggle().unwrap();
        assert_eq!(context.mode().unwrap(), ThemeMode::Light);
        context.toggle().unwrap();
        assert_eq!(context.mode().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn test_invalid_mode_leaves_state_unchanged() {
        let ambient = ManualAmbient::new(AmbientPreference::Light);
        let (_registry, distributor) = mount(&ambient);
        let context = distributor.context();
        let before = context.resolved().unwrap().revision();

        let err = context.set_mode_str("auto").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidMode(_)));
        assert_eq!(context.mode().unwrap(), ThemeMode::System);
        assert_eq!(context.resolved().unwrap().revision(), before);
    }
}
