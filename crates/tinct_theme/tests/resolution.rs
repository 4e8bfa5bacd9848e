use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tinct_core::Scope;
use tinct_theme::{
    use_app_theme, use_border_radius, use_colors, use_elevation, use_fonts, use_spacing,
    use_theme_mode, AmbientPreference, ManualAmbient, SchemeRegistry, ThemeDistributor,
    ThemeError, ThemeMode,
};

fn registry() -> Arc<SchemeRegistry> {
    Arc::new(SchemeRegistry::builtin().expect("builtin palette should assemble"))
}

#[test]
fn explicit_modes_ignore_ambient() {
    let registry = registry();
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        for ambient in [
            AmbientPreference::Light,
            AmbientPreference::Dark,
            AmbientPreference::Unknown,
        ] {
            let source = ManualAmbient::new(ambient);
            let distributor =
                ThemeDistributor::mount_with_mode(Arc::clone(&registry), &source, mode);
            let scope = distributor.provide(&Scope::root());

            assert_eq!(
                use_app_theme(&scope).unwrap().dark(),
                mode == ThemeMode::Dark,
                "mode {mode} with ambient {ambient}"
            );
        }
    }
}

#[test]
fn system_mode_follows_ambient() {
    let registry = registry();
    let source = ManualAmbient::new(AmbientPreference::Unknown);
    let distributor = ThemeDistributor::mount(Arc::clone(&registry), &source);
    let scope = distributor.provide(&Scope::root());

    assert!(!use_app_theme(&scope).unwrap().dark());

    source.emit(AmbientPreference::Dark);
    assert!(use_app_theme(&scope).unwrap().dark());

    // A null reading from the environment counts as no preference
    source.emit_raw(None);
    assert!(!use_app_theme(&scope).unwrap().dark());
}

#[test]
fn light_to_system_under_dark_ambient_is_visible_on_next_read() {
    let registry = registry();
    let source = ManualAmbient::new(AmbientPreference::Dark);
    let distributor =
        ThemeDistributor::mount_with_mode(Arc::clone(&registry), &source, ThemeMode::Light);
    let scope = distributor.provide(&Scope::root());

    assert!(Arc::ptr_eq(&use_app_theme(&scope).unwrap(), registry.light_theme()));
    use_theme_mode(&scope)
        .unwrap()
        .set_theme_mode(ThemeMode::System)
        .unwrap();
    assert!(Arc::ptr_eq(&use_app_theme(&scope).unwrap(), registry.dark_theme()));
}

#[test]
fn repeated_set_mode_is_idempotent() {
    let registry = registry();
    let source = ManualAmbient::new(AmbientPreference::Light);
    let distributor = ThemeDistributor::mount(registry, &source);
    let context = distributor.context();
    let notifications = Rc::new(RefCell::new(0));

    let count = notifications.clone();
    context
        .subscribe(move |_| *count.borrow_mut() += 1)
        .unwrap();

    let before = context.resolved().unwrap();
    context.set_mode(ThemeMode::System).unwrap();
    context.set_mode(ThemeMode::System).unwrap();
    let after = context.resolved().unwrap();

    assert!(after.is_same_theme(&before));
    assert_eq!(after.revision(), before.revision());
    assert_eq!(*notifications.borrow(), 0);

    // Redundant notifications from the environment are dropped too
    source.emit(AmbientPreference::Light);
    assert_eq!(*notifications.borrow(), 0);
}

#[test]
fn mode_and_ambient_scenario() {
    let registry = registry();
    let source = ManualAmbient::new(AmbientPreference::Light);
    let distributor = ThemeDistributor::mount(Arc::clone(&registry), &source);
    let scope = distributor.provide(&Scope::root());
    let current = || use_app_theme(&scope).unwrap();

    assert!(Arc::ptr_eq(&current(), registry.light_theme()));

    source.emit(AmbientPreference::Dark);
    assert!(Arc::ptr_eq(&current(), registry.dark_theme()));

    let control = use_theme_mode(&scope).unwrap();
    control.set_theme_mode(ThemeMode::Light).unwrap();
    assert!(Arc::ptr_eq(&current(), registry.light_theme()));
    assert_eq!(distributor.resolved().ambient(), AmbientPreference::Dark);

    control.set_theme_mode(ThemeMode::System).unwrap();
    assert!(Arc::ptr_eq(&current(), registry.dark_theme()));
}

#[test]
fn listeners_see_published_value_in_registration_order() {
    let registry = registry();
    let source = ManualAmbient::new(AmbientPreference::Light);
    let distributor = ThemeDistributor::mount(Arc::clone(&registry), &source);
    let context = distributor.context();
    let log = Rc::new(RefCell::new(Vec::new()));

    let mut ids = Vec::new();
    for index in 0..3 {
        let log = log.clone();
        let ctx = context.clone();
        ids.push(
            context
                .subscribe(move |resolved| {
                    // Reads inside a notification already see the new value
                    let theme = ctx.theme().unwrap();
                    assert!(Arc::ptr_eq(&theme, resolved.theme()));
                    log.borrow_mut().push((index, resolved.is_dark()));
                })
                .unwrap(),
        );
    }

    source.emit(AmbientPreference::Dark);
    assert!(context.unsubscribe(ids[1]));
    assert!(!context.unsubscribe(ids[1]));
    context.set_mode(ThemeMode::Light).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![(0, true), (1, true), (2, true), (0, false), (2, false)]
    );
}

#[test]
fn partial_views_match_full_theme() {
    let registry = registry();
    let source = ManualAmbient::new(AmbientPreference::Dark);
    let distributor = ThemeDistributor::mount(registry, &source);
    let scope = distributor.provide(&Scope::root());

    for ambient in [AmbientPreference::Light, AmbientPreference::Dark] {
        source.emit(ambient);
        let theme = use_app_theme(&scope).unwrap();

        assert_eq!(&*use_colors(&scope).unwrap(), theme.colors());
        assert_eq!(&*use_spacing(&scope).unwrap(), theme.spacing());
        assert_eq!(&*use_border_radius(&scope).unwrap(), theme.border_radius());
        assert_eq!(&*use_elevation(&scope).unwrap(), theme.elevation());
        assert_eq!(&*use_fonts(&scope).unwrap(), theme.fonts());
    }
}

#[test]
fn accessors_outside_distributor_fail() {
    let registry = registry();
    let source = ManualAmbient::new(AmbientPreference::Light);
    let outside = Scope::root();

    let mut distributor = ThemeDistributor::mount(registry, &source);
    let inside = distributor.provide(&outside);

    assert!(matches!(use_app_theme(&outside), Err(ThemeError::NoProviderInScope)));
    assert!(matches!(use_spacing(&outside), Err(ThemeError::NoProviderInScope)));
    assert!(use_app_theme(&inside).is_ok());

    // Nested scopes still reach the provider
    let nested = inside.provide(42u32);
    assert!(use_colors(&nested).is_ok());

    distributor.unmount();
    assert!(matches!(use_app_theme(&inside), Err(ThemeError::NoProviderInScope)));
    assert!(matches!(use_theme_mode(&nested), Err(ThemeError::NoProviderInScope)));
}

#[test]
fn nearest_distributor_wins() {
    let registry = registry();
    let light = ManualAmbient::new(AmbientPreference::Light);
    let dark = ManualAmbient::new(AmbientPreference::Dark);

    let outer = ThemeDistributor::mount(Arc::clone(&registry), &light);
    let inner = ThemeDistributor::mount(Arc::clone(&registry), &dark);
    let outer_scope = outer.provide(&Scope::root());
    let inner_scope = inner.provide(&outer_scope);

    assert!(!use_app_theme(&outer_scope).unwrap().dark());
    assert!(use_app_theme(&inner_scope).unwrap().dark());
}
