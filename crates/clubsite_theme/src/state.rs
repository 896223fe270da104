//! Shared theme state
//!
//! `ThemeState` holds the single authoritative dark-mode flag. It is created
//! once at startup with [`ThemeState::init`] and handed to views as an
//! `Arc<ThemeState>`; there is no global instance.
//!
//! Every change goes through [`ThemeState::set_scheme`], which in one call:
//! - updates the flag and color tokens
//! - applies the root style marker
//! - persists the choice (best effort)
//! - notifies subscribers with the new scheme
//!
//! Changes are serialized, so no subscriber ever sees a half-applied toggle.
//! Subscribers must not toggle, subscribe, or unsubscribe from inside their
//! callback.

use crate::marker::{RootClassList, StyleMarker};
use crate::platform::{FixedPreference, SystemPreference};
use crate::storage::{MemoryStorage, ThemeStorage};
use crate::theme::ColorScheme;
use crate::tokens::{ColorToken, ColorTokens};
use clubsite_core::{Color, ListenerId, Listeners};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Storage key holding the persisted flag (`"true"` / `"false"`)
pub const STORAGE_KEY: &str = "darkMode";

/// Where the initial scheme came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialSource {
    /// A previously persisted choice
    Stored,
    /// The environment's ambient preference
    Ambient,
    /// Nothing available; light
    Default,
}

/// Collaborators needed to initialize the theme
pub struct ThemeOptions {
    pub storage: Box<dyn ThemeStorage>,
    pub preference: Box<dyn SystemPreference>,
    pub marker: Arc<dyn StyleMarker>,
    pub storage_key: String,
}

impl ThemeOptions {
    pub fn new(
        storage: impl ThemeStorage + 'static,
        preference: impl SystemPreference + 'static,
        marker: Arc<dyn StyleMarker>,
    ) -> Self {
        Self {
            storage: Box::new(storage),
            preference: Box::new(preference),
            marker,
            storage_key: STORAGE_KEY.to_string(),
        }
    }

    /// Memory storage, no ambient preference, a fresh root class list
    pub fn in_memory() -> Self {
        Self::new(
            MemoryStorage::new(),
            FixedPreference(None),
            Arc::new(RootClassList::new()),
        )
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

/// Shared light/dark state
pub struct ThemeState {
    scheme: RwLock<ColorScheme>,
    colors: RwLock<ColorTokens>,
    initial_source: InitialSource,
    storage: Box<dyn ThemeStorage>,
    storage_key: String,
    marker: Arc<dyn StyleMarker>,
    listeners: Mutex<Listeners<ColorScheme>>,
    /// Serializes mutations so propagation is never interleaved
    change_lock: Mutex<()>,
}

impl ThemeState {
    /// Resolve the starting scheme and apply the style marker before
    /// returning, so the first themed render already sees the right marker.
    pub fn init(options: ThemeOptions) -> Arc<Self> {
        let ThemeOptions {
            storage,
            preference,
            marker,
            storage_key,
        } = options;

        let (scheme, source) = resolve_initial(storage.as_ref(), &storage_key, preference.as_ref());
        marker.apply(scheme);
        tracing::debug!("ThemeState::init - {:?} from {:?}", scheme, source);

        Arc::new(Self {
            scheme: RwLock::new(scheme),
            colors: RwLock::new(ColorTokens::for_scheme(scheme)),
            initial_source: source,
            storage,
            storage_key,
            marker,
            listeners: Mutex::new(Listeners::new()),
            change_lock: Mutex::new(()),
        })
    }

    pub fn initial_source(&self) -> InitialSource {
        self.initial_source
    }

    // ========== Reads ==========

    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    pub fn colors(&self) -> ColorTokens {
        self.colors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
    }

    /// The view-facing pair: current flag plus a toggle handle
    pub fn use_theme(self: &Arc<Self>) -> (bool, ThemeToggle) {
        (self.is_dark(), ThemeToggle(Arc::clone(self)))
    }

    // ========== Mutation ==========

    /// Flip between light and dark. Returns the new scheme.
    pub fn toggle(&self) -> ColorScheme {
        let _guard = self.change_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let next = self.scheme().toggle();
        self.apply(next);
        next
    }

    /// Set the scheme explicitly. Does nothing if it is already active.
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let _guard = self.change_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.scheme() == scheme {
            return;
        }
        self.apply(scheme);
    }

    /// Caller holds `change_lock`
    fn apply(&self, scheme: ColorScheme) {
        tracing::debug!(
            "ThemeState::set_scheme - switching from {:?} to {:?}",
            self.scheme(),
            scheme
        );

        *self.scheme.write().unwrap_or_else(PoisonError::into_inner) = scheme;
        *self.colors.write().unwrap_or_else(PoisonError::into_inner) =
            ColorTokens::for_scheme(scheme);
        self.marker.apply(scheme);
        self.persist(scheme);

        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .notify(&scheme);
    }

    fn persist(&self, scheme: ColorScheme) {
        let value = if scheme.is_dark() { "true" } else { "false" };
        if let Err(err) = self.storage.store(&self.storage_key, value) {
            tracing::warn!("failed to persist theme choice: {err}");
        }
    }

    /// Drop the persisted choice so the next start follows the ambient preference
    pub fn forget_choice(&self) {
        if let Err(err) = self.storage.remove(&self.storage_key) {
            tracing::warn!("failed to clear theme choice: {err}");
        }
    }

    // ========== Subscription ==========

    /// Call `listener` with the new scheme after every change
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ColorScheme) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Detach every subscriber (application teardown)
    pub fn shutdown(&self) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Handle that toggles a shared theme
#[derive(Clone)]
pub struct ThemeToggle(Arc<ThemeState>);

impl ThemeToggle {
    pub fn toggle(&self) -> ColorScheme {
        self.0.toggle()
    }
}

/// Stored choice, then ambient preference, then light
fn resolve_initial(
    storage: &dyn ThemeStorage,
    key: &str,
    preference: &dyn SystemPreference,
) -> (ColorScheme, InitialSource) {
    match storage.load(key) {
        Ok(Some(value)) => match parse_stored(&value) {
            Some(dark) => return (ColorScheme::from_dark(dark), InitialSource::Stored),
            None => tracing::warn!("ignoring unrecognized stored theme value {:?}", value),
        },
        Ok(None) => {}
        Err(err) => tracing::warn!("failed to read theme choice: {err}"),
    }

    match preference.prefers_dark() {
        Some(dark) => (ColorScheme::from_dark(dark), InitialSource::Ambient),
        None => (ColorScheme::Light, InitialSource::Default),
    }
}

fn parse_stored(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::DARK_CLASS;
    use crate::storage::DisabledStorage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn options(storage: Arc<MemoryStorage>, ambient: Option<bool>) -> ThemeOptions {
        ThemeOptions::new(storage, FixedPreference(ambient), Arc::new(RootClassList::new()))
    }

    #[test]
    fn test_default_is_light() {
        let theme = ThemeState::init(ThemeOptions::in_memory());
        assert!(!theme.is_dark());
        assert_eq!(theme.initial_source(), InitialSource::Default);
    }

    #[test]
    fn test_ambient_preference_used_without_stored_choice() {
        let theme = ThemeState::init(options(Arc::new(MemoryStorage::new()), Some(true)));
        assert!(theme.is_dark());
        assert_eq!(theme.initial_source(), InitialSource::Ambient);
    }

    #[test]
    fn test_stored_choice_beats_ambient() {
        let storage = Arc::new(MemoryStorage::new());
        storage.store(STORAGE_KEY, "false").unwrap();
        let theme = ThemeState::init(options(storage, Some(true)));
        assert!(!theme.is_dark());
        assert_eq!(theme.initial_source(), InitialSource::Stored);
    }

    #[test]
    fn test_garbage_stored_value_is_ignored() {
        let storage = Arc::new(MemoryStorage::new());
        storage.store(STORAGE_KEY, "maybe").unwrap();
        let theme = ThemeState::init(options(storage, Some(true)));
        assert_eq!(theme.initial_source(), InitialSource::Ambient);
    }

    #[test]
    fn test_toggle_parity() {
        for initial in [false, true] {
            let theme = ThemeState::init(options(Arc::new(MemoryStorage::new()), Some(initial)));
            for n in 1..=7 {
                theme.toggle();
                assert_eq!(theme.is_dark(), initial ^ (n % 2 == 1), "initial={initial} n={n}");
            }
        }
    }

    #[test]
    fn test_toggle_persists_and_marks_root() {
        let storage = Arc::new(MemoryStorage::new());
        let root = Arc::new(RootClassList::new());
        let theme = ThemeState::init(ThemeOptions::new(
            storage.clone(),
            FixedPreference(None),
            root.clone(),
        ));
        assert!(!root.has_class(DARK_CLASS));

        theme.toggle();
        assert!(root.has_class(DARK_CLASS));
        assert_eq!(storage.load(STORAGE_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(theme.colors(), ColorTokens::dark());

        theme.toggle();
        assert!(!root.has_class(DARK_CLASS));
        assert_eq!(storage.load(STORAGE_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_marker_applied_at_init() {
        let root = Arc::new(RootClassList::new());
        let _theme = ThemeState::init(ThemeOptions::new(
            MemoryStorage::new(),
            FixedPreference(Some(true)),
            root.clone(),
        ));
        assert!(root.has_class(DARK_CLASS));
    }

    #[test]
    fn test_disabled_storage_keeps_in_memory_value() {
        let theme = ThemeState::init(ThemeOptions::new(
            DisabledStorage,
            FixedPreference(None),
            Arc::new(RootClassList::new()),
        ));
        assert_eq!(theme.initial_source(), InitialSource::Default);
        assert_eq!(theme.toggle(), ColorScheme::Dark);
        assert!(theme.is_dark());
    }

    #[test]
    fn test_subscribers_see_consistent_value() {
        let theme = ThemeState::init(ThemeOptions::in_memory());
        let agreed = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let observer = Arc::clone(&theme);
            let agreed = agreed.clone();
            theme.subscribe(move |scheme| {
                if observer.scheme() == *scheme {
                    agreed.fetch_add(1, Ordering::SeqCst);
                }
            });
        }

        theme.toggle();
        theme.toggle();
        assert_eq!(agreed.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_set_same_scheme_is_silent() {
        let theme = ThemeState::init(ThemeOptions::in_memory());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        theme.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        theme.set_scheme(ColorScheme::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        theme.set_scheme(ColorScheme::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_and_shutdown() {
        let theme = ThemeState::init(ThemeOptions::in_memory());
        let a = theme.subscribe(|_| {});
        theme.subscribe(|_| {});
        assert!(theme.unsubscribe(a));
        assert!(!theme.unsubscribe(a));
        assert_eq!(theme.subscriber_count(), 1);

        theme.shutdown();
        assert_eq!(theme.subscriber_count(), 0);
    }

    #[test]
    fn test_use_theme_toggle_handle() {
        let theme = ThemeState::init(ThemeOptions::in_memory());
        let (is_dark, toggle) = theme.use_theme();
        assert!(!is_dark);
        assert_eq!(toggle.toggle(), ColorScheme::Dark);
        assert!(theme.use_theme().0);
    }
}
