use serde::{Deserialize, Serialize};
use crate::config::{COOKIE_CONSENT_KEY, COOKIE_PREFERENCES_KEY};
use crate::storage::{KeyValueStore, StorageError};

const CONSENT_GIVEN: &str = "true";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookiePreferences {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self::necessary_only()
    }
}

impl CookiePreferences {
    pub fn necessary_only() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
        }
    }

    pub fn all() -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
        }
    }

    fn normalized(self) -> Self {
        Self {
            necessary: true,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceKey {
    Necessary,
    Analytics,
    Marketing,
}

/// Unsaved banner choices. Only a commit on [`ConsentStore`] persists them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsentDraft {
    preferences: CookiePreferences,
}

impl ConsentDraft {
    pub fn new(preferences: CookiePreferences) -> Self {
        Self {
            preferences: preferences.normalized(),
        }
    }

    pub fn preferences(&self) -> CookiePreferences {
        self.preferences
    }

    /// Flips a non-necessary category; necessary cookies cannot be turned off.
    pub fn toggle(&mut self, key: PreferenceKey) {
        match key {
            PreferenceKey::Necessary => {}
            PreferenceKey::Analytics => self.preferences.analytics = !self.preferences.analytics,
            PreferenceKey::Marketing => self.preferences.marketing = !self.preferences.marketing,
        }
    }
}

/// Side effects gated by consent (tag managers, pixels).
pub trait Integrations {
    fn enable_analytics(&self);
    fn enable_marketing(&self);
}

pub fn apply_integrations(preferences: &CookiePreferences, integrations: &impl Integrations) {
    if preferences.analytics {
        integrations.enable_analytics();
    }
    if preferences.marketing {
        integrations.enable_marketing();
    }
}

pub struct ConsentStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> ConsentStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Any recorded value counts; only absent or blank means no choice yet.
    pub fn has_consent(&self) -> bool {
        self.storage
            .get(COOKIE_CONSENT_KEY)
            .is_some_and(|value| !value.is_empty())
    }

    /// Saved preferences, or necessary-only when nothing valid is stored.
    pub fn load_preferences(&self) -> CookiePreferences {
        let Some(raw) = self.storage.get(COOKIE_PREFERENCES_KEY) else {
            return CookiePreferences::default();
        };

        match serde_json::from_str::<CookiePreferences>(&raw) {
            Ok(preferences) => preferences.normalized(),
            Err(e) => {
                log::warn!("Ignoring malformed cookie preferences: {}", e);
                CookiePreferences::default()
            }
        }
    }

    pub fn accept_all(&self, integrations: &impl Integrations) -> CookiePreferences {
        self.save_preferences(CookiePreferences::all(), integrations)
    }

    pub fn accept_necessary_only(&self, integrations: &impl Integrations) -> CookiePreferences {
        self.save_preferences(CookiePreferences::necessary_only(), integrations)
    }

    /// Persists the pair and starts whatever the preferences allow. A storage
    /// failure is logged and the preferences still apply for this page view.
    pub fn save_preferences(
        &self,
        preferences: CookiePreferences,
        integrations: &impl Integrations,
    ) -> CookiePreferences {
        let preferences = preferences.normalized();
        if let Err(e) = self.commit(&preferences) {
            log::warn!("Cookie preferences kept for this session only: {}", e);
        }
        apply_integrations(&preferences, integrations);
        preferences
    }

    /// Writes the record, then the flag. A failed flag write removes the
    /// record again so the two keys never disagree.
    fn commit(&self, preferences: &CookiePreferences) -> Result<(), StorageError> {
        let record = serde_json::to_string(preferences).map_err(|_| StorageError::Write {
            key: COOKIE_PREFERENCES_KEY.to_string(),
        })?;
        self.storage.set(COOKIE_PREFERENCES_KEY, &record)?;

        if let Err(e) = self.storage.set(COOKIE_CONSENT_KEY, CONSENT_GIVEN) {
            if let Err(rollback) = self.storage.remove(COOKIE_PREFERENCES_KEY) {
                log::warn!("Cookie preferences left without a consent flag: {}", rollback);
            }
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct Recorder {
        analytics: Cell<u32>,
        marketing: Cell<u32>,
    }

    impl Integrations for Recorder {
        fn enable_analytics(&self) {
            self.analytics.set(self.analytics.get() + 1);
        }
        fn enable_marketing(&self) {
            self.marketing.set(self.marketing.get() + 1);
        }
    }

    /// Storage that refuses writes to one key.
    #[derive(Default)]
    struct FailingStorage {
        items: RefCell<HashMap<String, String>>,
        reject: &'static str,
        reject_remove: bool,
    }

    impl KeyValueStore for FailingStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.reject {
                return Err(StorageError::Write { key: key.to_string() });
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if self.reject_remove {
                return Err(StorageError::Remove { key: key.to_string() });
            }
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }

    #[test]
    fn first_visit_has_no_consent_and_safe_defaults() {
        let store = ConsentStore::new(MemoryStorage::new());
        assert!(!store.has_consent());
        assert_eq!(store.load_preferences(), CookiePreferences::necessary_only());
    }

    #[test]
    fn accept_all_survives_a_reload() {
        let storage = MemoryStorage::new();
        let recorder = Recorder::default();
        ConsentStore::new(storage.clone()).accept_all(&recorder);

        let reloaded = ConsentStore::new(storage);
        assert!(reloaded.has_consent());
        assert_eq!(reloaded.load_preferences(), CookiePreferences::all());
        assert_eq!(recorder.analytics.get(), 1);
        assert_eq!(recorder.marketing.get(), 1);
    }

    #[test]
    fn necessary_only_records_consent_without_tracking() {
        let storage = MemoryStorage::new();
        let recorder = Recorder::default();
        let store = ConsentStore::new(storage);
        store.accept_all(&recorder);
        let saved = store.accept_necessary_only(&recorder);

        assert_eq!(saved, CookiePreferences { necessary: true, analytics: false, marketing: false });
        assert!(store.has_consent());
        assert_eq!(store.load_preferences(), saved);
        assert_eq!(recorder.analytics.get(), 1);
    }

    #[test]
    fn draft_toggle_never_touches_necessary() {
        let mut draft = ConsentDraft::default();
        draft.toggle(PreferenceKey::Necessary);
        assert!(draft.preferences().necessary);

        draft.toggle(PreferenceKey::Analytics);
        assert_eq!(draft.preferences(), CookiePreferences { necessary: true, analytics: true, marketing: false });
        draft.toggle(PreferenceKey::Analytics);
        draft.toggle(PreferenceKey::Marketing);
        assert_eq!(draft.preferences(), CookiePreferences { necessary: true, analytics: false, marketing: true });
    }

    #[test]
    fn draft_is_not_persisted_until_saved() {
        let storage = MemoryStorage::new();
        let store = ConsentStore::new(storage);
        let mut draft = ConsentDraft::new(store.load_preferences());
        draft.toggle(PreferenceKey::Marketing);
        assert!(!store.has_consent());

        let recorder = Recorder::default();
        store.save_preferences(draft.preferences(), &recorder);
        assert_eq!(store.load_preferences(), draft.preferences());
        assert_eq!(recorder.analytics.get(), 0);
        assert_eq!(recorder.marketing.get(), 1);
    }

    #[test]
    fn malformed_record_falls_back_to_default() {
        let storage = MemoryStorage::new();
        storage.set(COOKIE_CONSENT_KEY, "true").unwrap();
        storage.set(COOKIE_PREFERENCES_KEY, "{not json").unwrap();
        let store = ConsentStore::new(storage);
        assert_eq!(store.load_preferences(), CookiePreferences::necessary_only());
    }

    #[test]
    fn stored_necessary_false_is_forced_back_on() {
        let storage = MemoryStorage::new();
        storage
            .set(COOKIE_PREFERENCES_KEY, r#"{"necessary":false,"analytics":true,"marketing":false}"#)
            .unwrap();
        let prefs = ConsentStore::new(storage).load_preferences();
        assert_eq!(prefs, CookiePreferences { necessary: true, analytics: true, marketing: false });
    }

    #[test]
    fn failed_flag_write_rolls_back_the_record() {
        let storage = FailingStorage {
            reject: COOKIE_CONSENT_KEY,
            ..Default::default()
        };
        let store = ConsentStore::new(storage);
        let recorder = Recorder::default();
        let applied = store.accept_all(&recorder);

        assert_eq!(applied, CookiePreferences::all());
        assert_eq!(recorder.analytics.get(), 1);
        assert!(!store.has_consent());
        assert_eq!(store.storage.get(COOKIE_PREFERENCES_KEY), None);
    }

    #[test]
    fn failed_record_write_leaves_no_flag() {
        let storage = FailingStorage {
            reject: COOKIE_PREFERENCES_KEY,
            ..Default::default()
        };
        let store = ConsentStore::new(storage);
        store.accept_all(&Recorder::default());
        assert!(!store.has_consent());
        assert_eq!(store.load_preferences(), CookiePreferences::necessary_only());
    }

    #[test]
    fn any_recorded_flag_value_counts_as_consent() {
        let storage = MemoryStorage::new();
        storage.set(COOKIE_CONSENT_KEY, "accepted").unwrap();
        assert!(ConsentStore::new(storage.clone()).has_consent());

        storage.set(COOKIE_CONSENT_KEY, "").unwrap();
        assert!(!ConsentStore::new(storage).has_consent());
    }

    #[test]
    fn failed_rollback_still_reports_no_consent() {
        let storage = FailingStorage {
            reject: COOKIE_CONSENT_KEY,
            reject_remove: true,
            ..Default::default()
        };
        let store = ConsentStore::new(storage);
        let recorder = Recorder::default();
        let applied = store.accept_all(&recorder);

        assert_eq!(applied, CookiePreferences::all());
        assert!(!store.has_consent());
        assert!(store.storage.get(COOKIE_PREFERENCES_KEY).is_some());
    }
}
