use endgame_core::{PreferenceStore, PrefsError};
use web_sys as web;

/// `PreferenceStore` over `window.localStorage`. Storage may be missing
/// (private mode, sandboxed iframes); reads then return nothing.
pub struct LocalStorage {
    storage: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[prefs] localStorage unavailable; settings will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let storage = self.storage.as_ref().ok_or(PrefsError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| PrefsError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
