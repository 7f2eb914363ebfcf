//! Sidebar preference persistence
//!
//! The collapse flag is stored as a bare string: `"true"` means collapsed,
//! anything else (including a missing key) means expanded.

use std::cell::RefCell;

use crate::services::errors::{UiError, UiResult};
use crate::utils::local_storage;

/// Where the sidebar collapse flag lives between page loads
pub trait PreferenceStore {
    /// `None` when nothing has been stored yet
    fn load_collapsed(&self) -> Option<bool>;

    fn save_collapsed(&self, collapsed: bool) -> UiResult<()>;
}

/// Decode a raw stored value. Only the exact string `"true"` is collapsed.
pub fn decode_flag(raw: &str) -> bool {
    raw == "true"
}

pub fn encode_flag(collapsed: bool) -> &'static str {
    if collapsed {
        "true"
    } else {
        "false"
    }
}

/// Browser `localStorage` backed store
#[derive(Debug, Clone, PartialEq)]
pub struct LocalPreferenceStore {
    key: String,
}

impl LocalPreferenceStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load_collapsed(&self) -> Option<bool> {
        // Read the raw string: the flag predates JSON encoding and any
        // non-"true" value must count as expanded rather than a parse error.
        local_storage()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .map(|raw| decode_flag(&raw))
    }

    fn save_collapsed(&self, collapsed: bool) -> UiResult<()> {
        let storage = local_storage().ok_or_else(|| UiError::Storage {
            key: self.key.clone(),
            reason: "localStorage unavailable".to_string(),
        })?;
        storage
            .set_item(&self.key, encode_flag(collapsed))
            .map_err(|e| UiError::Storage {
                key: self.key.clone(),
                reason: format!("{:?}", e),
            })
    }
}

/// In-memory store for hosts without `localStorage`
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: RefCell<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw value as if written by an older page
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_collapsed(&self) -> Option<bool> {
        self.value.borrow().as_deref().map(decode_flag)
    }

    fn save_collapsed(&self, collapsed: bool) -> UiResult<()> {
        *self.value.borrow_mut() = Some(encode_flag(collapsed).to_string());
        Ok(())
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_persists_flag() {
        let store = LocalPreferenceStore::new("sidebarCollapsed-test");
        store.save_collapsed(true).unwrap();
        assert_eq!(store.load_collapsed(), Some(true));

        let storage = local_storage().unwrap();
        storage.set_item(store.key(), "garbage").unwrap();
        assert_eq!(store.load_collapsed(), Some(false));

        storage.remove_item(store.key()).unwrap();
        assert_eq!(store.load_collapsed(), None);
    }
}
