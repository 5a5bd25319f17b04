//! Storage seam for the saved object list
//!
//! The simulation never talks to storage directly; the facade flushes a
//! snapshot through an `ObjectStore` after commands and frames. Writes are
//! fire-and-forget: a failure is logged and the simulation carries on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub trait ObjectStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), String>;
    fn clear(&mut self, key: &str) -> Result<(), String>;
}

/// In-memory store. Clones share the same backing map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl ObjectStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage`
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// `None` when storage is unavailable (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(e: wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

#[cfg(target_arch = "wasm32")]
impl ObjectStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn clear(&mut self, key: &str) -> Result<(), String> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

/// `localStorage` in the browser, falling back to memory elsewhere
pub fn default_store() -> Box<dyn ObjectStore> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(store) = LocalStorageStore::open() {
            return Box::new(store);
        }
        log::warn!("localStorage unavailable, weights will not survive a reload");
    }
    Box::new(MemoryStore::new())
}
