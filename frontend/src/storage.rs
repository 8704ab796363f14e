use shared::error::StorageError;
use shared::storage::StorageBackend;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

/// Browser `localStorage` as a progress backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

fn js_error(e: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", e))
}

fn local_storage() -> Result<Storage, StorageError> {
    window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}
