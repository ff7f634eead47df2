use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn load_string(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn save_string(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("could not persist {} to localStorage", key);
        }
    }
}
