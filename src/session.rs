//! The browser tab is the session: its id lives in `sessionStorage`.

const SESSION_KEY: &str = "welcome_back.session_id";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

pub fn stored_session_id() -> Option<String> {
    storage()?.get_item(SESSION_KEY).ok()?
}

pub fn remember_session_id(id: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(SESSION_KEY, id).is_err() {
            web_sys::console::log_1(&"Could not store session id".into());
        }
    }
}
