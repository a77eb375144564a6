//! Explicit session store over the browser's localStorage.
//!
//! The stored record's presence is the sole authorization signal for
//! protected routes. There is no token, no expiry, no refresh; logout just
//! removes the key.

use gloo_console::error;
use web_sys::Storage;

use common::model::user::{SessionUser, User};

const AUTH_TOKEN_KEY: &str = "authToken";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persists the authenticated user's projection.
pub fn login(user: &User) {
    if let Some(storage) = local_storage() {
        if let Ok(serialized) = serde_json::to_string(&user.session()) {
            let _ = storage.set_item(AUTH_TOKEN_KEY, &serialized);
        }
    }
}

/// Clears the stored session; the next protected-route evaluation locks.
pub fn logout() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}

/// Reads the stored session, if any. A value that fails to parse is
/// reported and read as logged-out.
pub fn current_session() -> Option<SessionUser> {
    let raw = local_storage()?.get_item(AUTH_TOKEN_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            error!(format!("stored session is not valid JSON: {}", err));
            None
        }
    }
}
