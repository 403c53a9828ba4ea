//! Browser `localStorage` access for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues a JWT on sign-in. It is kept under a single storage key
//! so a reload keeps the user signed in, and every authenticated request reads
//! it back from here. On the server these helpers are inert.

/// Storage key holding the JWT.
pub const TOKEN_KEY: &str = "token";

/// Read the stored token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` for later requests.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            leptos::logging::warn!("failed to persist session token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the stored token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
