//! Session token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is the only durable client state. In the browser it
//! lives in localStorage; native builds keep it in a per-thread slot so the
//! session flows behave the same under `cargo test`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

pub const TOKEN_KEY: &str = "token";

#[cfg(not(feature = "csr"))]
thread_local! {
    static TOKEN: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored bearer token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "csr")]
    let token = local_storage()?.get_item(TOKEN_KEY).ok().flatten();
    #[cfg(not(feature = "csr"))]
    let token = TOKEN.with_borrow(Clone::clone);

    token.filter(|t| !t.is_empty())
}

/// Persist the bearer token.
pub fn save_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; session will not survive reload");
            return;
        };
        if let Err(err) = storage.set_item(TOKEN_KEY, token) {
            log::warn!("token write rejected; session will not survive reload: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        TOKEN.with_borrow_mut(|slot| *slot = Some(token.to_owned()));
    }
}

/// Discard the bearer token.
pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.remove_item(TOKEN_KEY) {
                log::warn!("token removal rejected: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        TOKEN.with_borrow_mut(|slot| *slot = None);
    }
}
