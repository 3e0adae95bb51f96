//! Authenticated session: credential, cached identity, and their lifecycle.
//!
//! [`SessionManager`] is the only owner of the persisted credential and
//! identity record. It also implements [`Credentials`], so the transport
//! reads the bearer token from it and reports credential rejection back to
//! it, which clears both entries and raises the expired signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::api::{ApiClient, ApiError, Credentials};
use crate::model::{MemberProfile, Route, User};
use crate::oauth;
use crate::store::{SessionStore, TOKEN_KEY, USER_KEY};

mod notice;
pub use self::notice::{SESSION_EXPIRED_MESSAGE, SESSION_EXPIRED_REDIRECT, SessionExpiredNotice};

/// Backend calls the session lifecycle depends on.
pub trait MemberBackend {
    fn member_profile(&self) -> Result<MemberProfile, ApiError>;
    fn delete_account(&self) -> Result<(), ApiError>;
}

impl MemberBackend for ApiClient {
    fn member_profile(&self) -> Result<MemberProfile, ApiError> {
        self.get_member_profile()
    }

    fn delete_account(&self) -> Result<(), ApiError> {
        self.delete_member()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub credential: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Inner>,
}

struct Inner {
    store: Box<dyn SessionStore>,
    state: Mutex<Session>,
    expired: AtomicBool,
}

#[derive(Deserialize)]
struct CachedIdentity {
    #[serde(default)]
    email: Option<String>,
}

impl SessionManager {
    /// Open the session at application start. Only the credential is read
    /// here; the identity is resolved by [`SessionManager::bootstrap`].
    pub fn open(store: impl SessionStore + 'static) -> Self {
        let credential = match store.get(TOKEN_KEY) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "read stored credential");
                None
            }
        };
        Self {
            inner: Arc::new(Inner {
                store: Box::new(store),
                state: Mutex::new(Session {
                    credential,
                    user: None,
                    loading: true,
                }),
                expired: AtomicBool::new(false),
            }),
        }
    }

    pub fn credentials(&self) -> Arc<dyn Credentials> {
        Arc::new(self.clone())
    }

    pub fn snapshot(&self) -> Session {
        self.state().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Resolve the identity at startup.
    ///
    /// A cached identity record is adopted without any network call. Otherwise
    /// a stored credential is exchanged for the profile once. Every failure
    /// ends unauthenticated with loading complete.
    pub fn bootstrap<B: MemberBackend + ?Sized>(&self, backend: &B) -> Session {
        match self.read_cached_identity() {
            Ok(Some(user)) => {
                let mut st = self.state();
                st.user = Some(user);
                st.loading = false;
                return st.clone();
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!(error = %format!("{:#}", err), "failed to initialize session");
                return self.finish_loading();
            }
        }

        if self.state().credential.is_none() {
            return self.finish_loading();
        }

        match backend.member_profile() {
            Ok(profile) => {
                let user = profile.identity();
                if let Err(err) = self.persist_identity(&user) {
                    tracing::warn!(error = %format!("{:#}", err), "persist identity record");
                }
                let mut st = self.state();
                st.user = Some(user);
                st.loading = false;
                st.clone()
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to initialize session");
                self.finish_loading()
            }
        }
    }

    /// Finish an external login from the redirect callback.
    ///
    /// Returns [`Route::MyPage`] on success. A missing credential or any
    /// failing step discards partial state and returns [`Route::Login`].
    pub fn complete_external_login<B: MemberBackend + ?Sized>(
        &self,
        backend: &B,
        callback: &str,
    ) -> Route {
        let Some(token) = oauth::callback_token(callback) else {
            tracing::warn!("login callback carried no credential");
            return Route::Login;
        };

        match self.adopt_login(backend, &token) {
            Ok(user) => {
                tracing::info!(email = %user.email, "logged in");
                Route::MyPage
            }
            Err(err) => {
                tracing::error!(error = %format!("{:#}", err), "login failed");
                self.clear();
                self.inner.expired.store(false, Ordering::SeqCst);
                Route::Login
            }
        }
    }

    /// Clear credential and identity. Navigation is up to the caller.
    pub fn logout(&self) {
        self.clear();
        tracing::info!("logged out");
    }

    /// Delete the account on the backend, then log out.
    ///
    /// On failure the session is left untouched.
    pub fn delete_account<B: MemberBackend + ?Sized>(&self, backend: &B) -> Result<Route, ApiError> {
        match backend.delete_account() {
            Ok(()) => {
                self.logout();
                Ok(Route::Landing)
            }
            Err(err) => {
                tracing::error!(error = %err, "account deletion failed");
                Err(err)
            }
        }
    }

    /// Clear everything after the backend rejected the credential.
    pub fn force_logout(&self) {
        self.clear();
        self.inner.expired.store(true, Ordering::SeqCst);
    }

    /// Consume the forced-logout signal.
    pub fn take_expired(&self) -> bool {
        self.inner.expired.swap(false, Ordering::SeqCst)
    }

    fn adopt_login<B: MemberBackend + ?Sized>(&self, backend: &B, token: &str) -> Result<User> {
        self.inner
            .store
            .set(TOKEN_KEY, token)
            .context("persist credential")?;
        self.state().credential = Some(token.to_string());

        let profile = backend.member_profile().context("fetch member profile")?;
        let user = profile.identity();
        self.persist_identity(&user)?;

        let mut st = self.state();
        st.user = Some(user.clone());
        st.loading = false;
        Ok(user)
    }

    fn read_cached_identity(&self) -> Result<Option<User>> {
        let Some(raw) = self.inner.store.get(USER_KEY)? else {
            return Ok(None);
        };
        let cached: CachedIdentity =
            serde_json::from_str(&raw).context("parse cached identity record")?;
        Ok(cached
            .email
            .filter(|e| !e.is_empty())
            .map(|email| User { email }))
    }

    fn persist_identity(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user).context("serialize identity record")?;
        self.inner
            .store
            .set(USER_KEY, &raw)
            .context("persist identity record")
    }

    fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.inner.store.remove(key) {
                tracing::warn!(key, error = %format!("{:#}", err), "clear session entry");
            }
        }
        let mut st = self.state();
        st.credential = None;
        st.user = None;
        st.loading = false;
    }

    fn finish_loading(&self) -> Session {
        let mut st = self.state();
        st.loading = false;
        st.clone()
    }

    fn state(&self) -> MutexGuard<'_, Session> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Credentials for SessionManager {
    fn bearer(&self) -> Option<String> {
        self.state().credential.clone()
    }

    fn on_unauthorized(&self) {
        self.force_logout();
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
