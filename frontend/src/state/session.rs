use crate::{api::Identity, utils::storage as storage_utils};
use leptos::*;
use std::rc::Rc;

pub const USER_STORAGE_KEY: &str = "user";

/// Source of the signed-in identity. The page only reads it.
pub trait SessionProvider {
    fn current_identity(&self) -> Option<Identity>;
}

/// Reads the identity the login flow persisted in `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionProvider for LocalStorageSession {
    fn current_identity(&self) -> Option<Identity> {
        match storage_utils::read_json::<Identity>(USER_STORAGE_KEY) {
            Ok(identity) => identity,
            Err(err) => {
                log::warn!("Ignoring stored user: {}", err);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    identity: Option<Identity>,
}

impl StaticSession {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }
}

impl SessionProvider for StaticSession {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}

#[derive(Clone)]
pub struct SessionContext(Rc<dyn SessionProvider>);

impl SessionContext {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn identity(&self) -> Option<Identity> {
        self.0.current_identity()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(LocalStorageSession))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    fn jane() -> Identity {
        Identity {
            id: "u1".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
        }
    }

    #[test]
    fn use_session_prefers_provided_context() {
        with_runtime(|| {
            provide_context(SessionContext::new(StaticSession::new(Some(jane()))));
            assert_eq!(use_session().identity(), Some(jane()));
        });
    }

    #[test]
    fn use_session_falls_back_to_local_storage() {
        with_runtime(|| {
            // No browser storage on the host, so nobody is signed in.
            assert!(use_session().identity().is_none());
        });
    }
}
