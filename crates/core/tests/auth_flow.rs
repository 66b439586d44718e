//! End-to-end session flows: restore, login, guarded navigation, logout.

use async_trait::async_trait;
use std::sync::Arc;
use wicket_core::{
    AuthError, AuthStore, AuthTransition, CredentialsApi, MemoryTokenStore, Navigation, Router,
    Session, TOKEN_KEY, TokenStore, default_table,
};

/// Canned login endpoint: one known credential pair, everything else a 401.
struct FixedApi;

#[async_trait]
impl CredentialsApi for FixedApi {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username == "alice" && password == "correct-pw" {
            Ok("tok123".to_string())
        } else {
            Err(AuthError::Rejected(
                "Incorrect username or password".to_string(),
            ))
        }
    }
}

fn router() -> Router {
    Router::new(default_table().unwrap())
}

#[tokio::test]
async fn cold_start_with_empty_storage_lands_on_login() {
    let store = AuthStore::restore(Arc::new(FixedApi), Arc::new(MemoryTokenStore::new()));
    assert!(!store.session().authenticated());

    let mut router = router();
    let navigation = router.navigate(store.session(), "/mypage").unwrap();
    assert_eq!(
        navigation,
        Navigation::Redirected {
            from: "/mypage".to_string(),
            to: "/login".to_string(),
        },
    );
    // The gated view was never mounted.
    assert_eq!(router.current().unwrap().name, "Login");
}

#[tokio::test]
async fn login_then_navigate_to_the_root() {
    let storage = Arc::new(MemoryTokenStore::new());
    let mut store = AuthStore::restore(Arc::new(FixedApi), storage.clone());

    let transition = store.login("alice", "correct-pw").await.unwrap();
    assert_eq!(store.session().token(), Some("tok123"));
    assert!(store.session().authenticated());
    assert_eq!(storage.get(TOKEN_KEY), Some("tok123".to_string()));

    let mut router = router();
    let navigation = router
        .navigate(store.session(), transition.destination())
        .unwrap();
    assert_eq!(
        navigation,
        Navigation::Mounted {
            name: "Home".to_string(),
            path: "/".to_string(),
        },
    );
}

#[tokio::test]
async fn rejected_login_stays_on_the_login_view() {
    let mut store = AuthStore::restore(Arc::new(FixedApi), Arc::new(MemoryTokenStore::new()));
    let mut router = router();
    router.navigate(store.session(), "/login").unwrap();

    let err = store.login("alice", "wrong-pw").await.unwrap_err();
    assert!(matches!(err, AuthError::Rejected(_)));

    // No transition happened: the session is untouched and nothing
    // navigated away from the form.
    assert_eq!(store.session(), &Session::new());
    assert_eq!(router.current().unwrap().name, "Login");
}

#[tokio::test]
async fn logout_returns_to_login_and_drops_the_mirror() {
    let storage = Arc::new(MemoryTokenStore::new());
    let mut store = AuthStore::restore(Arc::new(FixedApi), storage.clone());
    store.login("alice", "correct-pw").await.unwrap();

    let mut router = router();
    router.navigate(store.session(), "/").unwrap();

    let transition = store.logout();
    assert_eq!(transition, AuthTransition::LoggedOut);
    assert_eq!(store.session().token(), None);
    assert!(!store.session().authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);

    let navigation = router
        .navigate(store.session(), transition.destination())
        .unwrap();
    assert_eq!(
        navigation,
        Navigation::Mounted {
            name: "Login".to_string(),
            path: "/login".to_string(),
        },
    );
}

#[tokio::test]
async fn restart_after_login_restores_the_session() {
    let storage = Arc::new(MemoryTokenStore::new());
    {
        let mut store = AuthStore::restore(Arc::new(FixedApi), storage.clone());
        store.login("alice", "correct-pw").await.unwrap();
    }

    // New process, same storage: the persisted token is trusted without
    // a network round trip.
    let store = AuthStore::restore(Arc::new(FixedApi), storage);
    assert!(store.session().authenticated());
    assert_eq!(store.session().token(), Some("tok123"));

    let mut router = router();
    let navigation = router.navigate(store.session(), "/mypage").unwrap();
    assert_eq!(
        navigation,
        Navigation::Mounted {
            name: "MyPage".to_string(),
            path: "/mypage".to_string(),
        },
    );
}
