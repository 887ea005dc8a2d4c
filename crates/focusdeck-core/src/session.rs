//! Session handling: the authentication collaborator and the session mirror.
//!
//! The collaborator speaks a single-endpoint JSON protocol; every transport
//! problem (network error, non-2xx, malformed body) collapses into
//! [`AuthError::Transport`] so callers can report one generic retry message.
//! The in-memory session and its persisted mirror are updated together and
//! never diverge outside a single operation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, CoreError, ValidationError};
use crate::events::Event;
use crate::storage::{keys, Store};

/// Authenticated identity. Fields are opaque to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    action: &'static str,
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Deserialize)]
struct AuthResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    user: Option<Session>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the authentication collaborator.
pub struct AuthClient {
    endpoint: String,
    client: reqwest::Client,
}

impl AuthClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.call(AuthRequest {
            action: "login",
            email,
            password,
            name: None,
        })
        .await
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        self.call(AuthRequest {
            action: "signup",
            email,
            password,
            name: Some(name),
        })
        .await
    }

    async fn call(&self, request: AuthRequest<'_>) -> Result<Session, AuthError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Transport(format!("HTTP {status}")));
        }

        let body: AuthResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if body.success {
            body.user
                .ok_or_else(|| AuthError::Transport("success response without user".into()))
        } else {
            Err(AuthError::Rejected(
                body.error.unwrap_or_else(|| "authentication failed".into()),
            ))
        }
    }
}

/// Owns the current session and keeps the `currentUser` mirror in sync.
pub struct SessionManager {
    client: AuthClient,
    current: Option<Session>,
}

impl SessionManager {
    pub fn new(client: AuthClient) -> Self {
        Self {
            client,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Adopt a persisted session at startup. No staleness check.
    pub fn restore(&mut self, store: &Store) -> Option<Event> {
        let session: Session = store.get(keys::CURRENT_USER)?;
        let name = session.name.clone();
        self.current = Some(session);
        Some(Event::SessionRestored {
            name,
            at: Utc::now(),
        })
    }

    /// Authenticate. On any failure the prior session state -- memory and
    /// mirror -- is left untouched.
    pub async fn login(
        &mut self,
        store: &mut Store,
        email: &str,
        password: &str,
    ) -> Result<Event, CoreError> {
        let session = self.client.login(email, password).await?;
        self.adopt(store, session)
    }

    /// Register a new account. The password/confirmation check happens
    /// before any network call.
    pub async fn signup(
        &mut self,
        store: &mut Store,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Event, CoreError> {
        if password != confirm {
            return Err(ValidationError::PasswordMismatch.into());
        }
        let session = self.client.signup(name, email, password).await?;
        self.adopt(store, session)
    }

    /// Clear memory and mirror unconditionally. Always succeeds even if the
    /// mirror write fails, because a dangling mirror is rewritten on next
    /// login anyway.
    pub fn logout(&mut self, store: &mut Store) -> Event {
        self.current = None;
        if let Err(e) = store.remove(keys::CURRENT_USER) {
            log::warn!("failed to clear persisted session: {e}");
        }
        Event::SessionClosed { at: Utc::now() }
    }

    fn adopt(&mut self, store: &mut Store, session: Session) -> Result<Event, CoreError> {
        // Mirror first: if the write fails, memory is untouched too.
        store.set(keys::CURRENT_USER, &session)?;
        let event = Event::SessionOpened {
            name: session.name.clone(),
            email: session.email.clone(),
            at: Utc::now(),
        };
        self.current = Some(session);
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path().join("state.json"));
        (dir, store)
    }

    fn user_body() -> &'static str {
        r#"{"success":true,"user":{"id":"7","name":"Ada","email":"a@b.com"}}"#
    }

    #[tokio::test]
    async fn login_success_adopts_and_mirrors() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "action": "login",
                "email": "a@b.com",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(user_body())
            .create_async()
            .await;

        let (_dir, mut store) = temp_store();
        let mut manager = SessionManager::new(AuthClient::new(server.url()));
        let event = manager.login(&mut store, "a@b.com", "x").await.unwrap();

        assert!(matches!(event, Event::SessionOpened { .. }));
        assert_eq!(manager.current().unwrap().name, "Ada");
        let mirrored: Session = store.get(keys::CURRENT_USER).unwrap();
        assert_eq!(&mirrored, manager.current().unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_login_leaves_state_unchanged() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":false,"error":"bad credentials"}"#)
            .create_async()
            .await;

        let (_dir, mut store) = temp_store();
        let mut manager = SessionManager::new(AuthClient::new(server.url()));
        let err = manager
            .login(&mut store, "a@b.com", "x")
            .await
            .unwrap_err();

        match err {
            CoreError::Auth(AuthError::Rejected(reason)) => {
                assert_eq!(reason, "bad credentials")
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert!(manager.current().is_none());
        assert!(!store.contains(keys::CURRENT_USER));
    }

    #[tokio::test]
    async fn transport_failures_collapse_to_generic_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(500)
            .create_async()
            .await;

        let (_dir, mut store) = temp_store();
        let mut manager = SessionManager::new(AuthClient::new(server.url()));
        let err = manager.login(&mut store, "a@b.com", "x").await.unwrap_err();
        assert!(matches!(err, CoreError::Auth(AuthError::Transport(_))));
        assert!(manager.current().is_none());
    }

    #[tokio::test]
    async fn malformed_body_is_a_transport_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let (_dir, mut store) = temp_store();
        let mut manager = SessionManager::new(AuthClient::new(server.url()));
        let err = manager.login(&mut store, "a@b.com", "x").await.unwrap_err();
        assert!(matches!(err, CoreError::Auth(AuthError::Transport(_))));
    }

    #[tokio::test]
    async fn signup_mismatch_fails_before_any_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .expect(0)
            .create_async()
            .await;

        let (_dir, mut store) = temp_store();
        let mut manager = SessionManager::new(AuthClient::new(server.url()));
        let err = manager
            .signup(&mut store, "Ada", "a@b.com", "p1", "p2")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::PasswordMismatch)
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn signup_success_behaves_like_login() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "action": "signup",
                "name": "Ada",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(user_body())
            .create_async()
            .await;

        let (_dir, mut store) = temp_store();
        let mut manager = SessionManager::new(AuthClient::new(server.url()));
        manager
            .signup(&mut store, "Ada", "a@b.com", "p", "p")
            .await
            .unwrap();
        assert!(manager.current().is_some());
        assert!(store.contains(keys::CURRENT_USER));
    }

    #[test]
    fn restore_adopts_persisted_session() {
        let (_dir, mut store) = temp_store();
        let session = Session {
            id: "7".into(),
            name: "Ada".into(),
            email: "a@b.com".into(),
        };
        store.set(keys::CURRENT_USER, &session).unwrap();

        let mut manager = SessionManager::new(AuthClient::new("http://unused.invalid"));
        let event = manager.restore(&store);
        assert!(matches!(event, Some(Event::SessionRestored { .. })));
        assert_eq!(manager.current(), Some(&session));
    }

    #[test]
    fn restore_with_no_mirror_is_none() {
        let (_dir, store) = temp_store();
        let mut manager = SessionManager::new(AuthClient::new("http://unused.invalid"));
        assert!(manager.restore(&store).is_none());
        assert!(manager.current().is_none());
    }

    #[test]
    fn logout_clears_memory_and_mirror() {
        let (_dir, mut store) = temp_store();
        let session = Session {
            id: "7".into(),
            name: "Ada".into(),
            email: "a@b.com".into(),
        };
        store.set(keys::CURRENT_USER, &session).unwrap();

        let mut manager = SessionManager::new(AuthClient::new("http://unused.invalid"));
        manager.restore(&store);
        let event = manager.logout(&mut store);
        assert!(matches!(event, Event::SessionClosed { .. }));
        assert!(manager.current().is_none());
        assert!(!store.contains(keys::CURRENT_USER));
    }
}
