use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::{RequestError, Result};
use crate::{FolioClient, models::BearerToken};

/// Durable client-side storage for the session's bearer token.
///
/// The token lives under a single well-known slot; absence means
/// "unauthenticated". Implementations must be safe to share across the
/// stateful drivers — pass the same store (via [`SessionHolder`]) to every
/// component needing authentication instead of hiding the session in a
/// global.
///
/// Provided implementations: [`crate::FileTokenStore`] (durable, the
/// secret-file pattern) and [`crate::MemoryTokenStore`] (tests).
pub trait TokenStore: Debug + Send + Sync {
    /// Read the persisted token. `None` means no session.
    fn load(&self) -> Option<String>;

    /// Persist a new token, replacing any previous one.
    fn save(&self, token: &str) -> std::io::Result<()>;

    /// Remove the persisted token. Removing an absent token is not an
    /// error.
    fn clear(&self) -> std::io::Result<()>;
}

/// The session context shared by every authenticated component.
///
/// Wraps an injectable [`TokenStore`] and owns the sign-in/sign-out
/// transitions. `SessionHolder` is cheap to clone; clones share the same
/// underlying store.
///
/// Cross-cutting rule: any authenticated driver that receives an error
/// classified as an authentication failure (HTTP 401 or a
/// credential-validation message) must call [`SessionHolder::sign_out`] and
/// transition to its signed-out phase — never surface it as a page error.
/// The drivers in this crate apply that rule on every fetch path.
#[derive(Clone, Debug)]
pub struct SessionHolder {
    store: Arc<dyn TokenStore>,
}

impl SessionHolder {
    /// Wrap a storage backend.
    pub fn new(store: Arc<dyn TokenStore>) -> SessionHolder {
        SessionHolder { store }
    }

    /// The current bearer token, if any. `None` means unauthenticated and
    /// the caller should route to sign-in.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// Exchange credentials for a bearer token and persist it.
    ///
    /// Persistence failures surface as a validation error so the caller
    /// knows the session will not survive a restart.
    pub async fn sign_in(&self, client: &FolioClient, email: &str, password: &str) -> Result<()> {
        let BearerToken { access_token, .. } = client.signin(email, password).await?;
        self.store.save(&access_token).map_err(|e| {
            RequestError::Validation {
                message: format!("failed to persist session token: {e}"),
            }
        })?;
        Ok(())
    }

    /// Clear the stored token. The owning view routes to sign-in afterwards.
    ///
    /// Storage failures are logged and swallowed: sign-out must always
    /// leave the client unauthenticated from the app's point of view.
    pub fn sign_out(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to clear session token: {e}");
        }
    }
}
