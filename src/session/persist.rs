use std::path::PathBuf;
use std::sync::Mutex;

use super::core::TokenStore;

/// Durable [`TokenStore`] keeping the bearer token as plain text in a single
/// file. On Unix the file is written with `0o600` permissions.
///
/// Treat the file contents as a **bearer secret**: do not log it and keep it
/// out of world-readable locations.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token at `path`. The parent directory must exist.
    pub fn new(path: impl Into<PathBuf>) -> FileTokenStore {
        FileTokenStore { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        std::fs::write(&self.path, token)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory [`TokenStore`] for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Start with a token already present.
    pub fn with_token(token: &str) -> MemoryTokenStore {
        MemoryTokenStore {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().expect("token lock poisoned").clone()
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        *self.token.lock().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        *self.token.lock().expect("token lock poisoned") = None;
        Ok(())
    }
}
