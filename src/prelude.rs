//! Common imports for quick starts.

// Common
pub use crate::{BuildError, Error, Result};

// Transport
pub use crate::{FolioClient, FolioClientBuilder};

// Session context and storage backends
pub use crate::{FileTokenStore, MemoryTokenStore, SessionHolder, TokenStore};

// Stateful drivers
// Profile view/edit state machine and its field addressing.
pub use crate::{Mode, Phase, ProfileField, ProfileStore};
// Experience sub-resource forms.
pub use crate::ExperienceManager;
// Public read-only lookup by handle.
pub use crate::{PublicPhase, PublicProfileView};

// Wire types
pub use crate::{Account, BearerToken, Education, Experience, ExperienceData, ProfileUpdate, UserProfile};
