#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod client;
pub mod errors;
mod models;
mod profile;
mod public;
mod session;
mod util;

pub mod prelude;

// --- PUBLIC API EXPORTS ---
// Transport
pub use client::core::{DEFAULT_BASE_URL, FolioClient, FolioClientBuilder};
// Session
pub use session::core::{SessionHolder, TokenStore};
pub use session::persist::{FileTokenStore, MemoryTokenStore};
// Stateful drivers
pub use profile::draft::ProfileField;
pub use profile::experience::{ExperienceForm, ExperienceManager, parse_skills, skills_text};
pub use profile::store::{HANDLE_TAKEN_MESSAGE, Mode, Phase, ProfileStore};
pub use public::{NOT_FOUND_MESSAGE, PublicPhase, PublicProfileView, TRANSIENT_MESSAGE};

// Errors
pub use errors::{BuildError, Error, Result};

// Wire types
pub use models::{
    Account, BearerToken, Education, Experience, ExperienceData, ProfileUpdate, UserProfile,
};

// Re-exports
pub use reqwest::{Method, StatusCode};
