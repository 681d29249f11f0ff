//! Public read-only profile lookup by handle. No session involved.

use crate::FolioClient;
use crate::models::UserProfile;

/// Message rendered when no profile exists for the requested handle.
pub const NOT_FOUND_MESSAGE: &str = "Profile not found.";
/// Message rendered for any other lookup failure.
pub const TRANSIENT_MESSAGE: &str = "Failed to load profile. Please try again later.";

/// Lifecycle of the public profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicPhase {
    /// The route's handle parameter is not resolved yet; nothing fetched.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The profile was found.
    Loaded(UserProfile),
    /// No profile exists for this handle. Rendered with a navigation
    /// affordance back to a safe page.
    NotFound,
    /// The lookup failed for a transient reason; holds the retry-later
    /// message.
    Failed(String),
}

/// Stateful driver for the public profile page.
///
/// The fetch is keyed strictly on the handle value: [`PublicProfileView::ensure`]
/// defers while the route parameter is unresolved and never refetches for
/// the handle it already holds, so unrelated re-renders cost nothing.
#[derive(Debug)]
pub struct PublicProfileView {
    client: FolioClient,
    /// Handle the current phase corresponds to.
    key: Option<String>,
    phase: PublicPhase,
}

impl PublicProfileView {
    /// A view with nothing fetched yet.
    pub fn new(client: FolioClient) -> PublicProfileView {
        PublicProfileView {
            client,
            key: None,
            phase: PublicPhase::Idle,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> &PublicPhase {
        &self.phase
    }

    /// The loaded profile, if any.
    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.phase {
            PublicPhase::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    /// The user-facing failure message, if the view is in a failure state.
    pub fn message(&self) -> Option<&str> {
        match &self.phase {
            PublicPhase::NotFound => Some(NOT_FOUND_MESSAGE),
            PublicPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fetch the profile for `handle` unless it is already the one this
    /// view holds.
    ///
    /// `None` (route parameter not yet resolved, e.g. during hydration)
    /// defers the fetch and leaves the view [`PublicPhase::Idle`]. A 404 —
    /// or a message carrying the documented not-found substrings — becomes
    /// [`PublicPhase::NotFound`]; any other failure becomes
    /// [`PublicPhase::Failed`] with the generic retry-later message.
    pub async fn ensure(&mut self, handle: Option<&str>) {
        let Some(handle) = handle else {
            return;
        };
        if self.key.as_deref() == Some(handle) {
            return;
        }

        self.key = Some(handle.to_string());
        self.phase = PublicPhase::Loading;
        match self.client.profile_by_handle(handle).await {
            Ok(profile) => self.phase = PublicPhase::Loaded(profile),
            Err(err) if err.is_not_found() => self.phase = PublicPhase::NotFound,
            Err(err) => {
                tracing::debug!("public profile lookup failed: {err}");
                self.phase = PublicPhase::Failed(TRANSIENT_MESSAGE.to_string());
            }
        }
    }
}
