//! Wire types for the Folio REST API.
//!
//! `UserProfile` is the aggregate the backend returns from every profile
//! read and write. Its two list-valued sub-resources (`experiences`,
//! `education_history`) are fetched together with the parent but mutated
//! only through their own endpoints; the profile-update payload
//! ([`ProfileUpdate`]) therefore carries scalar fields only.

use serde::{Deserialize, Serialize};

/// A user's full profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-assigned, immutable owner id.
    pub user_id: i64,
    /// User-chosen, globally unique public identifier. `None` until the
    /// user picks one.
    #[serde(default)]
    pub handle: Option<String>,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Free-text biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar URL (URLs only; there is no upload pipeline).
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// GitHub profile URL.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Personal website URL.
    #[serde(default)]
    pub website_url: Option<String>,
    /// Work experiences, ordered by the server.
    #[serde(default)]
    pub experiences: Vec<Experience>,
    /// Education history, ordered by the server. Read-only in this SDK.
    #[serde(default)]
    pub education_history: Vec<Education>,
}

/// A single work experience owned by a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Server-assigned, immutable id.
    pub id: String,
    /// Job title.
    pub title: String,
    /// Employer name.
    pub company_name: String,
    /// Free-text location.
    #[serde(default)]
    pub location: Option<String>,
    /// Start date (`YYYY-MM-DD`).
    pub start_date: String,
    /// End date, absent while the position is current.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Skills exercised in this position.
    #[serde(default)]
    pub skills_used: Vec<String>,
}

/// A single education entry owned by a profile. Display-only data; this SDK
/// exercises no create/update/delete path for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Server-assigned, immutable id.
    pub id: String,
    /// School or university name.
    pub institution_name: String,
    /// Degree earned or pursued.
    pub degree: String,
    /// Field of study.
    #[serde(default)]
    pub field_of_study: Option<String>,
    /// Start date (`YYYY-MM-DD`).
    pub start_date: String,
    /// End date, absent while ongoing.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for `PUT /profiles/me/` — the editable scalar fields, and also
/// the profile edit draft held while the edit form is open.
///
/// Fields are plain strings (never an absent/"no value" sentinel) so a form
/// bound to the draft is always controlled; see
/// [`ProfileUpdate::seeded`](crate::ProfileUpdate::seeded). Experiences and
/// education are deliberately absent: those are mutated through their own
/// endpoints only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Unique public handle.
    pub handle: String,
    /// Display name.
    pub full_name: String,
    /// Free-text biography.
    pub bio: String,
    /// Avatar URL.
    pub profile_picture_url: String,
    /// LinkedIn profile URL.
    pub linkedin_url: String,
    /// GitHub profile URL.
    pub github_url: String,
    /// Personal website URL.
    pub website_url: String,
}

/// Payload for experience create/update calls, and the experience form
/// draft. The editable field set is identical for both calls: everything on
/// [`Experience`] except the server-assigned `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceData {
    /// Job title (required by the backend).
    pub title: String,
    /// Employer name (required by the backend).
    pub company_name: String,
    /// Free-text location.
    pub location: String,
    /// Start date (`YYYY-MM-DD`, required by the backend).
    pub start_date: String,
    /// End date, empty while the position is current.
    pub end_date: String,
    /// Free-text description.
    pub description: String,
    /// Skills exercised in this position.
    pub skills_used: Vec<String>,
}

impl From<&Experience> for ExperienceData {
    /// Shallow copy of an existing experience into an editable draft,
    /// dropping the server-assigned `id` and normalizing absent optionals to
    /// the empty string.
    fn from(exp: &Experience) -> Self {
        ExperienceData {
            title: exp.title.clone(),
            company_name: exp.company_name.clone(),
            location: exp.location.clone().unwrap_or_default(),
            start_date: exp.start_date.clone(),
            end_date: exp.end_date.clone().unwrap_or_default(),
            description: exp.description.clone().unwrap_or_default(),
            skills_used: exp.skills_used.clone(),
        }
    }
}

/// Response of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Server-assigned account id.
    pub id: i64,
    /// The registered email address.
    pub email: String,
}

/// Response of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearerToken {
    /// The bearer token to attach to authenticated calls.
    pub access_token: String,
    /// Token scheme; the backend always issues `"bearer"`.
    pub token_type: String,
}
