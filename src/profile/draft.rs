//! Draft seeding and field addressing for the profile edit form.

use crate::models::{ProfileUpdate, UserProfile};

/// Addresses one editable scalar field of the profile draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    /// The unique public handle.
    Handle,
    /// Display name.
    FullName,
    /// Free-text biography.
    Bio,
    /// Avatar URL.
    ProfilePictureUrl,
    /// LinkedIn profile URL.
    LinkedinUrl,
    /// GitHub profile URL.
    GithubUrl,
    /// Personal website URL.
    WebsiteUrl,
}

impl ProfileUpdate {
    /// Seed a fresh draft from a loaded profile.
    ///
    /// Every absent optional is coerced to the empty string so a form bound
    /// to the draft is always controlled; the draft never carries
    /// `experiences`/`education_history` or the immutable `user_id`.
    pub fn seeded(profile: &UserProfile) -> ProfileUpdate {
        ProfileUpdate {
            handle: profile.handle.clone().unwrap_or_default(),
            full_name: profile.full_name.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
            profile_picture_url: profile.profile_picture_url.clone().unwrap_or_default(),
            linkedin_url: profile.linkedin_url.clone().unwrap_or_default(),
            github_url: profile.github_url.clone().unwrap_or_default(),
            website_url: profile.website_url.clone().unwrap_or_default(),
        }
    }

    /// Overwrite one field of the draft.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Handle => &mut self.handle,
            ProfileField::FullName => &mut self.full_name,
            ProfileField::Bio => &mut self.bio,
            ProfileField::ProfilePictureUrl => &mut self.profile_picture_url,
            ProfileField::LinkedinUrl => &mut self.linkedin_url,
            ProfileField::GithubUrl => &mut self.github_url,
            ProfileField::WebsiteUrl => &mut self.website_url,
        };
        *slot = value.into();
    }
}
