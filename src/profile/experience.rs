//! Form state for the work-experience sub-resource.
//!
//! Experiences are list-valued children of the profile aggregate: fetched
//! with the parent, mutated only through their own endpoints. Every
//! successful mutation triggers a full profile reload through the
//! [`ProfileStore`] — refetch-on-write instead of patching the local list,
//! which keeps the parent server-consistent and rules out
//! ordering/duplication drift. The reload is issued strictly after the
//! mutation resolves.

use crate::models::{Experience, ExperienceData};
use crate::profile::store::ProfileStore;

/// One open experience form: a draft plus the id being edited (`None` for a
/// new entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceForm {
    /// Id of the experience under edit, or `None` when adding.
    pub editing: Option<String>,
    /// The editable field set.
    pub draft: ExperienceData,
}

/// Stateful driver for the experience add/edit/delete forms.
///
/// Per-item states: closed → form open (new or editing an id) → closed.
/// Deletion is a two-step: [`ExperienceManager::request_delete`] stages the
/// id so the embedding view can show a confirmation prompt, and only
/// [`ExperienceManager::confirm_delete`] issues the call.
///
/// The manager holds no transport of its own; mutating calls borrow the
/// [`ProfileStore`] to share its client/session and to delegate the
/// post-mutation reload back to it.
#[derive(Debug, Default)]
pub struct ExperienceManager {
    form: Option<ExperienceForm>,
    pending_delete: Option<String>,
    error: Option<String>,
    submitting: bool,
}

impl ExperienceManager {
    /// A manager with no form open.
    pub fn new() -> ExperienceManager {
        ExperienceManager::default()
    }

    // === Getters ===

    /// The open form, if any.
    pub fn form(&self) -> Option<&ExperienceForm> {
        self.form.as_ref()
    }

    /// General error from the last failed mutation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Id staged for deletion, awaiting confirmation.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Whether a mutation is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // === Form state ===

    /// Open a blank form for a new experience.
    pub fn open_new(&mut self) {
        self.form = Some(ExperienceForm {
            editing: None,
            draft: ExperienceData::default(),
        });
    }

    /// Open the form pre-populated from an existing experience.
    pub fn open_edit(&mut self, item: &Experience) {
        self.form = Some(ExperienceForm {
            editing: Some(item.id.clone()),
            draft: ExperienceData::from(item),
        });
    }

    /// Close the form, discarding the draft.
    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Mutable access to the open form's draft for scalar field edits.
    pub fn draft_mut(&mut self) -> Option<&mut ExperienceData> {
        self.form.as_mut().map(|form| &mut form.draft)
    }

    /// Replace the draft's skill list from the raw comma-separated form
    /// input. No-op while no form is open.
    pub fn set_skills(&mut self, raw: &str) {
        if let Some(form) = self.form.as_mut() {
            form.draft.skills_used = parse_skills(raw);
        }
    }

    // === Mutations ===

    /// Submit the open form: update when an id is staged, add otherwise.
    ///
    /// On success the form closes and the profile aggregate is reloaded
    /// through `profiles` (never patched locally). On failure a general
    /// error naming the attempted action is surfaced and the form stays
    /// open with the draft intact. A second submit while one is pending,
    /// or a submit with no form open, is a no-op.
    pub async fn submit(&mut self, profiles: &mut ProfileStore) {
        if self.submitting {
            return;
        }
        let Some(form) = self.form.clone() else {
            return;
        };
        let Some(token) = profiles.session().token() else {
            profiles.force_sign_out();
            return;
        };

        self.submitting = true;
        let result = match &form.editing {
            Some(id) => profiles
                .client()
                .update_experience(id, &form.draft, &token)
                .await
                .map(drop),
            None => profiles
                .client()
                .add_experience(&form.draft, &token)
                .await
                .map(drop),
        };
        self.submitting = false;

        match result {
            Ok(()) => {
                self.form = None;
                self.error = None;
                // The mutation has fully resolved; now refresh the parent.
                profiles.load().await;
            }
            Err(err) if err.is_auth_failure() => profiles.force_sign_out(),
            Err(err) => {
                let action = if form.editing.is_some() { "update" } else { "add" };
                self.error = Some(format!("Failed to {action} experience: {err}"));
            }
        }
    }

    /// Stage an experience for deletion. Nothing is sent until
    /// [`ExperienceManager::confirm_delete`].
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    /// Drop the staged deletion without sending anything.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Issue the staged deletion. On success the profile aggregate is
    /// reloaded through `profiles`; on failure a general error is surfaced
    /// and the staged id is kept so the user can retry. No-op without a
    /// staged id or while another mutation is pending.
    pub async fn confirm_delete(&mut self, profiles: &mut ProfileStore) {
        if self.submitting {
            return;
        }
        let Some(id) = self.pending_delete.clone() else {
            return;
        };
        let Some(token) = profiles.session().token() else {
            profiles.force_sign_out();
            return;
        };

        self.submitting = true;
        let result = profiles.client().delete_experience(&id, &token).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.pending_delete = None;
                self.error = None;
                profiles.load().await;
            }
            Err(err) if err.is_auth_failure() => profiles.force_sign_out(),
            Err(err) => self.error = Some(format!("Failed to delete experience: {err}")),
        }
    }
}

/// Split raw comma-separated form input into a clean skill list: trim each
/// piece, drop empties. Idempotent: re-applying to the comma-joined
/// re-serialization of a clean list is a no-op.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Re-serialize a skill list for display in the form input.
pub fn skills_text(skills: &[String]) -> String {
    skills.join(", ")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::prelude::*;

    use super::*;
    use crate::profile::store::Phase;
    use crate::session::persist::MemoryTokenStore;
    use crate::{ProfileStore, SessionHolder};

    #[test]
    fn parse_skills_trims_and_drops_empties() {
        assert_eq!(parse_skills("a, b ,,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_skills(""), Vec::<String>::new());
        assert_eq!(parse_skills(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn parse_skills_round_trips_through_its_own_serialization() {
        let clean = parse_skills("a, b ,,c");
        assert_eq!(parse_skills(&skills_text(&clean)), clean);
    }

    #[test]
    fn open_new_starts_blank_and_open_edit_copies() {
        let mut manager = ExperienceManager::new();
        manager.open_new();
        let form = manager.form().unwrap();
        assert_eq!(form.editing, None);
        assert_eq!(form.draft, ExperienceData::default());

        let item = Experience {
            id: "7".into(),
            title: "Engineer".into(),
            company_name: "Acme".into(),
            location: None,
            start_date: "2020-01-01".into(),
            end_date: None,
            description: None,
            skills_used: vec!["Go".into()],
        };
        manager.open_edit(&item);
        let form = manager.form().unwrap();
        assert_eq!(form.editing.as_deref(), Some("7"));
        assert_eq!(form.draft.title, "Engineer");
        assert_eq!(form.draft.location, "");

        manager.cancel();
        assert!(manager.form().is_none());
    }

    fn store_for(server: &MockServer) -> ProfileStore {
        let client = crate::FolioClient::builder()
            .base_url(server.base_url())
            .build()
            .unwrap();
        let session = SessionHolder::new(Arc::new(MemoryTokenStore::with_token("tok")));
        ProfileStore::new(client, session)
    }

    #[tokio::test]
    async fn add_submits_once_then_reloads_once_then_closes() {
        let server = MockServer::start_async().await;
        let reload = server
            .mock_async(|when, then| {
                when.method(GET).path("/profiles/me/");
                then.status(200).json_body(serde_json::json!({
                    "user_id": 1,
                    "experiences": [{
                        "id": "1",
                        "title": "Engineer",
                        "company_name": "Acme",
                        "start_date": "2020-01-01",
                        "skills_used": ["Go"]
                    }]
                }));
            })
            .await;
        let add = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/profiles/me/experiences/")
                    .header("authorization", "Bearer tok")
                    .json_body(serde_json::json!({
                        "title": "Engineer",
                        "company_name": "Acme",
                        "location": "",
                        "start_date": "2020-01-01",
                        "end_date": "",
                        "description": "",
                        "skills_used": ["Go"]
                    }));
                then.status(201).json_body(serde_json::json!({
                    "id": "1",
                    "title": "Engineer",
                    "company_name": "Acme",
                    "start_date": "2020-01-01",
                    "skills_used": ["Go"]
                }));
            })
            .await;

        let mut profiles = store_for(&server);
        profiles.load().await;
        assert_eq!(reload.hits_async().await, 1);

        let mut manager = ExperienceManager::new();
        manager.open_new();
        {
            let draft = manager.draft_mut().unwrap();
            draft.title = "Engineer".into();
            draft.company_name = "Acme".into();
            draft.start_date = "2020-01-01".into();
        }
        manager.set_skills("Go");
        manager.submit(&mut profiles).await;

        add.assert_async().await;
        assert_eq!(reload.hits_async().await, 2, "exactly one reload after the add");
        assert!(manager.form().is_none(), "form closes on success");
        assert_eq!(manager.error(), None);
        assert_eq!(profiles.profile().unwrap().experiences.len(), 1);
    }

    #[tokio::test]
    async fn edit_submits_an_update_call_for_the_staged_id() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/profiles/me/");
                then.status(200).json_body(serde_json::json!({ "user_id": 1 }));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT).path("/profiles/me/experiences/7");
                then.status(200).json_body(serde_json::json!({
                    "id": "7",
                    "title": "Staff Engineer",
                    "company_name": "Acme",
                    "start_date": "2020-01-01"
                }));
            })
            .await;

        let mut profiles = store_for(&server);
        profiles.load().await;

        let item = Experience {
            id: "7".into(),
            title: "Engineer".into(),
            company_name: "Acme".into(),
            location: None,
            start_date: "2020-01-01".into(),
            end_date: None,
            description: None,
            skills_used: vec![],
        };
        let mut manager = ExperienceManager::new();
        manager.open_edit(&item);
        manager.draft_mut().unwrap().title = "Staff Engineer".into();
        manager.submit(&mut profiles).await;

        update.assert_async().await;
        assert!(manager.form().is_none());
    }

    #[tokio::test]
    async fn failed_submit_keeps_the_form_open_and_names_the_action() {
        let server = MockServer::start_async().await;
        let reload = server
            .mock_async(|when, then| {
                when.method(GET).path("/profiles/me/");
                then.status(200).json_body(serde_json::json!({ "user_id": 1 }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/profiles/me/experiences/");
                then.status(422)
                    .json_body(serde_json::json!({ "detail": "start_date is required" }));
            })
            .await;

        let mut profiles = store_for(&server);
        profiles.load().await;

        let mut manager = ExperienceManager::new();
        manager.open_new();
        manager.draft_mut().unwrap().title = "Engineer".into();
        manager.submit(&mut profiles).await;

        assert!(manager.form().is_some(), "draft is kept for correction");
        let error = manager.error().unwrap();
        assert!(error.contains("add experience"), "error names the action: {error}");
        assert_eq!(reload.hits_async().await, 1, "no reload on failure");
    }

    #[tokio::test]
    async fn delete_requires_confirmation_and_reloads_after() {
        let server = MockServer::start_async().await;
        let reload = server
            .mock_async(|when, then| {
                when.method(GET).path("/profiles/me/");
                then.status(200).json_body(serde_json::json!({ "user_id": 1 }));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/profiles/me/experiences/7");
                then.status(204);
            })
            .await;

        let mut profiles = store_for(&server);
        profiles.load().await;

        let mut manager = ExperienceManager::new();
        manager.request_delete("7");
        assert_eq!(delete.hits_async().await, 0, "nothing sent before confirmation");

        manager.cancel_delete();
        manager.confirm_delete(&mut profiles).await;
        assert_eq!(delete.hits_async().await, 0, "cancelled deletion stays cancelled");

        manager.request_delete("7");
        manager.confirm_delete(&mut profiles).await;
        delete.assert_async().await;
        assert_eq!(reload.hits_async().await, 2);
        assert_eq!(manager.pending_delete(), None);
    }

    #[tokio::test]
    async fn auth_failure_during_submit_takes_the_sign_out_path() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/profiles/me/");
                then.status(200).json_body(serde_json::json!({ "user_id": 1 }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/profiles/me/experiences/");
                then.status(401)
                    .json_body(serde_json::json!({ "detail": "Could not validate credentials" }));
            })
            .await;

        let mut profiles = store_for(&server);
        profiles.load().await;

        let mut manager = ExperienceManager::new();
        manager.open_new();
        manager.submit(&mut profiles).await;

        assert_eq!(*profiles.phase(), Phase::SignedOut);
        assert_eq!(profiles.session().token(), None);
        assert_eq!(manager.error(), None, "auth failure is never a page error");
    }
}
