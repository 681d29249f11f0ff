use crate::models::{ProfileUpdate, UserProfile};
use crate::profile::draft::ProfileField;
use crate::{FolioClient, SessionHolder};

/// User-facing message shown next to the handle field on a uniqueness
/// conflict.
pub const HANDLE_TAKEN_MESSAGE: &str = "This handle is already taken. Please choose another.";

/// Lifecycle of the authenticated profile view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The initial fetch has not completed.
    Loading,
    /// A profile is loaded and can be viewed or edited.
    Ready,
    /// The initial fetch failed for a non-authentication reason; render the
    /// message without a profile.
    Failed(String),
    /// No usable session. The token has been cleared; route to sign-in.
    /// Never accompanied by a page error.
    SignedOut,
}

/// Whether the edit form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Displaying the loaded profile.
    Viewing,
    /// The edit form is open over a draft.
    Editing,
}

/// Stateful driver for the signed-in user's profile: fetch, display, edit,
/// and the handle-uniqueness conflict workflow.
///
/// Phases: `Loading → {Ready, Failed, SignedOut}`; within `Ready` the form
/// toggles `Viewing ⇄ Editing`. All failures resolve to a rendered state;
/// nothing here panics the process.
///
/// The store owns the edit draft (a [`ProfileUpdate`]) and keeps two error
/// channels deliberately separate: the page-level [`ProfileStore::error`]
/// and the field-scoped [`ProfileStore::handle_conflict`]. A handle
/// conflict must not discard the user's other pending edits, so it leaves
/// the draft and the `Editing` mode intact.
///
/// Authentication failures on any call take the sign-out path (token
/// cleared, [`Phase::SignedOut`]) instead of surfacing an error; see
/// [`SessionHolder`].
#[derive(Debug)]
pub struct ProfileStore {
    client: FolioClient,
    session: SessionHolder,
    phase: Phase,
    mode: Mode,
    profile: Option<UserProfile>,
    draft: ProfileUpdate,
    handle_conflict: Option<String>,
    error: Option<String>,
    saving: bool,
}

impl ProfileStore {
    /// Create a store in the `Loading` phase; call [`ProfileStore::load`]
    /// to populate it.
    pub fn new(client: FolioClient, session: SessionHolder) -> ProfileStore {
        ProfileStore {
            client,
            session,
            phase: Phase::Loading,
            mode: Mode::Viewing,
            profile: None,
            draft: ProfileUpdate::default(),
            handle_conflict: None,
            error: None,
            saving: false,
        }
    }

    // === Getters ===

    /// Current lifecycle phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether the edit form is open.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The loaded profile, if any.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// The current edit draft.
    pub fn draft(&self) -> &ProfileUpdate {
        &self.draft
    }

    /// Field-scoped handle-conflict message, if the last save hit one.
    pub fn handle_conflict(&self) -> Option<&str> {
        self.handle_conflict.as_deref()
    }

    /// Page-level error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a profile save is currently in flight.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// The shared transport client.
    pub fn client(&self) -> &FolioClient {
        &self.client
    }

    /// The shared session context.
    pub fn session(&self) -> &SessionHolder {
        &self.session
    }

    /// Path of the public preview page, or `None` while no non-empty handle
    /// is set (the preview affordance is disabled until the user picks
    /// one).
    pub fn public_preview_path(&self) -> Option<String> {
        let handle = self.profile.as_ref()?.handle.as_deref()?;
        if handle.is_empty() {
            None
        } else {
            Some(format!("/p/{handle}"))
        }
    }

    // === Transitions ===

    /// Fetch the profile and seed a fresh draft from it.
    ///
    /// No token ⇒ [`Phase::SignedOut`] without a network call. On success
    /// the store becomes [`Phase::Ready`] with every absent optional in the
    /// draft coerced to the empty string. An authentication failure takes
    /// the sign-out path; any other failure becomes [`Phase::Failed`].
    ///
    /// Also used as the post-mutation refetch: experience writes never
    /// patch the local `experiences` list, they reload the whole aggregate.
    pub async fn load(&mut self) {
        let Some(token) = self.session.token() else {
            self.phase = Phase::SignedOut;
            return;
        };

        self.phase = Phase::Loading;
        match self.client.my_profile(&token).await {
            Ok(profile) => {
                tracing::debug!(user_id = profile.user_id, "profile loaded");
                self.draft = ProfileUpdate::seeded(&profile);
                self.profile = Some(profile);
                self.phase = Phase::Ready;
                self.error = None;
                self.handle_conflict = None;
            }
            Err(err) if err.is_auth_failure() => self.force_sign_out(),
            Err(err) => self.phase = Phase::Failed(err.to_string()),
        }
    }

    /// Open the edit form, re-seeding the draft from the latest loaded
    /// profile (guards against staleness if the profile changed since the
    /// last edit) and clearing any prior handle-conflict message.
    pub fn begin_edit(&mut self) {
        let Some(profile) = &self.profile else {
            return;
        };
        self.draft = ProfileUpdate::seeded(profile);
        self.handle_conflict = None;
        self.mode = Mode::Editing;
    }

    /// Overwrite one draft field. Typing into the handle field clears the
    /// conflict message: the user is assumed to be correcting it.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set(field, value);
        if field == ProfileField::Handle {
            self.handle_conflict = None;
        }
    }

    /// Submit the full draft as a profile update.
    ///
    /// Success replaces the stored profile with the server's returned one
    /// (the server is the source of truth for canonical values) and closes
    /// the form. A handle conflict sets the field-scoped message and keeps
    /// the form open with the draft intact; any other failure sets the page
    /// error, also keeping the form open. A second submit while one is
    /// pending is a no-op.
    pub async fn submit_edit(&mut self) {
        if self.mode != Mode::Editing || self.saving {
            return;
        }
        let Some(token) = self.session.token() else {
            self.force_sign_out();
            return;
        };

        self.handle_conflict = None;
        self.saving = true;
        let result = self.client.update_profile(&self.draft, &token).await;
        self.saving = false;

        match result {
            Ok(profile) => {
                tracing::debug!(user_id = profile.user_id, "profile updated");
                self.profile = Some(profile);
                self.mode = Mode::Viewing;
                self.error = None;
            }
            Err(err) if err.is_auth_failure() => self.force_sign_out(),
            Err(err) if err.is_handle_conflict() => {
                self.handle_conflict = Some(HANDLE_TAKEN_MESSAGE.to_string());
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Discard the draft and close the form. The draft is re-seeded from
    /// the loaded profile so a later [`ProfileStore::begin_edit`] starts
    /// clean.
    pub fn cancel_edit(&mut self) {
        if let Some(profile) = &self.profile {
            self.draft = ProfileUpdate::seeded(profile);
        }
        self.handle_conflict = None;
        self.mode = Mode::Viewing;
    }

    /// Clear the session and enter [`Phase::SignedOut`]. Used both for the
    /// explicit sign-out affordance and for the cross-cutting
    /// authentication-failure rule.
    pub fn force_sign_out(&mut self) {
        self.session.sign_out();
        self.phase = Phase::SignedOut;
    }
}
