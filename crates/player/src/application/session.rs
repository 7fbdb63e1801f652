//! Wizard Session - orchestrates one character build.
//!
//! Every mutation goes ledger -> validator -> render sink. Validation is
//! recomputed from scratch after each change and pushed out; the session
//! never holds a result between calls.
//!
//! The only async operations are the boundary calls: loading the trait
//! catalog, loading a character for edit and submitting. A failure there is
//! reported once through the render sink and leaves the build untouched.

use std::sync::Arc;

use codex_domain::{
    BioField, CharacterBuild, CharacterId, Category, DraftKey, PriorityLevel, PriorityTable,
    Qualifier, RatingChange, TraitKind, ValidationResult,
};
use codex_shared::{CatalogCategory, SubmissionFormatter, SubmitAck, TraitCatalog};

use crate::application::drafts::DraftService;
use crate::application::error::SessionError;
use crate::application::review::ReviewSummary;
use crate::ports::outbound::{ApprovalApiPort, Notification, PoolSummary, RenderSink};

pub const BLOCKED_SUBMIT_MESSAGE: &str = "Please fix all validation errors before submitting";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit character";
pub const SUBMITTED_MESSAGE: &str = "Character submitted for approval!";
pub const RESUBMITTED_MESSAGE: &str = "Character resubmitted for approval!";
pub const SKIPPED_TRAITS_MESSAGE: &str = "Some saved traits could not be loaded";

pub struct WizardSession {
    api: Arc<dyn ApprovalApiPort>,
    render: Arc<dyn RenderSink>,
    drafts: DraftService,
    build: CharacterBuild,
    catalog: TraitCatalog,
    editing: Option<CharacterId>,
}

impl WizardSession {
    pub fn new(
        api: Arc<dyn ApprovalApiPort>,
        render: Arc<dyn RenderSink>,
        drafts: DraftService,
    ) -> Self {
        Self {
            api,
            render,
            drafts,
            build: CharacterBuild::new(),
            catalog: TraitCatalog::new(),
            editing: None,
        }
    }

    /// Start from an existing build (e.g., one read from a file).
    pub fn with_build(mut self, build: CharacterBuild) -> Self {
        self.build = build;
        self
    }

    /// Target an existing character: submissions become resubmissions.
    pub fn with_editing(mut self, id: Option<CharacterId>) -> Self {
        self.editing = id;
        self
    }

    pub fn build(&self) -> &CharacterBuild {
        &self.build
    }

    pub fn catalog(&self) -> &TraitCatalog {
        &self.catalog
    }

    pub fn editing(&self) -> Option<CharacterId> {
        self.editing
    }

    pub fn draft_key(&self) -> DraftKey {
        DraftKey::for_target(self.editing)
    }

    pub fn review(&self) -> ReviewSummary {
        ReviewSummary::from_build(&self.build)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn toggle_trait(
        &mut self,
        kind: TraitKind,
        name: &str,
        clicked: u8,
    ) -> Result<RatingChange, SessionError> {
        let change = self.build.toggle_trait(kind, name, clicked)?;
        self.refresh();
        Ok(change)
    }

    pub fn set_trait(
        &mut self,
        kind: TraitKind,
        name: &str,
        value: u8,
    ) -> Result<RatingChange, SessionError> {
        let change = self.build.set_trait(kind, name, value)?;
        self.refresh();
        Ok(change)
    }

    pub fn set_qualifier(
        &mut self,
        kind: TraitKind,
        name: &str,
        qualifier: Qualifier,
        text: &str,
    ) -> Result<(), SessionError> {
        self.build.set_qualifier(kind, name, qualifier, text)?;
        self.refresh();
        Ok(())
    }

    pub fn assign_priority(
        &mut self,
        table: PriorityTable,
        level: PriorityLevel,
        category: Option<Category>,
    ) -> Option<Category> {
        let previous = self.build.assign_priority(table, level, category);
        self.refresh();
        previous
    }

    pub fn set_bio(&mut self, field: BioField, value: impl Into<String>) {
        self.build.set_bio(field, value);
        self.refresh();
    }

    /// Blur on a free-text bio field saves the draft.
    pub fn on_field_blur(&self, field: BioField) {
        if BioField::AUTOSAVE_ON_BLUR.contains(&field) {
            self.save_draft();
        }
    }

    /// Recompute validation and push it, the pools and step completion out.
    pub fn refresh(&self) -> ValidationResult {
        let result = self.build.validate();
        tracing::debug!(
            valid = result.is_valid(),
            messages = result.messages().len(),
            "Build revalidated"
        );

        let progress = codex_domain::CompletionTracker::progress(&result, self.build.bio());
        self.render.render_validation(&result);
        self.render
            .render_pools(&PoolSummary::resolve(&self.build.pools()));
        self.render.render_completion(&progress);
        result
    }

    // =========================================================================
    // Remote data
    // =========================================================================

    /// Fetch all three catalogs. Any failure is reported once and leaves the
    /// current catalog in place.
    pub async fn load_catalog(&mut self) -> Result<(), SessionError> {
        let fetched = tokio::try_join!(
            self.api.fetch_catalog(CatalogCategory::Disciplines),
            self.api.fetch_catalog(CatalogCategory::Advantages),
            self.api.fetch_catalog(CatalogCategory::Flaws),
        );

        let (disciplines, advantages, flaws) = match fetched {
            Ok(responses) => responses,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load trait catalog");
                self.render
                    .notify(Notification::error(format!("Error loading trait data: {}", e)));
                return Err(e.into());
            }
        };

        let mut catalog = TraitCatalog::new();
        catalog.insert(CatalogCategory::Disciplines, disciplines);
        catalog.insert(CatalogCategory::Advantages, advantages);
        catalog.insert(CatalogCategory::Flaws, flaws);
        tracing::info!(
            disciplines = catalog.get(CatalogCategory::Disciplines).len(),
            advantages = catalog.get(CatalogCategory::Advantages).len(),
            flaws = catalog.get(CatalogCategory::Flaws).len(),
            "Trait catalog loaded"
        );
        self.catalog = catalog;
        Ok(())
    }

    /// Load a previously submitted character for resubmission. Returns the
    /// stored entries that could not be applied.
    pub async fn load_for_edit(&mut self, id: CharacterId) -> Result<Vec<String>, SessionError> {
        let response = match self.api.fetch_for_edit(id).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(character_id = %id, error = %e, "Failed to load character");
                self.render.notify(Notification::error(
                    e.user_message("Error loading character for editing"),
                ));
                return Err(e.into());
            }
        };

        let applied = response.character_data.apply();
        if !applied.skipped.is_empty() {
            tracing::warn!(
                character_id = %id,
                skipped = ?applied.skipped,
                "Some stored traits were not applied"
            );
            self.render.notify(Notification::warning(format!(
                "{}: {}",
                SKIPPED_TRAITS_MESSAGE,
                applied.skipped.join(", ")
            )));
        }

        self.build = applied.build;
        self.editing = Some(id);
        if let Some(feedback) = response.rejection() {
            self.render.show_rejection(&feedback);
        }
        tracing::info!(character_id = %id, "Character loaded for editing");
        self.refresh();
        Ok(applied.skipped)
    }

    // =========================================================================
    // Drafts
    // =========================================================================

    pub fn save_draft(&self) -> bool {
        self.drafts.save(&self.draft_key(), &self.build)
    }

    /// Offer a saved draft for restore. Only new characters get drafts;
    /// edits always start from the service's copy. Returns whether a draft
    /// was applied.
    pub fn offer_draft(&mut self) -> bool {
        if self.editing.is_some() {
            return false;
        }

        let key = self.draft_key();
        let Some(snapshot) = self.drafts.load(&key) else {
            return false;
        };

        if !self.render.confirm_restore(snapshot.saved_at) {
            tracing::info!(key = %key, "Draft declined");
            self.drafts.clear(&key);
            return false;
        }

        let (build, skipped) = snapshot.restore();
        if !skipped.is_empty() {
            tracing::warn!(key = %key, skipped = ?skipped, "Draft entries skipped on restore");
        }
        self.build = build;
        self.render.notify(Notification::info("Draft restored"));
        self.refresh();
        true
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Submit the build. Refused locally while the build is invalid.
    pub async fn submit(&mut self) -> Result<SubmitAck, SessionError> {
        let result = self.build.validate();
        if !result.is_valid() {
            self.render.notify(Notification::error(BLOCKED_SUBMIT_MESSAGE));
            return Err(SessionError::Blocked {
                reasons: result.messages(),
            });
        }

        let request =
            SubmissionFormatter::format(self.build.ledger(), self.build.bio(), self.build.clan());

        match self.api.submit(self.editing, &request).await {
            Ok(ack) => {
                tracing::info!(editing = ?self.editing, "Character submitted");
                self.drafts.clear(&self.draft_key());
                let message = if self.editing.is_some() {
                    RESUBMITTED_MESSAGE
                } else {
                    SUBMITTED_MESSAGE
                };
                self.render.notify(Notification::success(message));
                Ok(ack)
            }
            Err(e) => {
                tracing::error!(editing = ?self.editing, error = %e, "Submission failed");
                self.render
                    .notify(Notification::error(e.user_message(SUBMIT_FAILED_MESSAGE)));
                Err(e.into())
            }
        }
    }
}
