//! Details wizard orchestrator.
//!
//! Owns the form store of the mounted wizard and routes user intents
//! through [`StepNavigator`].

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, Instrument};

use fp_core::form::FormError;
use fp_core::wizard::{WizardAction, WizardCommand};
use fp_core::{FieldId, FieldValue, FormStore, StepNavigator};

use crate::usecases::session::SessionContext;

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Field(#[from] FormError),
}

pub struct WizardOrchestrator {
    store: Mutex<FormStore>,
    session: Arc<SessionContext>,
}

impl WizardOrchestrator {
    pub fn new(session: Arc<SessionContext>) -> Self {
        Self {
            store: Mutex::new(FormStore::new()),
            session,
        }
    }

    /// Replace the store with an empty one pre-filled from the stored
    /// profile.
    pub async fn mount(&self) -> FormStore {
        let mut store = FormStore::new();
        if let Some(profile) = self.session.load_profile().await {
            let filled = store.prefill(&profile);
            debug!(?filled, "wizard pre-filled from stored profile");
        }
        *self.store.lock().await = store.clone();
        info!("wizard mounted");
        store
    }

    /// Drop the record without reading the stored profile.
    pub async fn discard(&self) {
        *self.store.lock().await = FormStore::new();
        debug!("wizard record discarded");
    }

    pub async fn snapshot(&self) -> FormStore {
        self.store.lock().await.clone()
    }

    pub async fn set_field(&self, field: FieldId, value: FieldValue) -> Result<FormStore, WizardError> {
        let mut store = self.store.lock().await;
        store.set_field(field, value)?;
        Ok(store.clone())
    }

    pub async fn set_extended_education(&self, enabled: bool) -> FormStore {
        let mut store = self.store.lock().await;
        store.set_extended_education(enabled);
        store.clone()
    }

    pub async fn next(&self) -> FormStore {
        self.dispatch(WizardCommand::Next).await
    }

    pub async fn back(&self) -> FormStore {
        self.dispatch(WizardCommand::Back).await
    }

    async fn dispatch(&self, command: WizardCommand) -> FormStore {
        let span = info_span!("usecase.wizard_orchestrator.dispatch", command = ?command);
        async {
            let mut store = self.store.lock().await;
            let from = store.state();
            let (to, actions) = StepNavigator::dispatch(&mut store, command);
            info!(from = ?from, to = ?to, errors = store.errors().len(), "wizard transition");
            for action in actions {
                match action {
                    WizardAction::HandOffToPayment => {
                        info!("wizard complete, handing off to payment");
                    }
                }
            }
            store.clone()
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_core::validation::REQUIRED;
    use fp_core::{UserProfile, WizardState, WizardStep};
    use fp_infra::InMemoryProfileRepository;

    fn orchestrator_with(profile: Option<UserProfile>) -> WizardOrchestrator {
        let repo = match profile {
            Some(profile) => InMemoryProfileRepository::with_profile(profile),
            None => InMemoryProfileRepository::new(),
        };
        WizardOrchestrator::new(SessionContext::new(Arc::new(repo)).arc())
    }

    #[tokio::test]
    async fn mount_prefills_from_stored_profile() {
        let orchestrator =
            orchestrator_with(Some(UserProfile::new("A", "a@b.com", "1234567890")));

        let store = orchestrator.mount().await;

        assert_eq!(store.record().text(FieldId::FullName), "A");
        assert_eq!(store.record().text(FieldId::Email), "a@b.com");
        assert_eq!(store.record().text(FieldId::Phone), "1234567890");
        assert_eq!(store.state(), WizardState::Step(WizardStep::Personal));
    }

    #[tokio::test]
    async fn mount_without_profile_is_empty() {
        let orchestrator = orchestrator_with(None);
        let store = orchestrator.mount().await;
        assert!(FieldId::ALL.iter().all(|f| store.record().is_empty(*f)));
    }

    #[tokio::test]
    async fn next_on_empty_step_reports_required() {
        let orchestrator = orchestrator_with(None);
        orchestrator.mount().await;

        let store = orchestrator.next().await;

        assert_eq!(store.state(), WizardState::Step(WizardStep::Personal));
        assert_eq!(store.errors().get(FieldId::PanId), Some(REQUIRED));
        assert_eq!(orchestrator.snapshot().await, store);
    }

    #[tokio::test]
    async fn set_field_clears_its_error_and_rejects_wrong_kind() {
        let orchestrator = orchestrator_with(None);
        orchestrator.next().await;

        let store = orchestrator
            .set_field(FieldId::PanId, "ABCDE1234F".into())
            .await
            .unwrap();
        assert!(!store.errors().contains(FieldId::PanId));

        let err = orchestrator
            .set_field(FieldId::XMarksheet, "x.pdf".into())
            .await
            .unwrap_err();
        assert!(matches!(err, WizardError::Field(FormError::ExpectedFile { .. })));
    }

    #[tokio::test]
    async fn discard_resets_to_an_empty_record() {
        let orchestrator =
            orchestrator_with(Some(UserProfile::new("A", "a@b.com", "1234567890")));
        orchestrator.mount().await;

        orchestrator.discard().await;

        assert_eq!(orchestrator.snapshot().await, FormStore::new());
    }
}
