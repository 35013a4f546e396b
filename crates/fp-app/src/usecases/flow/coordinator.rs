//! Route flow coordinator.
//!
//! Applies [`RouteFlow`] transitions and runs their side effects against the
//! per-view orchestrators. View operations are only accepted while their
//! view is the current route.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use fp_core::navigation::{RouteAction, RouteFlow};
use fp_core::payment::PaymentReceipt;
use fp_core::{FormStore, RegistrationPhase, RegistrationSession, Route, RouteEvent};

use crate::usecases::payment::{PaymentError, PaymentOrchestrator};
use crate::usecases::register::{RegistrationError, RegistrationOrchestrator};
use crate::usecases::session::SessionContext;
use crate::usecases::wizard::WizardOrchestrator;

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("not available on {actual:?} (expected {expected:?})")]
    WrongRoute { expected: Route, actual: Route },
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error("session teardown failed: {0}")]
    Teardown(#[source] anyhow::Error),
}

pub struct FlowCoordinator {
    route: Mutex<Route>,
    session: Arc<SessionContext>,
    registration: Arc<RegistrationOrchestrator>,
    wizard: Arc<WizardOrchestrator>,
    payment: Arc<PaymentOrchestrator>,
}

impl FlowCoordinator {
    pub fn new(
        session: Arc<SessionContext>,
        registration: Arc<RegistrationOrchestrator>,
        wizard: Arc<WizardOrchestrator>,
        payment: Arc<PaymentOrchestrator>,
    ) -> Self {
        Self {
            route: Mutex::new(Route::default()),
            session,
            registration,
            wizard,
            payment,
        }
    }

    pub async fn route(&self) -> Route {
        *self.route.lock().await
    }

    pub fn registration(&self) -> &RegistrationOrchestrator {
        &self.registration
    }

    pub fn wizard(&self) -> &WizardOrchestrator {
        &self.wizard
    }

    pub fn payment(&self) -> &PaymentOrchestrator {
        &self.payment
    }

    /// Fail unless `expected` is the current route.
    pub async fn ensure_route(&self, expected: Route) -> Result<(), FlowError> {
        let actual = self.route().await;
        if actual == expected {
            Ok(())
        } else {
            Err(FlowError::WrongRoute { expected, actual })
        }
    }

    pub async fn navigate(&self, event: RouteEvent) -> Result<Route, FlowError> {
        let span = info_span!("usecase.flow_coordinator.navigate", event = ?event);
        async {
            let mut route = self.route.lock().await;
            let from = *route;
            let (to, actions) = RouteFlow::transition(from, event);
            if from == to && actions.is_empty() {
                debug!(route = ?from, "route event ignored");
                return Ok(from);
            }
            self.execute_actions(actions).await?;
            *route = to;
            info!(from = ?from, to = ?to, "route transition");
            Ok(to)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<RouteAction>) -> Result<(), FlowError> {
        for action in actions {
            debug!(?action, "flow executing action");
            match action {
                RouteAction::ResetRegistration => self.registration.reset().await,
                RouteAction::MountWizard => {
                    self.wizard.mount().await;
                }
                RouteAction::OpenPayment => {
                    self.payment.open().await;
                }
                RouteAction::TearDownSession => {
                    self.session.teardown().await.map_err(FlowError::Teardown)?;
                    self.registration.reset().await;
                    self.wizard.discard().await;
                    self.payment.open().await;
                }
            }
        }
        Ok(())
    }

    /// Final registration submit; moves to login once the profile is stored.
    pub async fn submit_registration(&self) -> Result<RegistrationSession, FlowError> {
        self.ensure_route(Route::Register).await?;
        let session = self.registration.submit().await?;
        if session.phase == RegistrationPhase::Ready {
            self.navigate(RouteEvent::Registered).await?;
        }
        Ok(session)
    }

    /// Login submit. Credentials are not checked.
    pub async fn sign_in(&self) -> Result<Route, FlowError> {
        self.ensure_route(Route::Login).await?;
        self.navigate(RouteEvent::SignedIn).await
    }

    /// Wizard "Next"; moves to payment once the last step passes.
    pub async fn wizard_next(&self) -> Result<FormStore, FlowError> {
        self.ensure_route(Route::Form).await?;
        let store = self.wizard.next().await;
        if store.state().is_complete() {
            self.navigate(RouteEvent::WizardCompleted).await?;
        }
        Ok(store)
    }

    pub async fn wizard_back(&self) -> Result<FormStore, FlowError> {
        self.ensure_route(Route::Form).await?;
        Ok(self.wizard.back().await)
    }

    /// "Pay Now"; on success the record is discarded and a fresh wizard is
    /// mounted.
    pub async fn pay(&self) -> Result<PaymentReceipt, FlowError> {
        self.ensure_route(Route::Payment).await?;
        let receipt = self.payment.pay().await?;
        self.navigate(RouteEvent::PaymentSucceeded).await?;
        Ok(receipt)
    }

    pub async fn sign_out(&self) -> Result<Route, FlowError> {
        let route = self.navigate(RouteEvent::SignedOut).await;
        if let Err(err) = &route {
            warn!(error = %err, "sign out failed");
        }
        route
    }
}
