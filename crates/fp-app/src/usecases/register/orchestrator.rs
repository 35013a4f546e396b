//! Registration orchestrator.
//!
//! This module coordinates the registration state machine and side effects.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, Instrument};

use fp_core::ports::OtpPort;
use fp_core::registration::{
    OtpVerification, RegistrationAction, RegistrationEvent, RegistrationField,
    RegistrationStateMachine,
};
use fp_core::RegistrationSession;

use crate::usecases::register::context::RegistrationContext;
use crate::usecases::session::SessionContext;

/// Shown on the OTP field when the OTP service cannot issue a code.
pub const OTP_SEND_FAILED: &str = "Could not send OTP, please try again";

/// Errors produced by the registration orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("OTP verification failed: {0}")]
    OtpService(#[source] anyhow::Error),
    #[error("persist profile failed: {0}")]
    Persistence(#[source] anyhow::Error),
}

/// Orchestrator that drives the registration gate and its side effects.
pub struct RegistrationOrchestrator {
    context: Arc<RegistrationContext>,
    otp: Arc<dyn OtpPort>,
    session: Arc<SessionContext>,
}

impl RegistrationOrchestrator {
    pub fn new(otp: Arc<dyn OtpPort>, session: Arc<SessionContext>) -> Self {
        Self {
            context: RegistrationContext::default().arc(),
            otp,
            session,
        }
    }

    pub async fn set_field(
        &self,
        field: RegistrationField,
        value: impl Into<String>,
    ) -> Result<RegistrationSession, RegistrationError> {
        self.dispatch(RegistrationEvent::SetField {
            field,
            value: value.into(),
        })
        .await
    }

    pub async fn request_otp(&self) -> Result<RegistrationSession, RegistrationError> {
        self.dispatch(RegistrationEvent::RequestOtp).await
    }

    pub async fn submit_otp(&self) -> Result<RegistrationSession, RegistrationError> {
        self.dispatch(RegistrationEvent::SubmitOtp).await
    }

    pub async fn submit(&self) -> Result<RegistrationSession, RegistrationError> {
        self.dispatch(RegistrationEvent::Submit).await
    }

    pub async fn get_session(&self) -> RegistrationSession {
        self.context.get_session().await
    }

    /// Start over with an empty session.
    pub async fn reset(&self) {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.context.set_session(RegistrationSession::new()).await;
        debug!("registration session reset");
    }

    pub async fn dispatch(
        &self,
        event: RegistrationEvent,
    ) -> Result<RegistrationSession, RegistrationError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.registration_orchestrator.dispatch", event = event.kind());
        async {
            let mut current = self.context.get_session().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.phase.clone();
                let event_name = event.kind();
                let (next, actions) = RegistrationStateMachine::transition(current, event);
                info!(from = ?from, to = ?next.phase, event = event_name, "registration transition");
                let follow_up_events = self.execute_actions(actions).await?;
                self.context.set_session(next.clone()).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<RegistrationAction>,
    ) -> Result<Vec<RegistrationEvent>, RegistrationError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            match action {
                RegistrationAction::IssueOtp { channel } => {
                    match self.otp.issue(&channel).await {
                        Ok(ticket) => {
                            debug!(ticket_id = %ticket.id, "registration OTP issued");
                            follow_up_events.push(RegistrationEvent::OtpIssued { ticket });
                        }
                        Err(err) => {
                            error!(error = %err, "registration OTP issuance failed");
                            follow_up_events.push(RegistrationEvent::OtpIssueFailed {
                                reason: OTP_SEND_FAILED.to_string(),
                            });
                        }
                    }
                }
                RegistrationAction::VerifyOtp { ticket_id, code } => {
                    let verification = self
                        .otp
                        .verify(ticket_id, &code)
                        .await
                        .map_err(RegistrationError::OtpService)?;
                    debug!(ticket_id = %ticket_id, ?verification, "registration OTP checked");
                    follow_up_events.push(match verification {
                        OtpVerification::Accepted => RegistrationEvent::OtpAccepted,
                        OtpVerification::Rejected => RegistrationEvent::OtpRejected,
                    });
                }
                RegistrationAction::PersistProfile { profile } => {
                    self.session
                        .persist_profile(&profile)
                        .await
                        .map_err(RegistrationError::Persistence)?;
                    follow_up_events.push(RegistrationEvent::ProfilePersisted);
                }
                RegistrationAction::HandOffToLogin => {
                    info!("registration complete, handing off to login");
                }
            }
        }
        Ok(follow_up_events)
    }
}
