use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, info};
use uuid::Uuid;

use fp_core::ports::OtpPort;
use fp_core::registration::{OtpChannel, OtpTicket, OtpVerification, DEMO_OTP_CODE};

/// OTP service that always issues the same code.
///
/// The code is handed back in the ticket and logged instead of being sent.
/// Each ticket verifies successfully once.
pub struct SimulatedOtpService {
    code: String,
    delay: Duration,
    outstanding: Mutex<HashMap<Uuid, String>>,
}

impl SimulatedOtpService {
    pub fn new(code: impl Into<String>, delay: Duration) -> Self {
        Self {
            code: code.into(),
            delay,
            outstanding: Mutex::new(HashMap::new()),
        }
    }

    pub async fn outstanding_tickets(&self) -> usize {
        self.outstanding.lock().await.len()
    }
}

impl Default for SimulatedOtpService {
    fn default() -> Self {
        Self::new(DEMO_OTP_CODE, Duration::ZERO)
    }
}

#[async_trait]
impl OtpPort for SimulatedOtpService {
    async fn issue(&self, channel: &OtpChannel) -> anyhow::Result<OtpTicket> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let ticket = OtpTicket {
            id: Uuid::new_v4(),
            channel: channel.clone(),
            demo_code: Some(self.code.clone()),
        };
        self.outstanding
            .lock()
            .await
            .insert(ticket.id, self.code.clone());

        info!(
            ticket_id = %ticket.id,
            email = %channel.email,
            phone = %channel.phone,
            demo_code = %self.code,
            "demo OTP issued"
        );
        Ok(ticket)
    }

    async fn verify(&self, ticket_id: Uuid, code: &str) -> anyhow::Result<OtpVerification> {
        let mut outstanding = self.outstanding.lock().await;
        let verification = match outstanding.get(&ticket_id) {
            Some(expected) if expected == code => {
                outstanding.remove(&ticket_id);
                OtpVerification::Accepted
            }
            _ => OtpVerification::Rejected,
        };
        debug!(ticket_id = %ticket_id, ?verification, "OTP checked");
        Ok(verification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> OtpChannel {
        OtpChannel {
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
        }
    }

    #[tokio::test]
    async fn issued_ticket_carries_demo_code() -> anyhow::Result<()> {
        let service = SimulatedOtpService::default();

        let ticket = service.issue(&channel()).await?;

        assert_eq!(ticket.demo_code.as_deref(), Some(DEMO_OTP_CODE));
        assert_eq!(ticket.channel, channel());
        assert_eq!(service.outstanding_tickets().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn wrong_code_is_rejected_and_ticket_survives() -> anyhow::Result<()> {
        let service = SimulatedOtpService::default();
        let ticket = service.issue(&channel()).await?;

        assert_eq!(service.verify(ticket.id, "000000").await?, OtpVerification::Rejected);
        assert_eq!(service.verify(ticket.id, " 123456").await?, OtpVerification::Rejected);
        assert_eq!(service.verify(ticket.id, DEMO_OTP_CODE).await?, OtpVerification::Accepted);
        Ok(())
    }

    #[tokio::test]
    async fn right_code_verifies_once() -> anyhow::Result<()> {
        let service = SimulatedOtpService::default();
        let ticket = service.issue(&channel()).await?;

        assert_eq!(service.verify(ticket.id, DEMO_OTP_CODE).await?, OtpVerification::Accepted);
        assert_eq!(service.verify(ticket.id, DEMO_OTP_CODE).await?, OtpVerification::Rejected);
        assert_eq!(service.outstanding_tickets().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_ticket_is_rejected() -> anyhow::Result<()> {
        let service = SimulatedOtpService::default();
        assert_eq!(
            service.verify(Uuid::new_v4(), DEMO_OTP_CODE).await?,
            OtpVerification::Rejected
        );
        Ok(())
    }

    #[tokio::test]
    async fn issue_waits_for_configured_delay() -> anyhow::Result<()> {
        tokio::time::pause();
        let service = SimulatedOtpService::new("654321", Duration::from_millis(300));
        let start = tokio::time::Instant::now();

        let ticket = service.issue(&channel()).await?;

        assert!(start.elapsed() >= Duration::from_millis(300));
        assert_eq!(ticket.demo_code.as_deref(), Some("654321"));
        Ok(())
    }
}
