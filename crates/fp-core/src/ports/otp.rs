use async_trait::async_trait;
use uuid::Uuid;

use crate::registration::{OtpChannel, OtpTicket, OtpVerification};

#[async_trait]
pub trait OtpPort: Send + Sync {
    /// Issue a code for the channel.
    async fn issue(&self, channel: &OtpChannel) -> anyhow::Result<OtpTicket>;

    /// Check `code` against the ticket.
    ///
    /// A ticket verifies successfully at most once; unknown or spent tickets
    /// are `Rejected`.
    async fn verify(&self, ticket_id: Uuid, code: &str) -> anyhow::Result<OtpVerification>;
}
