use async_trait::async_trait;

use crate::payment::{PaymentReceipt, PaymentRequest};

#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    async fn process(&self, request: &PaymentRequest) -> anyhow::Result<PaymentReceipt>;
}
