use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::info;
use uuid::Uuid;

use fp_core::payment::{PaymentReceipt, PaymentRequest};
use fp_core::ports::PaymentGatewayPort;

/// Gateway that accepts every payment after a fixed delay.
pub struct SimulatedPaymentGateway {
    delay: Duration,
}

impl SimulatedPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentGatewayPort for SimulatedPaymentGateway {
    async fn process(&self, request: &PaymentRequest) -> anyhow::Result<PaymentReceipt> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        let receipt = PaymentReceipt {
            reference: Uuid::new_v4(),
            method: request.method(),
        };
        info!(
            reference = %receipt.reference,
            method = %receipt.method,
            "payment processed"
        );
        Ok(receipt)
    }
}
