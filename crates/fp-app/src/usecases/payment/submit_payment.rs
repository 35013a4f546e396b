use std::sync::Arc;

use fp_core::payment::{PaymentReceipt, PaymentRequest};
use fp_core::ports::PaymentGatewayPort;

/// Use case for handing a packaged payment to the gateway.
pub struct SubmitPayment {
    gateway: Arc<dyn PaymentGatewayPort>,
}

impl SubmitPayment {
    pub fn new(gateway: Arc<dyn PaymentGatewayPort>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, request: &PaymentRequest) -> anyhow::Result<PaymentReceipt> {
        self.gateway.process(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_core::payment::{PaymentMethod, UpiDetails};
    use uuid::Uuid;

    struct RecordingGateway {
        seen: std::sync::Mutex<Vec<PaymentRequest>>,
    }

    #[async_trait::async_trait]
    impl PaymentGatewayPort for RecordingGateway {
        async fn process(&self, request: &PaymentRequest) -> anyhow::Result<PaymentReceipt> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(PaymentReceipt {
                reference: Uuid::nil(),
                method: request.method(),
            })
        }
    }

    #[tokio::test]
    async fn submit_payment_forwards_request_unchanged() {
        let gateway = Arc::new(RecordingGateway {
            seen: std::sync::Mutex::new(Vec::new()),
        });
        let use_case = SubmitPayment::new(gateway.clone());
        let request = PaymentRequest::Upi(UpiDetails {
            upi_id: "asha@upi".into(),
        });

        let receipt = use_case.execute(&request).await.unwrap();

        assert_eq!(receipt.method, PaymentMethod::Upi);
        assert_eq!(gateway.seen.lock().unwrap().as_slice(), &[request]);
    }
}
