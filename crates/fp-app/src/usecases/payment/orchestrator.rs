//! Payment orchestrator.
//!
//! Holds the payment view state and submits the active method.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, info_span, Instrument};

use fp_core::payment::{PaymentField, PaymentFormError, PaymentReceipt};
use fp_core::{PaymentForm, PaymentMethod};

use super::SubmitPayment;

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error(transparent)]
    Form(#[from] PaymentFormError),
    #[error("payment gateway failed: {0}")]
    Gateway(#[source] anyhow::Error),
}

pub struct PaymentOrchestrator {
    form: Mutex<PaymentForm>,
    submit_payment: Arc<SubmitPayment>,
}

impl PaymentOrchestrator {
    pub fn new(submit_payment: Arc<SubmitPayment>) -> Self {
        Self {
            form: Mutex::new(PaymentForm::new()),
            submit_payment,
        }
    }

    /// Show the payment view with a fresh selector.
    pub async fn open(&self) -> PaymentForm {
        let form = PaymentForm::new();
        *self.form.lock().await = form.clone();
        form
    }

    pub async fn snapshot(&self) -> PaymentForm {
        self.form.lock().await.clone()
    }

    pub async fn select(&self, method: PaymentMethod) -> PaymentForm {
        let mut form = self.form.lock().await;
        form.select(method);
        form.clone()
    }

    pub async fn set_field(&self, field: PaymentField, value: &str) -> Result<PaymentForm, PaymentError> {
        let mut form = self.form.lock().await;
        form.set_field(field, value)?;
        Ok(form.clone())
    }

    /// Submit the active method.
    ///
    /// The form lock is held for the whole call so a second submission waits
    /// for the first.
    pub async fn pay(&self) -> Result<PaymentReceipt, PaymentError> {
        let form = self.form.lock().await;
        let request = form.submission();
        let span = info_span!("usecase.payment_orchestrator.pay", method = %request.method());
        async {
            let receipt = self
                .submit_payment
                .execute(&request)
                .await
                .map_err(|err| {
                    error!(error = %err, "payment failed");
                    PaymentError::Gateway(err)
                })?;
            info!(reference = %receipt.reference, "payment succeeded");
            Ok(receipt)
        }
        .instrument(span)
        .await
    }
}
