pub mod chat;
pub mod flow;
pub mod payment;
pub mod register;
pub mod session;
pub mod wizard;

pub use chat::{ChatAssistant, ChatError};
pub use flow::{FlowCoordinator, FlowError};
pub use payment::{PaymentError, PaymentOrchestrator, SubmitPayment};
pub use register::{RegistrationError, RegistrationOrchestrator};
pub use session::SessionContext;
pub use wizard::{WizardError, WizardOrchestrator};
