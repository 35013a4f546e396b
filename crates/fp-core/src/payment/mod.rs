//! Payment method selector.

mod form;
mod method;

pub use form::{
    CardDetails, NetBankingDetails, PaymentField, PaymentForm, PaymentFormError, PaymentReceipt,
    PaymentRequest, UpiDetails, WalletDetails,
};
pub use method::{Bank, PaymentMethod, UnknownOptionError, WalletProvider};
