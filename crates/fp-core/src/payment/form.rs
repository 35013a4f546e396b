use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::method::{Bank, PaymentMethod, UnknownOptionError, WalletProvider};

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub number: String,
    pub name: String,
    pub expiry: String,
    pub cvc: String,
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &"[REDACTED]")
            .field("name", &self.name)
            .field("expiry", &self.expiry)
            .field("cvc", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiDetails {
    pub upi_id: String,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetBankingDetails {
    pub bank: Option<Bank>,
    pub username: String,
    pub password: String,
}

impl NetBankingDetails {
    /// Credentials are only asked for once a bank is chosen.
    pub fn credentials_visible(&self) -> bool {
        self.bank.is_some()
    }
}

impl fmt::Debug for NetBankingDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetBankingDetails")
            .field("bank", &self.bank)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDetails {
    pub provider: Option<WalletProvider>,
    pub mobile_number: String,
}

impl WalletDetails {
    /// The mobile number is only asked for once a provider is chosen.
    pub fn mobile_visible(&self) -> bool {
        self.provider.is_some()
    }
}

/// A single input of the payment view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentField {
    Number,
    Name,
    Expiry,
    Cvc,
    UpiId,
    Bank,
    Username,
    Password,
    Provider,
    MobileNumber,
}

impl PaymentField {
    pub const ALL: [PaymentField; 10] = [
        PaymentField::Number,
        PaymentField::Name,
        PaymentField::Expiry,
        PaymentField::Cvc,
        PaymentField::UpiId,
        PaymentField::Bank,
        PaymentField::Username,
        PaymentField::Password,
        PaymentField::Provider,
        PaymentField::MobileNumber,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentField::Number => "number",
            PaymentField::Name => "name",
            PaymentField::Expiry => "expiry",
            PaymentField::Cvc => "cvc",
            PaymentField::UpiId => "upiId",
            PaymentField::Bank => "bank",
            PaymentField::Username => "username",
            PaymentField::Password => "password",
            PaymentField::Provider => "provider",
            PaymentField::MobileNumber => "mobileNumber",
        }
    }

    pub fn method(self) -> PaymentMethod {
        match self {
            PaymentField::Number | PaymentField::Name | PaymentField::Expiry | PaymentField::Cvc => {
                PaymentMethod::Card
            }
            PaymentField::UpiId => PaymentMethod::Upi,
            PaymentField::Bank | PaymentField::Username | PaymentField::Password => {
                PaymentMethod::NetBanking
            }
            PaymentField::Provider | PaymentField::MobileNumber => PaymentMethod::Wallet,
        }
    }
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentField {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownOptionError {
                kind: "payment field",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentFormError {
    #[error("{field} is not shown for the {active} method")]
    InactiveMethod {
        field: PaymentField,
        active: PaymentMethod,
    },
    #[error("{field} is hidden until a selection is made")]
    Hidden { field: PaymentField },
    #[error(transparent)]
    UnknownOption(#[from] UnknownOptionError),
}

/// Package handed to the payment gateway: the active method and only its
/// details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "details", rename_all = "camelCase")]
pub enum PaymentRequest {
    Card(CardDetails),
    Upi(UpiDetails),
    NetBanking(NetBankingDetails),
    Wallet(WalletDetails),
}

impl PaymentRequest {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentRequest::Card(_) => PaymentMethod::Card,
            PaymentRequest::Upi(_) => PaymentMethod::Upi,
            PaymentRequest::NetBanking(_) => PaymentMethod::NetBanking,
            PaymentRequest::Wallet(_) => PaymentMethod::Wallet,
        }
    }
}

/// Gateway acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub reference: Uuid,
    pub method: PaymentMethod,
}

/// Payment view state.
///
/// Details of every method are retained while switching; only the active
/// method is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    method: PaymentMethod,
    card: CardDetails,
    upi: UpiDetails,
    net_banking: NetBankingDetails,
    wallet: WalletDetails,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn select(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    pub fn card(&self) -> &CardDetails {
        &self.card
    }

    pub fn upi(&self) -> &UpiDetails {
        &self.upi
    }

    pub fn net_banking(&self) -> &NetBankingDetails {
        &self.net_banking
    }

    pub fn wallet(&self) -> &WalletDetails {
        &self.wallet
    }

    /// Inputs currently shown, in display order.
    pub fn visible_fields(&self) -> Vec<PaymentField> {
        match self.method {
            PaymentMethod::Card => vec![
                PaymentField::Number,
                PaymentField::Name,
                PaymentField::Expiry,
                PaymentField::Cvc,
            ],
            PaymentMethod::Upi => vec![PaymentField::UpiId],
            PaymentMethod::NetBanking if self.net_banking.credentials_visible() => vec![
                PaymentField::Bank,
                PaymentField::Username,
                PaymentField::Password,
            ],
            PaymentMethod::NetBanking => vec![PaymentField::Bank],
            PaymentMethod::Wallet if self.wallet.mobile_visible() => {
                vec![PaymentField::Provider, PaymentField::MobileNumber]
            }
            PaymentMethod::Wallet => vec![PaymentField::Provider],
        }
    }

    /// Set a shown input.
    ///
    /// `bank` and `provider` take an option's wire name; an empty value
    /// clears the selection and hides the dependent inputs again.
    pub fn set_field(&mut self, field: PaymentField, value: &str) -> Result<(), PaymentFormError> {
        if field.method() != self.method {
            return Err(PaymentFormError::InactiveMethod {
                field,
                active: self.method,
            });
        }
        if !self.visible_fields().contains(&field) {
            return Err(PaymentFormError::Hidden { field });
        }

        match field {
            PaymentField::Number => self.card.number = value.to_string(),
            PaymentField::Name => self.card.name = value.to_string(),
            PaymentField::Expiry => self.card.expiry = value.to_string(),
            PaymentField::Cvc => self.card.cvc = value.to_string(),
            PaymentField::UpiId => self.upi.upi_id = value.to_string(),
            PaymentField::Bank => self.net_banking.bank = parse_selection(value)?,
            PaymentField::Username => self.net_banking.username = value.to_string(),
            PaymentField::Password => self.net_banking.password = value.to_string(),
            PaymentField::Provider => self.wallet.provider = parse_selection(value)?,
            PaymentField::MobileNumber => self.wallet.mobile_number = value.to_string(),
        }
        Ok(())
    }

    /// Package the active method's details.
    pub fn submission(&self) -> PaymentRequest {
        match self.method {
            PaymentMethod::Card => PaymentRequest::Card(self.card.clone()),
            PaymentMethod::Upi => PaymentRequest::Upi(self.upi.clone()),
            PaymentMethod::NetBanking => PaymentRequest::NetBanking(self.net_banking.clone()),
            PaymentMethod::Wallet => PaymentRequest::Wallet(self.wallet.clone()),
        }
    }
}

fn parse_selection<T>(value: &str) -> Result<Option<T>, UnknownOptionError>
where
    T: FromStr<Err = UnknownOptionError>,
{
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}
