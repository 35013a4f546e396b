use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownOptionError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownOptionError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Payment method offered on the payment view.
///
/// 支付方式。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    NetBanking,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
        PaymentMethod::Wallet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::NetBanking => "netBanking",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Wallet => "Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnknownOptionError::new("payment method", s))
    }
}

/// Banks available for net banking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Sbi,
    Hdfc,
    Icici,
    Axis,
}

impl Bank {
    pub const ALL: [Bank; 4] = [Bank::Sbi, Bank::Hdfc, Bank::Icici, Bank::Axis];

    pub fn as_str(self) -> &'static str {
        match self {
            Bank::Sbi => "sbi",
            Bank::Hdfc => "hdfc",
            Bank::Icici => "icici",
            Bank::Axis => "axis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Bank::Sbi => "State Bank of India",
            Bank::Hdfc => "HDFC Bank",
            Bank::Icici => "ICICI Bank",
            Bank::Axis => "Axis Bank",
        }
    }
}

impl FromStr for Bank {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bank::ALL
            .into_iter()
            .find(|bank| bank.as_str() == s)
            .ok_or_else(|| UnknownOptionError::new("bank", s))
    }
}

/// Wallet providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    Paytm,
    Phonepe,
    Amazonpay,
    Mobikwik,
}

impl WalletProvider {
    pub const ALL: [WalletProvider; 4] = [
        WalletProvider::Paytm,
        WalletProvider::Phonepe,
        WalletProvider::Amazonpay,
        WalletProvider::Mobikwik,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WalletProvider::Paytm => "paytm",
            WalletProvider::Phonepe => "phonepe",
            WalletProvider::Amazonpay => "amazonpay",
            WalletProvider::Mobikwik => "mobikwik",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WalletProvider::Paytm => "Paytm",
            WalletProvider::Phonepe => "PhonePe",
            WalletProvider::Amazonpay => "Amazon Pay",
            WalletProvider::Mobikwik => "MobiKwik",
        }
    }
}

impl FromStr for WalletProvider {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletProvider::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| UnknownOptionError::new("wallet provider", s))
    }
}
