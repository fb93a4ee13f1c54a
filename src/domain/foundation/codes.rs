//! Gateway enumerations and their wire codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final status of a payment, as reported in notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PaymentStatus {
    Success,
    Error,
    Partial,
}

impl PaymentStatus {
    /// Numeric code used on the wire and in the notification signature.
    pub fn code(&self) -> u8 {
        match self {
            PaymentStatus::Success => 1,
            PaymentStatus::Error => 2,
            PaymentStatus::Partial => 3,
        }
    }

    /// Maps a wire code back to a status. Unknown codes yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PaymentStatus::Success),
            2 => Some(PaymentStatus::Error),
            3 => Some(PaymentStatus::Partial),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentStatus::Success)
    }
}

impl From<PaymentStatus> for u8 {
    fn from(status: PaymentStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for PaymentStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, String> {
        PaymentStatus::from_code(code).ok_or_else(|| format!("unknown payment status {}", code))
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Error => "error",
            PaymentStatus::Partial => "partial",
        };
        write!(f, "{}", s)
    }
}

/// Payment method (channel) codes known to the gateway.
///
/// Requests carry the preference as a plain `u32` so that codes added by the
/// gateway later can still be sent; use [`PaymentPreference::code`] to obtain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentPreference {
    NotSpecified,
    PayinPayoutAccount,
    QiwiTerminals,
    BankTransferRu,
    YandexMoney,
    BankTransferSwift,
    QiwiWallet,
    RbkMoney,
    WalletOne,
    PayPal,
    PlasticCards,
    EleksnetTerminals,
    PlasticCardsAlt,
    AlfaClick,
    SmsMtsMegafonTele2,
    SmsBeeline,
    WebMoney,
    EurosetMtsSalons,
    Recurring,
    Sbp,
}

impl PaymentPreference {
    const ALL: [PaymentPreference; 20] = [
        PaymentPreference::NotSpecified,
        PaymentPreference::PayinPayoutAccount,
        PaymentPreference::QiwiTerminals,
        PaymentPreference::BankTransferRu,
        PaymentPreference::YandexMoney,
        PaymentPreference::BankTransferSwift,
        PaymentPreference::QiwiWallet,
        PaymentPreference::RbkMoney,
        PaymentPreference::WalletOne,
        PaymentPreference::PayPal,
        PaymentPreference::PlasticCards,
        PaymentPreference::EleksnetTerminals,
        PaymentPreference::PlasticCardsAlt,
        PaymentPreference::AlfaClick,
        PaymentPreference::SmsMtsMegafonTele2,
        PaymentPreference::SmsBeeline,
        PaymentPreference::WebMoney,
        PaymentPreference::EurosetMtsSalons,
        PaymentPreference::Recurring,
        PaymentPreference::Sbp,
    ];

    pub fn code(&self) -> u32 {
        match self {
            PaymentPreference::NotSpecified => 0,
            PaymentPreference::PayinPayoutAccount => 1,
            PaymentPreference::QiwiTerminals => 2,
            PaymentPreference::BankTransferRu => 5,
            PaymentPreference::YandexMoney => 6,
            PaymentPreference::BankTransferSwift => 7,
            PaymentPreference::QiwiWallet => 8,
            PaymentPreference::RbkMoney => 13,
            PaymentPreference::WalletOne => 14,
            PaymentPreference::PayPal => 15,
            PaymentPreference::PlasticCards => 22,
            PaymentPreference::EleksnetTerminals => 124,
            PaymentPreference::PlasticCardsAlt => 125,
            PaymentPreference::AlfaClick => 126,
            PaymentPreference::SmsMtsMegafonTele2 => 127,
            PaymentPreference::SmsBeeline => 128,
            PaymentPreference::WebMoney => 129,
            PaymentPreference::EurosetMtsSalons => 130,
            PaymentPreference::Recurring => 133,
            PaymentPreference::Sbp => 136,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.code() == code)
    }

    /// Preferences accepted by the recurring token endpoints.
    pub fn supports_tokens(&self) -> bool {
        matches!(
            self,
            PaymentPreference::PlasticCards
                | PaymentPreference::PlasticCardsAlt
                | PaymentPreference::Recurring
        )
    }
}

impl From<PaymentPreference> for u32 {
    fn from(preference: PaymentPreference) -> Self {
        preference.code()
    }
}

/// Settlement currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rur,
    Eur,
    Usd,
    Gbp,
    Uah,
    Kzt,
    Mdl,
    Byn,
    Try,
    Aed,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Rur => "RUR",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Uah => "UAH",
            Currency::Kzt => "KZT",
            Currency::Mdl => "MDL",
            Currency::Byn => "BYN",
            Currency::Try => "TRY",
            Currency::Aed => "AED",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of peer-to-peer transfer invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum P2PType {
    #[serde(rename = "ANY")]
    Any,
    #[serde(rename = "SBP")]
    Sbp,
    #[serde(rename = "SBP_TG")]
    SbpTg,
}

impl P2PType {
    pub fn as_str(&self) -> &'static str {
        match self {
            P2PType::Any => "ANY",
            P2PType::Sbp => "SBP",
            P2PType::SbpTg => "SBP_TG",
        }
    }
}

/// Unit of measure for receipt line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductUnit {
    #[serde(rename = "piece")]
    Piece,
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "L")]
    Liter,
    #[serde(rename = "ml")]
    Ml,
}

impl ProductUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductUnit::Piece => "piece",
            ProductUnit::Kg => "kg",
            ProductUnit::Gram => "g",
            ProductUnit::Liter => "L",
            ProductUnit::Ml => "ml",
        }
    }
}

/// How a line-item discount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Amount,
    Percent,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Amount => "amount",
            DiscountType::Percent => "percent",
        }
    }
}
