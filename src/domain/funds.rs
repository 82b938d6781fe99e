use crate::error::ActionError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Balance used when nothing else is configured.
pub const DEFAULT_BALANCE: Balance = Balance(dec!(1000.0));

/// Represents the funds available for a transfer.
///
/// This is a wrapper around `rust_decimal::Decimal` so that the sufficiency
/// comparison is exact rather than subject to floating point rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Balance {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = clean_amount_text(s);
        parse_decimal(&cleaned)
            .map(Self)
            .ok_or_else(|| ActionError::ConfigError(format!("invalid balance '{}'", s)))
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A requested transfer amount as the user typed it, e.g. `"$1,200.50"`.
///
/// `None` means the host had no value for the amount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransferRequest {
    pub amount: Option<String>,
}

impl TransferRequest {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The numeric value of the request, if the text can be read as a number.
    pub fn requested_amount(&self) -> Option<RequestedAmount> {
        self.amount.as_deref().and_then(parse_amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FundsCheckResult {
    pub has_sufficient_funds: bool,
}

impl FundsCheckResult {
    pub const INSUFFICIENT: Self = Self {
        has_sufficient_funds: false,
    };
}

/// A parsed transfer amount.
///
/// Amounts are kept as `Decimal` whenever they fit. Values outside its range
/// or scale, such as `1e-400` or `-9e28`, are kept as `f64` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestedAmount {
    Exact(Decimal),
    Approximate(f64),
}

impl RequestedAmount {
    pub fn fits_within(&self, balance: Balance) -> bool {
        match self {
            RequestedAmount::Exact(amount) => *amount <= balance.0,
            RequestedAmount::Approximate(amount) => balance
                .0
                .to_f64()
                .is_some_and(|balance| *amount <= balance),
        }
    }
}

fn clean_amount_text(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect::<String>()
        .trim()
        .to_string()
}

fn parse_decimal(cleaned: &str) -> Option<Decimal> {
    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .ok()
}

/// Reads free-form amount text as a number.
///
/// `$` and `,` are dropped anywhere in the input and surrounding whitespace is
/// ignored. Both plain (`1200.50`) and scientific (`1.2e3`) notation parse.
/// `NaN` and positive infinity are rejected; negative infinity is kept since
/// it is below any balance.
pub fn parse_amount(text: &str) -> Option<RequestedAmount> {
    let cleaned = clean_amount_text(text);
    if cleaned.is_empty() {
        return None;
    }

    if let Some(amount) = parse_decimal(&cleaned) {
        return Some(RequestedAmount::Exact(amount));
    }

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| !amount.is_nan() && (amount.is_finite() || amount.is_sign_negative()))
        .map(RequestedAmount::Approximate)
}

/// Decides whether `amount_text` fits within `balance`.
///
/// Anything that does not parse, including a missing value, is treated as
/// insufficient. An amount equal to the balance is sufficient.
pub fn evaluate(amount_text: Option<&str>, balance: Balance) -> FundsCheckResult {
    match amount_text.and_then(parse_amount) {
        Some(amount) => FundsCheckResult {
            has_sufficient_funds: amount.fits_within(balance),
        },
        None => FundsCheckResult::INSUFFICIENT,
    }
}

/// Checks transfer requests against a fixed balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundsChecker {
    balance: Balance,
}

impl FundsChecker {
    pub fn new(balance: Balance) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn check(&self, request: &TransferRequest) -> FundsCheckResult {
        evaluate(request.amount.as_deref(), self.balance)
    }
}

impl Default for FundsChecker {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE)
    }
}
