use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::DebtId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DebtError {
    #[error("negative balance for debt {id}: {balance}")]
    NegativeBalance {
        id: DebtId,
        balance: Money,
    },

    #[error("negative interest rate for debt {id}: {rate_percent}%")]
    NegativeInterestRate {
        id: DebtId,
        rate_percent: Decimal,
    },

    #[error("negative {field} for debt {id}: {amount}")]
    NegativePayment {
        id: DebtId,
        field: &'static str,
        amount: Money,
    },

    #[error("negative {field}: {amount}")]
    NegativeAmount {
        field: &'static str,
        amount: Money,
    },

    #[error("negative interest rate: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("negative extra monthly payment: {amount}")]
    NegativeExtraPayment {
        amount: Money,
    },

    #[error("duplicate debt id in simulation: {id}")]
    DuplicateDebtId {
        id: DebtId,
    },

    #[error("invalid term: {months} months")]
    InvalidTerm {
        months: u32,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("unknown strategy: {tag}")]
    UnknownStrategy {
        tag: String,
    },
}

pub type Result<T> = std::result::Result<T, DebtError>;
