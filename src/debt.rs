use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{DebtError, Result};
use crate::types::{DebtId, RepaymentType};

fn default_active() -> bool {
    true
}

/// snapshot of one debt as supplied by the calling application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    #[serde(default)]
    pub name: String,
    pub current_balance: Money,
    /// percentage, 3.8 meaning 3.8% a year
    pub annual_interest_rate_percent: Decimal,
    #[serde(default)]
    pub minimum_payment: Money,
    #[serde(default)]
    pub monthly_payment: Money,
    #[serde(default)]
    pub repayment_type: RepaymentType,
    /// only consulted by interest-only debts
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Debt {
    pub fn builder() -> DebtBuilder {
        DebtBuilder::new()
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percent(self.annual_interest_rate_percent)
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate().monthly_rate()
    }

    pub fn is_interest_only(&self) -> bool {
        self.repayment_type == RepaymentType::InterestOnly
    }

    /// active debts with an outstanding balance take part in simulations
    pub fn is_simulated(&self) -> bool {
        self.is_active && self.current_balance.is_positive()
    }

    /// reject inputs the arithmetic has no guard against
    pub fn validate(&self) -> Result<()> {
        if self.current_balance.is_negative() {
            return Err(DebtError::NegativeBalance {
                id: self.id,
                balance: self.current_balance,
            });
        }

        if self.annual_interest_rate_percent < Decimal::ZERO {
            return Err(DebtError::NegativeInterestRate {
                id: self.id,
                rate_percent: self.annual_interest_rate_percent,
            });
        }

        for (field, amount) in [
            ("minimum payment", self.minimum_payment),
            ("monthly payment", self.monthly_payment),
        ] {
            if amount.is_negative() {
                return Err(DebtError::NegativePayment {
                    id: self.id,
                    field,
                    amount,
                });
            }
        }

        Ok(())
    }
}

/// builder for debt records
#[derive(Debug, Default)]
pub struct DebtBuilder {
    id: Option<DebtId>,
    name: Option<String>,
    balance: Option<Money>,
    rate_percent: Option<Decimal>,
    minimum_payment: Option<Money>,
    monthly_payment: Option<Money>,
    repayment_type: Option<RepaymentType>,
    end_date: Option<NaiveDate>,
    is_active: Option<bool>,
}

impl DebtBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: DebtId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn balance(mut self, balance: Money) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn rate_percent(mut self, percent: Decimal) -> Self {
        self.rate_percent = Some(percent);
        self
    }

    pub fn minimum_payment(mut self, amount: Money) -> Self {
        self.minimum_payment = Some(amount);
        self
    }

    pub fn monthly_payment(mut self, amount: Money) -> Self {
        self.monthly_payment = Some(amount);
        self
    }

    pub fn repayment_type(mut self, repayment_type: RepaymentType) -> Self {
        self.repayment_type = Some(repayment_type);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn build(self) -> Result<Debt> {
        let current_balance = self.balance.ok_or(DebtError::InvalidConfiguration {
            message: "Balance required".to_string(),
        })?;

        let minimum_payment = self.minimum_payment.unwrap_or(Money::ZERO);

        let debt = Debt {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name.unwrap_or_default(),
            current_balance,
            annual_interest_rate_percent: self.rate_percent.unwrap_or(Decimal::ZERO),
            minimum_payment,
            monthly_payment: self.monthly_payment.unwrap_or(minimum_payment),
            repayment_type: self.repayment_type.unwrap_or_default(),
            end_date: self.end_date,
            is_active: self.is_active.unwrap_or(true),
        };

        debt.validate()?;
        Ok(debt)
    }
}
