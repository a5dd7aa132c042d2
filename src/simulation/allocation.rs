use crate::debt::Debt;
use crate::decimal::{Money, Rate};
use crate::types::{DebtId, Strategy};

use super::DebtMonth;

/// mutable per-run copy of a debt
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingDebt {
    pub id: DebtId,
    pub balance: Money,
    pub annual_rate: Rate,
    pub monthly_rate: Rate,
    pub min_payment: Money,
    pub monthly_payment: Money,
    pub is_interest_only: bool,
}

impl WorkingDebt {
    pub fn from_debt(debt: &Debt) -> Self {
        Self {
            id: debt.id,
            balance: debt.current_balance,
            annual_rate: debt.annual_rate(),
            monthly_rate: debt.monthly_rate(),
            min_payment: debt.minimum_payment,
            monthly_payment: debt.monthly_payment,
            is_interest_only: debt.is_interest_only(),
        }
    }

    /// placeholder for a supplied debt that takes no part in the run; reports as settled
    pub fn idle(debt: &Debt) -> Self {
        Self {
            id: debt.id,
            balance: Money::ZERO,
            annual_rate: debt.annual_rate(),
            monthly_rate: debt.monthly_rate(),
            min_payment: Money::ZERO,
            monthly_payment: Money::ZERO,
            is_interest_only: debt.is_interest_only(),
        }
    }

    /// what the debt pays before any surplus is handed out
    pub fn baseline_payment(&self, strategy: Strategy) -> Money {
        match strategy {
            Strategy::Current => self.monthly_payment,
            Strategy::Snowball | Strategy::Avalanche => self.min_payment,
        }
    }

    /// accrue one month of interest and pay the baseline against it
    pub fn pay_baseline(&mut self, strategy: Strategy) -> DebtMonth {
        if !self.balance.is_positive() {
            return DebtMonth::settled(self.id);
        }

        let interest = self.balance.interest(self.monthly_rate);
        if self.is_interest_only {
            return DebtMonth {
                debt_id: self.id,
                payment: interest,
                interest,
                principal: Money::ZERO,
                balance: self.balance,
            };
        }

        let payment = self.baseline_payment(strategy).min(self.balance + interest);
        let principal = payment - interest;
        self.balance = (self.balance - principal).max(Money::ZERO);

        DebtMonth {
            debt_id: self.id,
            payment,
            interest,
            principal,
            balance: self.balance,
        }
    }
}

/// indices of debts eligible for surplus, in the order they receive it.
///
/// Interest-only and paid-off debts never appear. Snowball ties go to the higher
/// rate, avalanche ties to the smaller balance, remaining ties keep input order.
pub fn target_order(strategy: Strategy, debts: &[WorkingDebt]) -> Vec<usize> {
    let mut order: Vec<usize> = debts
        .iter()
        .enumerate()
        .filter(|(_, d)| d.balance.is_positive() && !d.is_interest_only)
        .map(|(i, _)| i)
        .collect();

    match strategy {
        Strategy::Snowball => order.sort_by(|&a, &b| {
            debts[a]
                .balance
                .cmp(&debts[b].balance)
                .then(debts[b].annual_rate.cmp(&debts[a].annual_rate))
        }),
        Strategy::Avalanche => order.sort_by(|&a, &b| {
            debts[b]
                .annual_rate
                .cmp(&debts[a].annual_rate)
                .then(debts[a].balance.cmp(&debts[b].balance))
        }),
        Strategy::Current => order.clear(),
    }

    order
}

/// pour leftover budget into targets in order, each up to its remaining balance.
///
/// `entries` is index-aligned with `debts`. Returns the budget nothing could absorb.
pub fn pour_surplus(
    order: &[usize],
    debts: &mut [WorkingDebt],
    entries: &mut [DebtMonth],
    surplus: Money,
) -> Money {
    let mut remaining = surplus;

    for &index in order {
        if !remaining.is_positive() {
            break;
        }

        let debt = &mut debts[index];
        if !debt.balance.is_positive() {
            continue;
        }

        let extra = remaining.min(debt.balance);
        debt.balance = (debt.balance - extra).max(Money::ZERO);
        remaining -= extra;

        let entry = &mut entries[index];
        entry.payment += extra;
        entry.principal += extra;
        entry.balance = debt.balance;
    }

    remaining
}
