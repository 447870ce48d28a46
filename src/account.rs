//! Encapsulation: a bank account whose balance can only change through
//! guarded deposits and withdrawals.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    #[error("amount must be strictly positive, got {amount}")]
    NonPositiveAmount { amount: f64 },

    #[error("cannot withdraw {requested}, balance is only {available}")]
    InsufficientFunds { requested: f64, available: f64 },
}

/// Account with a private balance. The only way to move money is through
/// [`deposit`](Self::deposit) and [`withdraw`](Self::withdraw).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BankAccount {
    balance: f64,
}

impl BankAccount {
    pub fn new() -> Self {
        Self { balance: 0.0 }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Adds `amount`; non-positive amounts are ignored.
    pub fn deposit(&mut self, amount: f64) {
        if let Err(err) = self.try_deposit(amount) {
            tracing::debug!(%err, "deposit ignored");
        }
    }

    /// Removes `amount`; non-positive amounts and overdrafts are ignored.
    pub fn withdraw(&mut self, amount: f64) {
        if let Err(err) = self.try_withdraw(amount) {
            tracing::debug!(%err, "withdrawal ignored");
        }
    }

    /// Like [`deposit`](Self::deposit) but reports why an amount was refused.
    /// Returns the new balance.
    pub fn try_deposit(&mut self, amount: f64) -> Result<f64, AccountError> {
        // `!(amount > 0.0)` also refuses NaN
        if !(amount > 0.0) {
            return Err(AccountError::NonPositiveAmount { amount });
        }
        self.balance += amount;
        Ok(self.balance)
    }

    pub fn try_withdraw(&mut self, amount: f64) -> Result<f64, AccountError> {
        if !(amount > 0.0) {
            return Err(AccountError::NonPositiveAmount { amount });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}
