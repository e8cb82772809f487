use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed monetary value, stored as a double like the amounts clients send.
///
/// Negative balances are allowed: there is no overdraft check anywhere in the
/// ledger. Sums that leave the finite range become infinite rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(pub f64);

impl Balance {
    pub const ZERO: Self = Self(0.0);

    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Applies a signed delta. Negative amounts are withdrawals.
    pub fn credit(self, amount: f64) -> Self {
        Self(self.0 + amount)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One account as stored in the ledger at a point in time.
///
/// Records are values: fields are only set at construction, and a balance
/// change produces a new record through [`AccountRecord::with_balance`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AccountRecord {
    /// Unique key of the account.
    id: String,
    /// Display name.
    name: String,
    balance: Balance,
}

impl AccountRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: Balance) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Consumes the record and returns the same account with a new balance.
    pub fn with_balance(self, balance: Balance) -> Self {
        Self { balance, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_credit_is_signed() {
        let balance = Balance::new(10.0);
        assert_eq!(balance.credit(5.0), Balance::new(15.0));
        assert_eq!(balance.credit(-25.0), Balance::new(-15.0));
    }

    #[test]
    fn test_balance_credit_never_panics_out_of_range() {
        let huge = Balance::new(f64::MAX);
        assert_eq!(huge.credit(f64::MAX).value(), f64::INFINITY);
        assert_eq!(Balance::new(5e28).credit(5e28), Balance::new(1e29));
    }

    #[test]
    fn test_with_balance_keeps_identity() {
        let record = AccountRecord::new("ACC1", "Account 1", Balance::new(100.0));
        let updated = record.clone().with_balance(Balance::new(70.0));

        assert_eq!(updated.id(), "ACC1");
        assert_eq!(updated.name(), "Account 1");
        assert_eq!(updated.balance(), Balance::new(70.0));
        // The original value is untouched.
        assert_eq!(record.balance(), Balance::new(100.0));
    }

    #[test]
    fn test_balance_display() {
        assert_eq!(Balance::new(-12.5).to_string(), "-12.5");
        assert_eq!(Balance::new(70.0).to_string(), "70");
    }
}
