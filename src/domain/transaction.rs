use super::account::{AccountRecord, Balance};

/// Name given to accounts opened implicitly by a transaction on an unknown id.
pub const NEW_ACCOUNT_NAME: &str = "New Account";

/// Decides the record that results from applying a signed amount to an account.
///
/// Unknown ids are not an error: the transaction opens a zero-balance account
/// named [`NEW_ACCOUNT_NAME`] and applies the amount to it. Amounts are not
/// validated, so withdrawals may take a balance below zero.
pub struct TransactionPolicy;

impl TransactionPolicy {
    pub fn apply(id: &str, existing: Option<&AccountRecord>, amount: f64) -> AccountRecord {
        match existing {
            Some(record) => {
                let balance = record.balance().credit(amount);
                record.clone().with_balance(balance)
            }
            None => AccountRecord::new(id, NEW_ACCOUNT_NAME, Balance::ZERO.credit(amount)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_to_existing_account() {
        let existing = AccountRecord::new("ACC1", "Account 1", Balance::new(100.0));
        let result = TransactionPolicy::apply("ACC1", Some(&existing), -30.0);

        assert_eq!(result.id(), "ACC1");
        assert_eq!(result.name(), "Account 1");
        assert_eq!(result.balance(), Balance::new(70.0));
    }

    #[test]
    fn test_apply_to_unknown_account_opens_it() {
        let result = TransactionPolicy::apply("ACC99", None, 50.0);

        assert_eq!(result.id(), "ACC99");
        assert_eq!(result.name(), NEW_ACCOUNT_NAME);
        assert_eq!(result.balance(), Balance::new(50.0));
    }

    #[test]
    fn test_no_overdraft_check() {
        let existing = AccountRecord::new("ACC1", "Account 1", Balance::new(10.0));
        let result = TransactionPolicy::apply("ACC1", Some(&existing), -25.75);
        assert_eq!(result.balance(), Balance::new(-15.75));

        let opened = TransactionPolicy::apply("ACC2", None, -5.0);
        assert_eq!(opened.balance(), Balance::new(-5.0));
    }

    #[test]
    fn test_huge_and_tiny_amounts_are_applied() {
        let opened = TransactionPolicy::apply("TINY", None, 1e-30);
        assert_eq!(opened.balance(), Balance::new(1e-30));

        let big = TransactionPolicy::apply("BIG", None, 5e28);
        let bigger = TransactionPolicy::apply("BIG", Some(&big), 5e28);
        assert_eq!(bigger.balance(), Balance::new(1e29));
    }

    #[test]
    fn test_zero_amount_is_applied() {
        let existing = AccountRecord::new("ACC1", "Account 1", Balance::new(42.0));
        let result = TransactionPolicy::apply("ACC1", Some(&existing), 0.0);
        assert_eq!(result, existing);
    }
}
