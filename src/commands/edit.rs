//! Edit command handler.

use crate::args::EditArgs;
use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::model::Transaction;
use crate::store::Store;
use crate::{Config, Result};

/// Replaces fields of the transaction at the 1-based row number in `args` and rewrites the file.
///
/// Fields that are omitted or blank keep their current value exactly. The resulting row is
/// validated as a whole before anything is written; other rows are rewritten unchanged and in
/// order.
///
/// # Errors
///
/// - `Range` if the row number does not exist.
/// - `Format` if the edited row does not validate. Nothing is written in that case.
/// - `NotFound`, `Schema`, `Format` or `Io` from reading or rewriting the file.
pub fn edit(config: Config, args: EditArgs) -> Result<Out<Transaction>> {
    let store = config.store();
    let mut transactions = store.read_all()?;
    let ordinal = args.ordinal();

    let current = Store::locate(&transactions, ordinal)?;
    let updated = args
        .edits()
        .apply(current)
        .pub_result(ErrorType::Format)?;

    transactions[ordinal - 1] = updated.clone();
    store.write_all(&transactions)?;

    let message = format!("Updated transaction {ordinal}");
    Ok(Out::new(message, updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransactionEdits;
    use crate::test::{sample_transactions, TestEnv};
    use rust_decimal::Decimal;

    #[test]
    fn test_edit_one_field() {
        let env = TestEnv::with_transactions(&sample_transactions());
        let edits = TransactionEdits {
            amount: Some("550".to_string()),
            ..Default::default()
        };
        let out = edit(env.config(), EditArgs::new(2, edits)).unwrap();
        assert_eq!(out.message(), "Updated transaction 2");

        let rows = env.store().read_all().unwrap();
        let expected = sample_transactions();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], expected[0]);
        assert_eq!(rows[2], expected[2]);
        assert_eq!(rows[1].amount().value(), Decimal::new(550, 0));
        assert_eq!(rows[1].date(), expected[1].date());
        assert_eq!(rows[1].category(), expected[1].category());
        assert_eq!(rows[1].description(), expected[1].description());
    }

    #[test]
    fn test_edit_keeps_untouched_fields_verbatim() {
        let env = TestEnv::with_contents(
            "date,category,amount,description\n2024-01-05, Food,5.00,\n",
        );
        let edits = TransactionEdits {
            amount: Some("6".to_string()),
            ..Default::default()
        };
        edit(env.config(), EditArgs::new(1, edits)).unwrap();
        assert_eq!(
            env.contents(),
            "date,category,amount,description\n2024-01-05, Food,6,\n"
        );
    }

    #[test]
    fn test_edit_out_of_range() {
        let env = TestEnv::with_transactions(&sample_transactions());
        let before = env.contents();
        for ordinal in [0, 4] {
            let err = edit(env.config(), EditArgs::new(ordinal, TransactionEdits::default()))
                .unwrap_err();
            assert_eq!(err.error_type(), ErrorType::Range);
        }
        assert_eq!(env.contents(), before);
    }

    #[test]
    fn test_edit_invalid_date_writes_nothing() {
        let env = TestEnv::with_transactions(&sample_transactions());
        let before = env.contents();
        let edits = TransactionEdits {
            date: Some("01/05/2024".to_string()),
            ..Default::default()
        };
        let err = edit(env.config(), EditArgs::new(1, edits)).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Format);
        assert_eq!(env.contents(), before);
    }

    #[test]
    fn test_edit_row_with_bad_existing_date_requires_fix() {
        let env = TestEnv::with_contents(
            "date,category,amount,description\nsometime,Food,5,x\n2024-01-02,Fuel,7,y\n",
        );
        let err = edit(env.config(), EditArgs::new(1, TransactionEdits::default())).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Format);

        let edits = TransactionEdits {
            date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        edit(env.config(), EditArgs::new(1, edits)).unwrap();
        assert_eq!(
            env.contents(),
            "date,category,amount,description\n2024-01-01,Food,5,x\n2024-01-02,Fuel,7,y\n"
        );
    }
}
