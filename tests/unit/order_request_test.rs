// Property-based tests for order request construction
//
// - Valid amount/currency/receipt input is stored unmodified
// - Any precondition violation is a validation error, never a panic

use proptest::prelude::*;
use rzp_checkout::core::{AppError, Currency};
use rzp_checkout::orders::OrderRequest;

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_valid_input_is_stored_unmodified(
        amount in 1i64..10_000_000_000i64,
        currency in currency(),
        receipt in "[A-Za-z0-9_#-]{1,40}"
    ) {
        let request = OrderRequest::new(amount, currency, receipt.clone()).unwrap();

        prop_assert_eq!(request.amount(), amount);
        prop_assert_eq!(request.currency(), currency);
        prop_assert_eq!(request.receipt(), receipt.as_str());
        prop_assert!(request.notes().is_empty());
    }

    #[test]
    fn test_serialized_body_carries_the_same_fields(
        amount in 1i64..10_000_000_000i64,
        currency in currency(),
        receipt in "[a-z0-9_]{1,40}"
    ) {
        let request = OrderRequest::new(amount, currency, receipt.clone()).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        prop_assert_eq!(body["amount"].as_i64(), Some(amount));
        prop_assert_eq!(body["currency"].as_str(), Some(currency.code()));
        prop_assert_eq!(body["receipt"].as_str(), Some(receipt.as_str()));
    }

    #[test]
    fn test_non_positive_amount_is_rejected(
        amount in i64::MIN..=0i64,
        currency in currency()
    ) {
        let result = OrderRequest::new(amount, currency, "rcpt_1");
        prop_assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_receipt_is_rejected(
        receipt in "[ \t]{0,10}",
        currency in currency()
    ) {
        let result = OrderRequest::new(100, currency, receipt);
        prop_assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_currency_code_is_rejected(code in "[A-Z]{3}") {
        prop_assume!(code.parse::<Currency>().is_err());
        let result = OrderRequest::from_parts(100, &code, "rcpt_1");
        prop_assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
