// Checkout Widget Invoker behaviour
//
// - One widget per config, built with exactly the config's fields
// - The widget is opened exactly once
// - The response handler runs only when the session completes

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::{Arc, Mutex};

use helpers::{options, RecordingNotifier, RecordingWidgetBuilder};
use rzp_checkout::checkout::{
    CheckoutConfig, CheckoutInvoker, DisplayHandler, PaymentResponse, Prefill,
};

#[test]
fn test_widget_built_with_exact_fields_and_opened_once() {
    let builder = RecordingWidgetBuilder::default();
    let invoker = CheckoutInvoker::new(builder.clone());

    let mut expected = options("order_1");
    expected.prefill = Prefill {
        name: Some("Asha".to_string()),
        email: Some("asha@example.com".to_string()),
        contact: None,
    };
    let config = CheckoutConfig::new(expected.clone(), |_: &PaymentResponse| {}).unwrap();

    let session = invoker.invoke(config).unwrap();

    assert_eq!(builder.built(), vec![expected]);
    assert_eq!(builder.opened(), vec!["order_1".to_string()]);
    assert_eq!(session.order_id(), "order_1");
}

#[test]
fn test_each_invocation_builds_a_fresh_widget() {
    let builder = RecordingWidgetBuilder::default();
    let invoker = CheckoutInvoker::new(builder.clone());

    invoker
        .invoke(CheckoutConfig::new(options("order_1"), |_: &PaymentResponse| {}).unwrap())
        .unwrap();
    invoker
        .invoke(CheckoutConfig::new(options("order_2"), |_: &PaymentResponse| {}).unwrap())
        .unwrap();

    assert_eq!(builder.built().len(), 2);
    assert_eq!(
        builder.opened(),
        vec!["order_1".to_string(), "order_2".to_string()]
    );
}

#[test]
fn test_handler_surfaces_the_three_response_fields() {
    let notifier = RecordingNotifier::default();
    let invoker = CheckoutInvoker::new(RecordingWidgetBuilder::default());
    let config =
        CheckoutConfig::new(options("order_1"), DisplayHandler::new(notifier.clone())).unwrap();

    let session = invoker.invoke(config).unwrap();
    assert!(notifier.messages().is_empty(), "nothing shown before payment");

    session.complete(PaymentResponse::new("pay_1", "order_1", "sig_1"));

    assert_eq!(
        notifier.messages(),
        vec!["pay_1".to_string(), "order_1".to_string(), "sig_1".to_string()]
    );
}

#[test]
fn test_abandoned_session_never_calls_handler() {
    let calls = Arc::new(Mutex::new(0u32));
    let counter = calls.clone();
    let invoker = CheckoutInvoker::new(RecordingWidgetBuilder::default());
    let config = CheckoutConfig::new(options("order_1"), move |_: &PaymentResponse| {
        *counter.lock().unwrap() += 1;
    })
    .unwrap();

    let session = invoker.invoke(config).unwrap();
    drop(session);

    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_failed_open_returns_error_without_session() {
    let builder = RecordingWidgetBuilder::failing_open();
    let invoker = CheckoutInvoker::new(builder.clone());

    let result =
        invoker.invoke(CheckoutConfig::new(options("order_1"), |_: &PaymentResponse| {}).unwrap());

    assert!(result.is_err());
    assert_eq!(builder.built().len(), 1);
    assert!(builder.opened().is_empty());
}

#[test]
fn test_config_rejects_missing_order_id() {
    let result = CheckoutConfig::new(options(""), |_: &PaymentResponse| {});
    assert!(result.is_err());
}
