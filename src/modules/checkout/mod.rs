pub mod models;
pub mod services;

pub use models::{CheckoutConfig, CheckoutOptions, PaymentResponse, Prefill};
pub use services::{
    CheckoutFlow, CheckoutInvoker, CheckoutSession, CheckoutWidget, ConsoleNotifier,
    DisplayHandler, HostedCheckout, HostedCheckoutBuilder, Notifier, OutputTarget,
    ResponseHandler, WidgetBuilder,
};
