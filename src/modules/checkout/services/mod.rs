pub mod checkout_flow;
pub mod checkout_invoker;
pub mod hosted_checkout;
pub mod response_handler;
pub mod widget;

pub use checkout_flow::CheckoutFlow;
pub use checkout_invoker::{CheckoutInvoker, CheckoutSession};
pub use hosted_checkout::{render_page, HostedCheckout, HostedCheckoutBuilder, OutputTarget};
pub use response_handler::{ConsoleNotifier, DisplayHandler, Notifier, ResponseHandler};
pub use widget::{CheckoutWidget, WidgetBuilder};
