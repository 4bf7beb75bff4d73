use tracing::{info, warn};

use super::response_handler::ResponseHandler;
use super::widget::{CheckoutWidget, WidgetBuilder};
use crate::core::Result;
use crate::modules::checkout::models::{CheckoutConfig, PaymentResponse};

/// Constructs a single-use widget per config and activates it
pub struct CheckoutInvoker<B: WidgetBuilder> {
    builder: B,
}

impl<B: WidgetBuilder> CheckoutInvoker<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Build one widget from the config's options and open it exactly once.
    ///
    /// The returned session owns the response handler until the widget
    /// reports back.
    pub fn invoke(&self, config: CheckoutConfig) -> Result<CheckoutSession> {
        let (options, handler) = config.into_parts();
        let order_id = options.order_id.clone();

        let widget = self.builder.build(options)?;
        widget.open()?;

        info!(order_id = %order_id, "Checkout widget opened");

        Ok(CheckoutSession { order_id, handler })
    }
}

/// An opened checkout awaiting the customer
///
/// Completing consumes the session, so the handler runs at most once.
/// Dropping it without completing is how an abandoned checkout ends.
pub struct CheckoutSession {
    order_id: String,
    handler: Box<dyn ResponseHandler>,
}

impl CheckoutSession {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Deliver the widget's payment outcome to the response handler
    pub fn complete(self, response: PaymentResponse) {
        if response.order_id != self.order_id {
            warn!(
                expected = %self.order_id,
                reported = %response.order_id,
                "Payment response refers to a different order"
            );
        }

        info!(
            order_id = %self.order_id,
            payment_id = %response.payment_id,
            "Payment response received"
        );

        self.handler.handle(&response);
    }
}

impl std::fmt::Debug for CheckoutSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutSession")
            .field("order_id", &self.order_id)
            .finish_non_exhaustive()
    }
}
