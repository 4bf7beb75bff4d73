use tracing::info;

use super::checkout_invoker::{CheckoutInvoker, CheckoutSession};
use super::response_handler::ResponseHandler;
use super::widget::WidgetBuilder;
use crate::config::MerchantProfile;
use crate::core::Result;
use crate::modules::checkout::models::{CheckoutConfig, Prefill};
use crate::modules::orders::{OrderRequest, OrderRequester};

/// Order creation followed by checkout handoff
///
/// The order id returned by the gateway is what the widget is opened with;
/// nothing is duplicated between the two steps.
pub struct CheckoutFlow<B: WidgetBuilder> {
    requester: OrderRequester,
    invoker: CheckoutInvoker<B>,
    key_id: String,
    merchant: MerchantProfile,
}

impl<B: WidgetBuilder> CheckoutFlow<B> {
    pub fn new(
        requester: OrderRequester,
        invoker: CheckoutInvoker<B>,
        key_id: impl Into<String>,
        merchant: MerchantProfile,
    ) -> Self {
        Self {
            requester,
            invoker,
            key_id: key_id.into(),
            merchant,
        }
    }

    /// Create the order, then open the widget for it.
    ///
    /// No widget is built when order creation fails.
    pub async fn start(
        &self,
        request: OrderRequest,
        prefill: Option<Prefill>,
        handler: impl ResponseHandler + 'static,
    ) -> Result<CheckoutSession> {
        let order = self.requester.request(request).await?;

        let mut config = CheckoutConfig::for_order(&self.key_id, &order, &self.merchant, handler)?;
        if let Some(prefill) = prefill {
            config = config.with_prefill(prefill);
        }

        let session = self.invoker.invoke(config)?;

        info!(
            gateway = %self.requester.gateway_name(),
            order_id = %session.order_id(),
            "Checkout handed off"
        );

        Ok(session)
    }
}
