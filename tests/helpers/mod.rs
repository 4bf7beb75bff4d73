// In-process fakes for the gateway, the widget and the display channel.
//
// Shared by the integration tests through `#[path]`; not every target uses
// every helper.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use rzp_checkout::checkout::{CheckoutOptions, CheckoutWidget, Notifier, WidgetBuilder};
use rzp_checkout::core::{AppError, Currency, Result};
use rzp_checkout::orders::{Order, OrderGateway, OrderRequest, OrderStatus};

/// Gateway that records every request and answers from a fixed script
pub struct RecordingGateway {
    requests: Mutex<Vec<OrderRequest>>,
    reject: bool,
    currencies: Vec<Currency>,
}

impl RecordingGateway {
    pub fn succeeding() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reject: false,
            currencies: Currency::ALL.to_vec(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reject: true,
            ..Self::succeeding()
        }
    }

    pub fn only(currencies: &[Currency]) -> Self {
        Self {
            currencies: currencies.to_vec(),
            ..Self::succeeding()
        }
    }

    pub fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// The order a real gateway would create for `request`
pub fn order_for(request: &OrderRequest) -> Order {
    Order {
        id: format!("order_{}", request.receipt()),
        entity: "order".to_string(),
        amount: request.amount(),
        amount_paid: 0,
        amount_due: request.amount(),
        currency: request.currency(),
        receipt: Some(request.receipt().to_string()),
        status: OrderStatus::Created,
        attempts: 0,
        notes: request.notes().clone(),
        created_at: Utc::now(),
    }
}

#[async_trait]
impl OrderGateway for RecordingGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<Order> {
        self.requests.lock().unwrap().push(request.clone());

        if self.reject {
            return Err(AppError::GatewayRejected {
                status: 400,
                code: "BAD_REQUEST_ERROR".to_string(),
                description: "Authentication failed".to_string(),
            });
        }

        Ok(order_for(request))
    }

    fn name(&self) -> &str {
        "recording"
    }

    fn supports_currency(&self, currency: Currency) -> bool {
        self.currencies.contains(&currency)
    }
}

#[derive(Debug, Default)]
pub struct WidgetLog {
    pub built: Vec<CheckoutOptions>,
    pub opened: Vec<String>,
}

/// Widget builder that records construction and activation
#[derive(Clone, Default)]
pub struct RecordingWidgetBuilder {
    log: Arc<Mutex<WidgetLog>>,
    fail_open: bool,
}

impl RecordingWidgetBuilder {
    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    pub fn built(&self) -> Vec<CheckoutOptions> {
        self.log.lock().unwrap().built.clone()
    }

    /// Order ids of every widget that was opened, in order
    pub fn opened(&self) -> Vec<String> {
        self.log.lock().unwrap().opened.clone()
    }
}

pub struct RecordingWidget {
    options: CheckoutOptions,
    log: Arc<Mutex<WidgetLog>>,
    fail_open: bool,
}

impl CheckoutWidget for RecordingWidget {
    fn open(self) -> Result<()> {
        if self.fail_open {
            return Err(AppError::internal("widget failed to open"));
        }
        self.log.lock().unwrap().opened.push(self.options.order_id);
        Ok(())
    }
}

impl WidgetBuilder for RecordingWidgetBuilder {
    type Widget = RecordingWidget;

    fn build(&self, options: CheckoutOptions) -> Result<RecordingWidget> {
        self.log.lock().unwrap().built.push(options.clone());
        Ok(RecordingWidget {
            options,
            log: self.log.clone(),
            fail_open: self.fail_open,
        })
    }
}

/// Display channel that keeps every message
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub fn options(order_id: &str) -> CheckoutOptions {
    CheckoutOptions {
        key: "rzp_test_key".to_string(),
        amount: 50000,
        currency: Currency::INR,
        order_id: order_id.to_string(),
        name: "Merchant Name".to_string(),
        description: "Purchase Description".to_string(),
        image: Some("https://example.com/your_logo.png".to_string()),
        prefill: Default::default(),
        notes: BTreeMap::new(),
    }
}
