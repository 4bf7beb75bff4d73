use std::io::Write;

use crate::modules::checkout::models::PaymentResponse;

/// Receives the widget's payment outcome
pub trait ResponseHandler: Send + Sync {
    fn handle(&self, response: &PaymentResponse);
}

impl<F> ResponseHandler for F
where
    F: Fn(&PaymentResponse) + Send + Sync,
{
    fn handle(&self, response: &PaymentResponse) {
        self(response)
    }
}

/// Channel that shows a message to the end user
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Prints each message on its own stdout line
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = writeln!(out, "{}", message) {
            tracing::warn!(error = %e, "Failed to write notification");
        }
    }
}

/// Surfaces the three response fields to the user, one message each, and nothing else
pub struct DisplayHandler<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> DisplayHandler<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }
}

impl<N: Notifier> ResponseHandler for DisplayHandler<N> {
    fn handle(&self, response: &PaymentResponse) {
        self.notifier.notify(&response.payment_id);
        self.notifier.notify(&response.order_id);
        self.notifier.notify(&response.signature);
    }
}
