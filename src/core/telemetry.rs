use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `app.log_level`.
/// Production environments emit JSON lines, everything else the compact human format.
pub fn init_tracing(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("rzp_checkout={},reqwest=warn", app.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);

    let result = if app.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    // A subscriber installed earlier (tests, embedding app) keeps precedence
    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}
