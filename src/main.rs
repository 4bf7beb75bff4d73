use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use rzp_checkout::bookings::{BookingCheckout, BookingRequest, ParkingFeeCalculator, ParkingLot};
use rzp_checkout::checkout::{
    CheckoutFlow, CheckoutInvoker, CheckoutSession, ConsoleNotifier, DisplayHandler,
    HostedCheckoutBuilder, OutputTarget, PaymentResponse, ResponseHandler,
};
use rzp_checkout::config::{AppConfig, Config};
use rzp_checkout::core::telemetry::init_tracing;
use rzp_checkout::orders::{OrderRequest, OrderRequester, RazorpayClient};

#[derive(Parser)]
#[command(author, version, about = "Create a Razorpay order and hand it to the checkout widget", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an order and render the checkout page for it
    Order {
        /// Amount in the smallest currency unit (paise, cents)
        #[arg(long)]
        amount: i64,

        #[arg(long, default_value = "INR")]
        currency: String,

        /// Merchant receipt identifier
        #[arg(long)]
        receipt: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Price a parking booking, create its order and render the checkout page
    Book {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        /// Start time as "YYYY-MM-DD HH:MM"
        #[arg(long)]
        start: String,

        #[arg(long)]
        hours: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a payment response the way the checkout page does
    Complete {
        #[arg(long)]
        payment_id: String,

        #[arg(long)]
        order_id: String,

        #[arg(long)]
        signature: String,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Write the checkout page here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Wait for the widget's JSON payment response on stdin
    #[arg(long)]
    await_response: bool,
}

impl OutputArgs {
    fn target(&self) -> OutputTarget {
        match &self.out {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = AppConfig::from_env();
    init_tracing(&app);

    let cli = Cli::parse();

    match cli.command {
        Command::Complete {
            payment_id,
            order_id,
            signature,
        } => {
            DisplayHandler::new(ConsoleNotifier)
                .handle(&PaymentResponse::new(payment_id, order_id, signature));
        }
        Command::Order {
            amount,
            currency,
            receipt,
            output,
        } => {
            let config = load_config(app)?;
            let request = OrderRequest::from_parts(amount, &currency, receipt)?;
            let flow = build_flow(&config, output.target())?;

            let session = flow
                .start(request, None, DisplayHandler::new(ConsoleNotifier))
                .await
                .context("checkout handoff failed")?;

            finish(session, output.await_response)?;
        }
        Command::Book {
            name,
            phone,
            start,
            hours,
            output,
        } => {
            let config = load_config(app)?;
            let start_time = NaiveDateTime::parse_from_str(&start, "%Y-%m-%d %H:%M")
                .with_context(|| format!("invalid start time '{}'", start))?;
            let booking = BookingRequest::new(name, phone, start_time, hours)?;

            let lot = Arc::new(ParkingLot::new(config.parking.total_slots)?);
            let checkout = BookingCheckout::new(
                lot,
                ParkingFeeCalculator::from_config(&config.parking)?,
                build_flow(&config, output.target())?,
            );

            let booked = checkout
                .book(booking, DisplayHandler::new(ConsoleNotifier))
                .await
                .context("booking checkout failed")?;

            tracing::info!(
                slot_id = booked.slot_id,
                fee = %booked.fee,
                free_slots = checkout.lot().free_count(),
                "Parking slot held for payment"
            );

            finish(booked.session, output.await_response)?;
        }
    }

    Ok(())
}

fn load_config(app: AppConfig) -> anyhow::Result<Config> {
    let config = Config::with_app(app).context("failed to load configuration")?;
    config.validate().context("configuration validation failed")?;

    tracing::info!(environment = %config.app.env, gateway = ?config.razorpay, "Configuration loaded");
    Ok(config)
}

fn build_flow(
    config: &Config,
    target: OutputTarget,
) -> anyhow::Result<CheckoutFlow<HostedCheckoutBuilder>> {
    let client = RazorpayClient::new(&config.razorpay)?;
    let key_id = client.key_id().to_string();

    let requester = OrderRequester::new(Arc::new(client));
    let invoker = CheckoutInvoker::new(HostedCheckoutBuilder::new(
        config.razorpay.checkout_script_url.clone(),
        target,
    ));

    Ok(CheckoutFlow::new(
        requester,
        invoker,
        key_id,
        config.merchant.clone(),
    ))
}

fn finish(session: CheckoutSession, await_response: bool) -> anyhow::Result<()> {
    if !await_response {
        tracing::info!(order_id = %session.order_id(), "Checkout left to the browser");
        return Ok(());
    }

    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read payment response")?;
    if read == 0 {
        bail!("no payment response for order {}", session.order_id());
    }

    let response: PaymentResponse =
        serde_json::from_str(line.trim()).context("invalid payment response JSON")?;
    session.complete(response);
    Ok(())
}
