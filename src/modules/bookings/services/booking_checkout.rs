use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info, warn};

use super::fee_calculator::ParkingFeeCalculator;
use super::slot_pool::ParkingLot;
use crate::core::Result;
use crate::modules::bookings::models::BookingRequest;
use crate::modules::checkout::services::{
    CheckoutFlow, CheckoutSession, ResponseHandler, WidgetBuilder,
};

/// A reserved slot whose fee is waiting in the checkout widget
pub struct BookedCheckout {
    pub slot_id: u32,
    pub fee: Decimal,
    pub session: CheckoutSession,
}

/// Slot reservation, pricing and checkout handoff for one booking
pub struct BookingCheckout<B: WidgetBuilder> {
    lot: Arc<ParkingLot>,
    calculator: ParkingFeeCalculator,
    flow: CheckoutFlow<B>,
}

impl<B: WidgetBuilder> BookingCheckout<B> {
    pub fn new(lot: Arc<ParkingLot>, calculator: ParkingFeeCalculator, flow: CheckoutFlow<B>) -> Self {
        Self {
            lot,
            calculator,
            flow,
        }
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    /// Reserve a slot, then create the order for its fee and open the widget.
    ///
    /// The slot is released again when the order or the widget fails.
    pub async fn book(
        &self,
        booking: BookingRequest,
        handler: impl ResponseHandler + 'static,
    ) -> Result<BookedCheckout> {
        booking.validate()?;
        let fee = self.calculator.fee(&booking)?;

        let slot_id = self.lot.reserve(&booking)?;

        let result = match self.calculator.order_request(&booking, slot_id) {
            Ok(request) => {
                self.flow
                    .start(request, Some(self.calculator.prefill(&booking)), handler)
                    .await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(session) => {
                info!(
                    slot_id,
                    fee = %fee,
                    currency = %self.calculator.currency(),
                    order_id = %session.order_id(),
                    free_slots = self.lot.free_count(),
                    "Booking handed to checkout"
                );
                Ok(BookedCheckout {
                    slot_id,
                    fee,
                    session,
                })
            }
            Err(e) => {
                error!(slot_id, error = %e, "Booking checkout failed");
                if let Err(release_err) = self.lot.release(slot_id) {
                    warn!(slot_id, error = %release_err, "Could not release slot");
                }
                Err(e)
            }
        }
    }
}
