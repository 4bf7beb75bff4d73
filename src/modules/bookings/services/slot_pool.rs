use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::bookings::models::BookingRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Free,
    Booked,
}

#[derive(Debug, Clone)]
struct Slot {
    booking: Option<BookingRequest>,
}

/// In-memory slot inventory for one parking lot
///
/// Slot ids run from 0 to `total - 1`. A booking holds its slot until released.
#[derive(Debug)]
pub struct ParkingLot {
    slots: Mutex<Vec<Slot>>,
}

impl ParkingLot {
    pub fn new(total_slots: u32) -> Result<Self> {
        if total_slots == 0 {
            return Err(AppError::validation("A parking lot needs at least one slot"));
        }

        Ok(Self {
            slots: Mutex::new(vec![Slot { booking: None }; total_slots as usize]),
        })
    }

    pub fn total(&self) -> u32 {
        self.slots.lock().len() as u32
    }

    pub fn free_count(&self) -> u32 {
        self.slots
            .lock()
            .iter()
            .filter(|slot| slot.booking.is_none())
            .count() as u32
    }

    pub fn status(&self, slot_id: u32) -> Option<SlotStatus> {
        self.slots.lock().get(slot_id as usize).map(|slot| {
            if slot.booking.is_some() {
                SlotStatus::Booked
            } else {
                SlotStatus::Free
            }
        })
    }

    pub fn booking_for(&self, slot_id: u32) -> Option<BookingRequest> {
        self.slots
            .lock()
            .get(slot_id as usize)
            .and_then(|slot| slot.booking.clone())
    }

    /// Marks the lowest free slot as booked for `booking` and returns its id
    pub fn reserve(&self, booking: &BookingRequest) -> Result<u32> {
        let mut slots = self.slots.lock();

        let (index, slot) = slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.booking.is_none())
            .ok_or_else(|| AppError::validation("No free slots available"))?;

        slot.booking = Some(booking.clone());
        let slot_id = index as u32;

        info!(slot_id, name = %booking.name, hours = booking.hours, "Parking slot reserved");
        Ok(slot_id)
    }

    /// Frees a booked slot again
    pub fn release(&self, slot_id: u32) -> Result<()> {
        let mut slots = self.slots.lock();

        let slot = slots
            .get_mut(slot_id as usize)
            .ok_or_else(|| AppError::validation(format!("Unknown parking slot {}", slot_id)))?;

        if slot.booking.take().is_none() {
            warn!(slot_id, "Release of a slot that was not booked");
            return Err(AppError::validation(format!(
                "Parking slot {} is not booked",
                slot_id
            )));
        }

        info!(slot_id, "Parking slot released");
        Ok(())
    }
}
