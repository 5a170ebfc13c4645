use chrono::NaiveDate;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::booking_service::{BookingError, BookingRequest};
use crate::domain::{Booking, BookingDraft, BookingStatus, DiningTable};

/// Client for interacting with the booking service.
#[derive(Clone)]
pub struct BookingClient {
    sender: mpsc::Sender<BookingRequest>,
}

impl BookingClient {
    pub fn new(sender: mpsc::Sender<BookingRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), BookingError> {
        debug!("Sending request");
        self.sender
            .send(BookingRequest::Shutdown)
            .await
            .map_err(|_| BookingError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(BookingClient => fn create_booking(draft: BookingDraft) -> Booking as BookingRequest::CreateBooking, Error = BookingError);
client_method!(BookingClient => fn get_booking(id: String) -> Option<Booking> as BookingRequest::GetBooking, Error = BookingError);
client_method!(BookingClient => fn get_all_bookings() -> Vec<Booking> as BookingRequest::ListBookings, Error = BookingError);
client_method!(BookingClient => fn get_available_tables(date: NaiveDate) -> Vec<DiningTable> as BookingRequest::AvailableTables, Error = BookingError);
client_method!(BookingClient => fn update_booking_status(id: String, status: BookingStatus) -> Booking as BookingRequest::UpdateStatus, Error = BookingError);
