use chrono::NaiveDate;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use super::allocation::{resolve_availability, select_table};
use super::error::BookingError;
use super::messages::{BookingRequest, ServiceResponse};
use crate::clients::{BookingClient, TableClient};
use crate::domain::{Booking, BookingDraft, BookingStatus, DiningTable, TableAssignment};

// =============================================================================
// BOOKING SERVICE
// =============================================================================

pub struct BookingService {
    receiver: mpsc::Receiver<BookingRequest>,
    table_client: TableClient,
    // creation order
    bookings: Vec<Booking>,
    next_id: u64,
}

impl BookingService {
    pub fn new(buffer_size: usize, table_client: TableClient) -> (Self, BookingClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            table_client,
            bookings: Vec::new(),
            next_id: 1,
        };
        let client = BookingClient::new(sender);
        (service, client)
    }

    #[instrument(name = "booking_service", skip(self))]
    pub async fn run(mut self) {
        info!("BookingService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                BookingRequest::CreateBooking { draft, respond_to } => {
                    self.handle_create_booking(draft, respond_to).await;
                }
                BookingRequest::GetBooking { id, respond_to } => {
                    self.handle_get_booking(id, respond_to);
                }
                BookingRequest::ListBookings { respond_to } => {
                    debug!(count = self.bookings.len(), "Listing bookings");
                    let _ = respond_to.send(Ok(self.bookings.clone()));
                }
                BookingRequest::AvailableTables { date, respond_to } => {
                    self.handle_available_tables(date, respond_to).await;
                }
                BookingRequest::UpdateStatus { id, status, respond_to } => {
                    self.handle_update_status(id, status, respond_to);
                }
                BookingRequest::Shutdown => {
                    info!("BookingService shutting down");
                    break;
                }
            }
        }
        info!("BookingService stopped");
    }

    fn next_booking_id(&mut self) -> String {
        let id = format!("booking-{}", self.next_id);
        self.next_id += 1;
        id
    }

    async fn current_tables(&self) -> Result<Vec<DiningTable>, BookingError> {
        self.table_client.get_tables().await.map_err(|e| {
            error!(error = %e, "Table lookup failed");
            BookingError::from(e)
        })
    }

    #[instrument(
        fields(date = %draft.date, time = %draft.time, guests = draft.guests),
        skip(self, draft, respond_to)
    )]
    async fn handle_create_booking(&mut self, draft: BookingDraft, respond_to: ServiceResponse<Booking, BookingError>) {
        info!("Processing create_booking request");

        // Step 1: Snapshot the tables
        let tables = match self.current_tables().await {
            Ok(tables) => tables,
            Err(e) => {
                let _ = respond_to.send(Err(e));
                return;
            }
        };

        // Step 2: Match a table against the existing bookings
        let assignment = select_table(&tables, &self.bookings, &draft);
        match &assignment {
            TableAssignment::Assigned(table_id) => info!(table_id = %table_id, "Table assigned"),
            TableAssignment::Unassigned => warn!("No table fits, booking stored without one"),
        }

        // Step 3: Store the booking
        let booking = Booking::from_draft(self.next_booking_id(), draft, assignment);
        info!(booking_id = %booking.id, "Booking created successfully");
        self.bookings.push(booking.clone());
        let _ = respond_to.send(Ok(booking));
    }

    #[instrument(fields(booking_id = %id), skip(self, respond_to))]
    fn handle_get_booking(&self, id: String, respond_to: ServiceResponse<Option<Booking>, BookingError>) {
        debug!("Processing get_booking request");
        let booking = self.bookings.iter().find(|b| b.id == id).cloned();
        if booking.is_none() {
            debug!("Booking not found");
        }
        let _ = respond_to.send(Ok(booking));
    }

    #[instrument(fields(date = %date), skip(self, respond_to))]
    async fn handle_available_tables(&self, date: NaiveDate, respond_to: ServiceResponse<Vec<DiningTable>, BookingError>) {
        debug!("Processing available_tables request");
        let result = self
            .current_tables()
            .await
            .map(|tables| resolve_availability(tables, &self.bookings, date));
        if let Ok(tables) = &result {
            let free = tables.iter().filter(|t| t.is_available).count();
            info!(free, total = tables.len(), "Availability resolved");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(booking_id = %id, status = %status), skip(self, respond_to))]
    fn handle_update_status(&mut self, id: String, status: BookingStatus, respond_to: ServiceResponse<Booking, BookingError>) {
        info!("Processing update_status request");
        let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) else {
            warn!("Booking not found");
            let _ = respond_to.send(Err(BookingError::NotFound(id)));
            return;
        };

        let result = match booking.transition(status) {
            Ok(previous) => {
                info!(previous = %previous, "Booking status updated");
                Ok(booking.clone())
            }
            Err(e) => {
                warn!(error = %e, "Status change rejected");
                Err(BookingError::from(e))
            }
        };
        let _ = respond_to.send(result);
    }
}
