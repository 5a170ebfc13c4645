use chrono::NaiveDate;
use tokio::sync::oneshot;

use super::error::BookingError;
use crate::domain::{Booking, BookingDraft, BookingStatus, DiningTable};

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by [`super::BookingService`]. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum BookingRequest {
    CreateBooking {
        draft: BookingDraft,
        respond_to: ServiceResponse<Booking, BookingError>,
    },
    GetBooking {
        id: String,
        respond_to: ServiceResponse<Option<Booking>, BookingError>,
    },
    ListBookings {
        respond_to: ServiceResponse<Vec<Booking>, BookingError>,
    },
    AvailableTables {
        date: NaiveDate,
        respond_to: ServiceResponse<Vec<DiningTable>, BookingError>,
    },
    UpdateStatus {
        id: String,
        status: BookingStatus,
        respond_to: ServiceResponse<Booking, BookingError>,
    },
    Shutdown,
}
