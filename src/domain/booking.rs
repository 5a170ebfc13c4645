use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle of a reservation.
///
/// ```text
/// pending ──> confirmed ──> completed
///    │            │
///    └──> canceled <┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Canceled,
    Completed,
}

impl Default for BookingStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl BookingStatus {
    /// Whether a booking in this state may move to `next`.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Canceled) | (Confirmed, Completed) | (Confirmed, Canceled)
        )
    }

    /// Canceled bookings no longer hold their table.
    pub fn holds_table(self) -> bool {
        self != BookingStatus::Canceled
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Canceled => "canceled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status change the lifecycle does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move booking from {from} to {to}")]
pub struct InvalidTransition {
    pub from: BookingStatus,
    pub to: BookingStatus,
}

/// Outcome of table allocation for a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "table_id", rename_all = "lowercase")]
pub enum TableAssignment {
    /// No table qualified when the booking was made
    Unassigned,
    Assigned(String),
}

impl TableAssignment {
    pub fn table_id(&self) -> Option<&str> {
        match self {
            TableAssignment::Assigned(id) => Some(id),
            TableAssignment::Unassigned => None,
        }
    }

    pub fn is_assigned_to(&self, table_id: &str) -> bool {
        self.table_id() == Some(table_id)
    }
}

/// A customer's reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    /// Slot label as offered by the booking form, e.g. "7:00 PM"
    pub time: String,
    pub guests: u32,
    pub table: TableAssignment,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
}

/// What a customer submits; id, table and status are decided by the booking service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub guests: u32,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl BookingDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        guests: u32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            date,
            time: time.into(),
            guests,
            special_requests: None,
        }
    }

    pub fn with_special_requests(mut self, requests: impl Into<String>) -> Self {
        self.special_requests = Some(requests.into());
        self
    }
}

impl Booking {
    /// Builds a pending booking from a draft.
    pub fn from_draft(id: impl Into<String>, draft: BookingDraft, table: TableAssignment) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            date: draft.date,
            time: draft.time,
            guests: draft.guests,
            table,
            special_requests: draft.special_requests,
            status: BookingStatus::Pending,
        }
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table.table_id()
    }

    /// True when this booking keeps `table_id` occupied on `date`.
    pub fn occupies(&self, table_id: &str, date: NaiveDate) -> bool {
        self.date == date && self.status.holds_table() && self.table.is_assigned_to(table_id)
    }

    /// Moves to `next` if the lifecycle allows it. Returns the previous status.
    pub fn transition(&mut self, next: BookingStatus) -> Result<BookingStatus, InvalidTransition> {
        if !self.status.can_transition_to(next) {
            return Err(InvalidTransition { from: self.status, to: next });
        }
        let previous = self.status;
        self.status = next;
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BookingStatus::*;

    fn sample() -> Booking {
        let draft = BookingDraft::new(
            "Abebe",
            "abebe@example.com",
            "555-0100",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            "7:00 PM",
            4,
        );
        Booking::from_draft("booking-1", draft, TableAssignment::Assigned("t2".into()))
    }

    #[test]
    fn test_transition_table() {
        let all = [Pending, Confirmed, Canceled, Completed];
        let legal = [
            (Pending, Confirmed),
            (Pending, Canceled),
            (Confirmed, Completed),
            (Confirmed, Canceled),
        ];
        for from in all {
            for to in all {
                assert_eq!(
                    from.can_transition_to(to),
                    legal.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_transition_keeps_status_on_rejection() {
        let mut booking = sample();
        assert_eq!(booking.transition(Completed), Err(InvalidTransition { from: Pending, to: Completed }));
        assert_eq!(booking.status, Pending);

        assert_eq!(booking.transition(Confirmed), Ok(Pending));
        assert_eq!(booking.transition(Completed), Ok(Confirmed));
        let err = booking.transition(Canceled).unwrap_err();
        assert_eq!(err.to_string(), "cannot move booking from completed to canceled");
    }

    #[test]
    fn test_canceled_booking_frees_table() {
        let mut booking = sample();
        let date = booking.date;
        assert!(booking.occupies("t2", date));
        assert!(!booking.occupies("t1", date));
        assert!(!booking.occupies("t2", date.succ_opt().unwrap()));

        booking.transition(Canceled).unwrap();
        assert!(!booking.occupies("t2", date));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["date"], "2025-06-01");
        assert_eq!(json["table"]["state"], "assigned");
        assert_eq!(json["table"]["table_id"], "t2");

        let unassigned = serde_json::to_value(TableAssignment::Unassigned).unwrap();
        assert_eq!(unassigned["state"], "unassigned");
    }
}
