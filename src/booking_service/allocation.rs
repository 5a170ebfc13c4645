//! Pure table-matching rules. The service feeds them a snapshot of tables and bookings.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::{Booking, BookingDraft, DiningTable, TableAssignment};

/// Ids of tables held by a non-canceled booking on `date`, at any time of day.
pub fn occupied_on(bookings: &[Booking], date: NaiveDate) -> HashSet<&str> {
    bookings
        .iter()
        .filter(|b| b.date == date && b.status.holds_table())
        .filter_map(Booking::table_id)
        .collect()
}

/// Every table, with `is_available` forced off where a booking holds it on `date`.
///
/// Tables not held keep their manual flag.
pub fn resolve_availability(tables: Vec<DiningTable>, bookings: &[Booking], date: NaiveDate) -> Vec<DiningTable> {
    let occupied = occupied_on(bookings, date);
    tables
        .into_iter()
        .map(|mut table| {
            if occupied.contains(table.id.as_str()) {
                table.is_available = false;
            }
            table
        })
        .collect()
}

/// First table in scan order that is flagged available, seats the party and is
/// not held by a non-canceled booking for the same date and time slot.
pub fn select_table(tables: &[DiningTable], bookings: &[Booking], draft: &BookingDraft) -> TableAssignment {
    let same_slot: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.date == draft.date && b.time == draft.time && b.status.holds_table())
        .collect();

    tables
        .iter()
        .find(|table| {
            table.is_available
                && table.seats(draft.guests)
                && !same_slot.iter().any(|b| b.table.is_assigned_to(&table.id))
        })
        .map(|table| TableAssignment::Assigned(table.id.clone()))
        .unwrap_or(TableAssignment::Unassigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingStatus;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn room() -> Vec<DiningTable> {
        vec![
            DiningTable::new("t1", 1, 2, true),
            DiningTable::new("t2", 2, 4, true),
            DiningTable::new("t3", 3, 6, false),
            DiningTable::new("t4", 4, 4, true),
            DiningTable::new("t5", 5, 8, true),
            DiningTable::new("t6", 6, 2, false),
        ]
    }

    fn draft(day: u32, time: &str, guests: u32) -> BookingDraft {
        BookingDraft::new("Guest", "guest@example.com", "555-0101", date(day), time, guests)
    }

    fn booked(id: &str, day: u32, time: &str, table: &str, status: BookingStatus) -> Booking {
        let mut booking = Booking::from_draft(id, draft(day, time, 2), TableAssignment::Assigned(table.into()));
        booking.status = status;
        booking
    }

    #[test]
    fn test_first_fit_in_scan_order() {
        let tables = room();
        assert_eq!(select_table(&tables, &[], &draft(1, "7:00 PM", 2)), TableAssignment::Assigned("t1".into()));
        assert_eq!(select_table(&tables, &[], &draft(1, "7:00 PM", 4)), TableAssignment::Assigned("t2".into()));
        // t3 seats six but is switched off
        assert_eq!(select_table(&tables, &[], &draft(1, "7:00 PM", 6)), TableAssignment::Assigned("t5".into()));
    }

    #[test]
    fn test_party_too_large_is_unassigned() {
        assert_eq!(select_table(&room(), &[], &draft(1, "7:00 PM", 9)), TableAssignment::Unassigned);
    }

    #[test]
    fn test_same_slot_skips_held_table() {
        let bookings = vec![booked("booking-1", 1, "7:00 PM", "t2", BookingStatus::Pending)];
        assert_eq!(
            select_table(&room(), &bookings, &draft(1, "7:00 PM", 4)),
            TableAssignment::Assigned("t4".into())
        );
        // other slot, other day: t2 is free again
        assert_eq!(
            select_table(&room(), &bookings, &draft(1, "9:00 PM", 4)),
            TableAssignment::Assigned("t2".into())
        );
        assert_eq!(
            select_table(&room(), &bookings, &draft(2, "7:00 PM", 4)),
            TableAssignment::Assigned("t2".into())
        );
    }

    #[test]
    fn test_canceled_booking_releases_slot() {
        let bookings = vec![booked("booking-1", 1, "7:00 PM", "t2", BookingStatus::Canceled)];
        assert_eq!(
            select_table(&room(), &bookings, &draft(1, "7:00 PM", 4)),
            TableAssignment::Assigned("t2".into())
        );
    }

    #[test]
    fn test_availability_marks_held_tables_for_the_whole_day() {
        let bookings = vec![
            booked("booking-1", 1, "7:00 PM", "t2", BookingStatus::Confirmed),
            booked("booking-2", 1, "1:00 PM", "t5", BookingStatus::Canceled),
            booked("booking-3", 2, "7:00 PM", "t1", BookingStatus::Pending),
            Booking::from_draft("booking-4", draft(1, "6:00 PM", 20), TableAssignment::Unassigned),
        ];

        let resolved = resolve_availability(room(), &bookings, date(1));
        let flags: Vec<(&str, bool)> = resolved.iter().map(|t| (t.id.as_str(), t.is_available)).collect();
        assert_eq!(
            flags,
            vec![("t1", true), ("t2", false), ("t3", false), ("t4", true), ("t5", true), ("t6", false)]
        );
    }

    #[test]
    fn test_availability_matches_occupancy_for_every_date() {
        let bookings = vec![
            booked("booking-1", 1, "7:00 PM", "t1", BookingStatus::Pending),
            booked("booking-2", 2, "7:00 PM", "t4", BookingStatus::Completed),
            booked("booking-3", 3, "7:00 PM", "t2", BookingStatus::Canceled),
        ];
        // every table switched on so only bookings decide
        let open: Vec<DiningTable> = room().into_iter().map(|t| DiningTable { is_available: true, ..t }).collect();

        for day in 1..=4 {
            for table in resolve_availability(open.clone(), &bookings, date(day)) {
                let held = bookings.iter().any(|b| b.occupies(&table.id, date(day)));
                assert_eq!(table.is_available, !held, "table {} on day {}", table.id, day);
            }
        }
    }
}
