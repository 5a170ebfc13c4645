use chrono::NaiveDate;
use tracing::{error, info, warn, Instrument};

use reservation_desk::app_system::{setup_tracing, RestaurantSystem, SystemConfig, SystemError};
use reservation_desk::domain::{BookingDraft, BookingStatus};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env();
    let system = RestaurantSystem::new(config)?;

    let menu = system.menu.get_menu_items().await?;
    info!(items = menu.len(), "Menu loaded");

    let date: NaiveDate = "2025-06-01".parse()?;

    let span = tracing::info_span!("availability", %date);
    let tables = async {
        info!("Checking tables before any booking");
        system.bookings.get_available_tables(date).await
    }
    .instrument(span)
    .await?;
    let free: Vec<u32> = tables.iter().filter(|t| t.is_available).map(|t| t.table_number).collect();
    info!(?free, "Tables free on the evening");

    // Two parties of four for the same slot land on different tables
    let span = tracing::info_span!("booking_flow");
    let result = async {
        let first = system
            .bookings
            .create_booking(
                BookingDraft::new("Alice", "alice@example.com", "555-0100", date, "7:00 PM", 4)
                    .with_special_requests("Window seat"),
            )
            .await?;
        let second = system
            .bookings
            .create_booking(BookingDraft::new("Bekele", "bekele@example.com", "555-0101", date, "7:00 PM", 4))
            .await?;
        info!(first = ?first.table, second = ?second.table, "Bookings placed");

        let confirmed = system.bookings.update_booking_status(first.id.clone(), BookingStatus::Confirmed).await?;
        let completed = system.bookings.update_booking_status(confirmed.id, BookingStatus::Completed).await?;
        info!(booking_id = %completed.id, status = %completed.status, "First party served");

        if let Err(e) = system.bookings.update_booking_status(second.id, BookingStatus::Completed).await {
            warn!(error = %e, "Rejected as expected");
        }
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = result {
        error!(error = %e, "Booking flow failed");
    }

    let tables = system.bookings.get_available_tables(date).await?;
    let free: Vec<u32> = tables.iter().filter(|t| t.is_available).map(|t| t.table_number).collect();
    info!(?free, "Tables free after booking");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
