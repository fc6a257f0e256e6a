//! Status and dataset check handlers.

use super::draw_source;
use herald::{DataError, DataErrorKind, HeraldResult, PublicationCoordinator, PublicationTracker};

/// Print every artifact with its publication state.
pub async fn handle_status(coordinator: &PublicationCoordinator) -> HeraldResult<()> {
    let tracker = PublicationTracker::load(&coordinator.config().paths.tracking_file).await;
    let report = coordinator.status(&tracker).await?;

    for entry in report.entries() {
        match entry.record() {
            Some(record) => println!(
                "[posted]  {}  {}  ({} at {})",
                entry.date(),
                entry.slug(),
                record.post_id(),
                record.posted_at()
            ),
            None => println!("[pending] {}  {}", entry.date(), entry.slug()),
        }
    }
    println!("{:-<80}", "");
    println!(
        "Total: {} articles, {} published",
        report.entries().len(),
        report.published()
    );
    match report.next_candidate() {
        Some(slug) => println!("Next: {}", slug),
        None => println!("Next: nothing to publish"),
    }
    Ok(())
}

/// Load the dataset and fail when any integrity rule is broken.
pub async fn handle_check_data(coordinator: &PublicationCoordinator) -> HeraldResult<()> {
    let draws = draw_source(coordinator.config()).load().await?;
    let violations = draws.validate();

    if violations.is_empty() {
        if let Some(latest) = draws.latest() {
            println!(
                "OK: {} draws, latest round {} ({})",
                draws.len(),
                latest.round(),
                latest.date()
            );
        }
        return Ok(());
    }

    for violation in &violations {
        println!("  - {}", violation);
    }
    Err(DataError::new(DataErrorKind::Integrity(violations.join("; "))).into())
}
