//! Publish command handler.

use chrono::Utc;
use herald::{
    HeraldResult, OAuthCredentials, OAuthSigner, PublicationCoordinator, PublicationTracker,
    PublishOutcome, XClient,
};

/// Post the newest unpublished artifact, or preview it.
///
/// A real run holds the run lock for its whole duration.
pub async fn handle_publish(coordinator: &PublicationCoordinator, dry_run: bool) -> HeraldResult<()> {
    let paths = &coordinator.config().paths;

    if dry_run {
        let tracker = PublicationTracker::load(&paths.tracking_file).await;
        match coordinator.preview(&tracker).await? {
            Some(preview) => {
                println!("Slug: {}", preview.slug());
                println!("Weighted length: {}", preview.weight());
                println!("{:-<80}", "");
                println!("{}", preview.text());
            }
            None => println!("Nothing to publish."),
        }
        return Ok(());
    }

    let (_lock, mut tracker) =
        PublicationTracker::load_exclusive(&paths.tracking_file, &paths.lock_file).await?;
    let distribution = &coordinator.config().distribution;
    let client = XClient::new(
        OAuthSigner::new(OAuthCredentials::from_env()?),
        distribution.endpoint.as_str(),
    );

    match coordinator.publish(&mut tracker, &client, Utc::now()).await? {
        PublishOutcome::Published(record) => {
            println!("Published {} as {}", record.slug(), record.post_id());
        }
        PublishOutcome::NothingToPublish => println!("Nothing to publish."),
    }
    Ok(())
}
