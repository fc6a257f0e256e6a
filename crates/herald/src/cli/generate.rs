//! Generate command handler.

use super::draw_source;
use chrono::Local;
use herald::{AnthropicClient, GenerateOutcome, HeraldResult, PublicationCoordinator};
use tracing::info;

/// Run the write path, or report what it would do.
pub async fn handle_generate(coordinator: &PublicationCoordinator, dry_run: bool) -> HeraldResult<()> {
    let config = coordinator.config();
    let draws = draw_source(config).load().await?;
    let today = Local::now().date_naive();

    if dry_run {
        let plan = coordinator.plan_generation(&draws, today).await?;
        let selection = plan.selection();
        println!("Topic: {}", selection.topic().id());
        println!("Slug:  {}", selection.slug());
        println!("Title: {}", selection.title());
        if *plan.exists() {
            println!("Already exists; a real run would skip generation.");
        }
        println!("{:-<80}", "");
        println!("{}", plan.prompt());
        return Ok(());
    }

    let driver = AnthropicClient::from_env(config.generation.api_url.as_str())?;
    match coordinator.generate(&draws, &driver, today).await? {
        GenerateOutcome::Generated(artifact) => {
            info!(slug = %artifact.slug(), "Generation complete");
            println!("Saved {}", artifact.slug());
        }
        GenerateOutcome::AlreadyExists { slug } => {
            println!("Already exists: {}", slug);
        }
    }
    Ok(())
}
