use chrono::Utc;
use tracing::{debug, error, info};

use crate::api::PostsClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::report::{RunOutcome, RunReport};

/// Run the full create → poll → delete sequence once and package the
/// outcome. This is the single boundary where step errors become a result
/// record instead of propagating further.
pub async fn run(config: &Config) -> RunReport {
    let start_time = Utc::now();
    info!("starting post lifecycle run");

    let outcome = match execute(config).await {
        Ok((todo_id, deletion_success)) => {
            let outcome = RunOutcome::Completed {
                todo_id,
                polls_completed: config.poll_count,
                deletion_success,
            };
            info!("post lifecycle run completed successfully: {outcome:?}");
            outcome
        }
        Err(e) => {
            error!("post lifecycle run failed: {e}");
            RunOutcome::Error {
                error_message: e.to_string(),
            }
        }
    };

    let end_time = Utc::now();
    RunReport {
        outcome,
        duration_seconds: (end_time - start_time).as_seconds_f64(),
        start_time,
        end_time,
    }
}

/// The three steps in strict sequence. Any error aborts the remaining
/// steps immediately, so a created-but-undeleted post is leaked on poll or
/// delete failure.
async fn execute(config: &Config) -> Result<(u64, bool), ApiError> {
    let client = PostsClient::new(&config.base_url);

    info!("step 1: creating post");
    let post = client.create_post(&config.payload()).await?;

    info!("step 2: starting polling sequence");
    for attempt in 1..=config.poll_count {
        info!("poll attempt {attempt} of {}", config.poll_count);
        let details = client.get_post(post.id).await?;
        debug!("poll {attempt} returned: {details}");

        if attempt < config.poll_count {
            info!(
                "waiting {} seconds before next poll",
                config.poll_interval_secs
            );
            tokio::time::sleep(config.poll_interval()).await;
        }
    }

    info!("step 3: deleting post");
    let deleted = client.delete_post(post.id).await?;

    Ok((post.id, deleted))
}
