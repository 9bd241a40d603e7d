//! PR size labeler entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Detect the trigger** — outside GitHub Actions, or for events other
//!    than pull requests, log and exit 0 without doing anything.
//! 2. **Parse configuration** — read the `INPUT_*` variables into an
//!    [`ActionConfig`]; a missing token or malformed value is fatal.
//! 3. **Wire observability** — install the `tracing-subscriber` layer from
//!    [`telemetry`] and open a run span tagged with a fresh [`RunId`].
//! 4. **Construct infrastructure** — build the [`GitHubClient`] and hand it to
//!    a [`SizeLabeler`].
//! 5. **Map the outcome** — exit 0 on success, 1 on any error, including the
//!    "XL and fail-if-XL" policy failure.

mod config;
mod telemetry;

use std::process::ExitCode;

use anyhow::Context;
use github::{is_pull_request_event, GitHubClient, PullRequestEvent};
use labeler::SizeLabeler;
use sizing::{RunId, SizingError};
use tracing::Instrument;

use config::{ActionConfig, RunnerContext, Vars};
use telemetry::LogFormat;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let vars: Vars = std::env::vars().collect();
    let runner = RunnerContext::from_vars(&vars);
    telemetry::init(
        LogFormat::from_value(vars.get(telemetry::LOG_FORMAT_VAR).map(String::as_str)),
        runner.debug,
    );

    match run(&vars, &runner).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            // Workflow command: surfaces the failure as an annotation on the run.
            println!("::error::{}", escape_workflow_data(&format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

/// Escapes the message part of a workflow command so multi-line text
/// survives as one annotation.
fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

async fn run(vars: &Vars, runner: &RunnerContext) -> anyhow::Result<()> {
    if !runner.in_actions {
        tracing::warn!("Not in GitHub Action mode, quitting...");
        return Ok(());
    }

    if !is_pull_request_event(&runner.event_name) {
        tracing::debug!(
            event = %runner.event_name,
            "Not a pull request action, nothing to do here..."
        );
        return Ok(());
    }

    let config = ActionConfig::from_vars(vars)?;
    let thresholds = config.policy.thresholds;
    if !thresholds.is_ascending() {
        tracing::warn!(
            %thresholds,
            "Size thresholds are not strictly ascending; buckets are still evaluated smallest first"
        );
    }

    let event_path = runner
        .event_path
        .as_deref()
        .ok_or_else(|| SizingError::configuration("GITHUB_EVENT_PATH is not set"))?;
    let event = PullRequestEvent::from_path(event_path)
        .map_err(|e| SizingError::upstream("getting event info", e))?;
    let pr = event
        .pull_request_ref(runner.repository.as_deref())
        .map_err(|e| SizingError::upstream("getting event info", e))?;

    let run_id = RunId::new_random();
    let span = tracing::info_span!("label_pull_request", %run_id, %pr);

    async {
        tracing::debug!(api_url = %runner.api_url, policy = ?config.policy, "Starting");
        let client = GitHubClient::new(config.token, runner.api_url.as_str())
            .context("Failed to build GitHub client")?;
        let labeler = SizeLabeler::new(client, config.policy);

        let verdict = labeler.run(&pr, event.totals()).await?;
        tracing::info!(
            label = verdict.bucket.label(),
            volume = %verdict.volume,
            commented = verdict.commented,
            "Done"
        );
        Ok::<(), anyhow::Error>(())
    }
    .instrument(span)
    .await
}
