//! The `view` command: run the interactive map viewer.
//!
//! Thin front controller that builds the geocoder from configuration,
//! stands up the tokio runtime, and delegates to the TUI event loop.

use tokio_util::sync::CancellationToken;

use terrapane::search::SearchController;

use crate::error::CliError;
use crate::runner::CliRunner;
use crate::tui_app;

pub fn handle(runner: &CliRunner) -> Result<(), CliError> {
    // Fail before touching the terminal when no credential is configured.
    let geocoder = runner.geocoder()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(CliError::Io)?;

    let cancel = CancellationToken::new();
    let search = SearchController::new(geocoder, runtime.handle().clone())
        .with_cancellation(cancel.clone());

    let result = tui_app::run_tui(search, cancel.clone());

    // Stop any in-flight request before the runtime is dropped; a response
    // arriving after teardown must not touch state.
    cancel.cancel();

    result
}
