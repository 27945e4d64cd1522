//! One run of the binary: fetch, process, search, display
//!
//! Output goes to the provided writer; diagnostics go through `tracing`.

use std::io::Write;

use thiserror::Error;
use tracing::info;

use crate::cli::RunConfig;
use crate::client::{ApiClient, FetchError, Transport};
use crate::data::{DataProcessor, ProcessError};

/// Anything that can end a run early
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Fetches the configured endpoint and writes the processed and searched items to `out`
///
/// The processed (active, sorted) listing is written first, followed by a
/// `Search results for "<query>":` header and the matching items.
pub async fn run<T: Transport, W: Write>(
    client: &mut ApiClient<T>,
    config: &RunConfig,
    out: &mut W,
) -> Result<(), AppError> {
    let data = client.fetch_with_retry(&config.endpoint).await?;
    let processor = DataProcessor::from_value(data)?;
    info!(
        endpoint = %config.endpoint,
        items = processor.items().len(),
        "fetched collection"
    );

    let processed = processor.process()?;
    processor.display_to(out, &processed)?;

    let results = processor.search(&config.query)?;
    writeln!(out, "Search results for \"{}\":", config.query).map_err(ProcessError::from)?;
    processor.display_to(out, &results)?;

    Ok(())
}
