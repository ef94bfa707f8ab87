//! Wordfreq engine: document fetch, parallel map-reduce orchestration, and
//! chart rendering.
mod chart;
mod fetch;
mod pipeline;
mod types;

pub use chart::{render_bar_chart, ChartStyle};
pub use fetch::{fetch_text_blocking, FetchSettings, Fetcher, ReqwestFetcher};
pub use pipeline::{count_frequencies, default_chunk_count, map_reduce_with};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, PipelineError};
