//! Thin entry point: fetch a document, run the map-reduce word count, and
//! print a bar chart of the most frequent words.
mod logging;

use anyhow::Context;
use pipeline_logging::{pipeline_error, pipeline_info};
use wordfreq_core::{tokenize, top_k};
use wordfreq_engine::{
    count_frequencies, fetch_text_blocking, render_bar_chart, ChartStyle, FetchSettings,
    ReqwestFetcher,
};

/// Pride and Prejudice, Project Gutenberg plain text.
const DEFAULT_URL: &str = "https://www.gutenberg.org/files/1342/1342-0.txt";
const TOP_K: usize = 10;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::Terminal);

    let url = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_URL.to_string());
    match run(&url) {
        Ok(()) => Ok(()),
        Err(err) => {
            pipeline_error!("run aborted: {err:#}");
            Err(err)
        }
    }
}

fn run(url: &str) -> anyhow::Result<()> {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let output = fetch_text_blocking(&fetcher, url)
        .with_context(|| format!("failed to fetch document from {url}"))?;
    pipeline_info!(
        "fetched {} ({} bytes)",
        output.metadata.final_url,
        output.metadata.byte_len
    );

    let tokens = tokenize(&output.text);
    pipeline_info!("tokenized {} words", tokens.len());

    let frequencies = count_frequencies(&tokens, None).context("word count failed")?;
    let top = top_k(&frequencies, TOP_K);

    let style = ChartStyle {
        title: Some(format!("Top {} most frequent words", top.len())),
        ..ChartStyle::default()
    };
    print!("{}", render_bar_chart(&top, &style));
    Ok(())
}
