//! Concurrent catalog download.
//!
//! Each catalog document downloads in its own tokio task under a bounded
//! timeout, streaming chunks to disk while a progress bar advances from the
//! reported `Content-Length`. One stalled or failed download fails the whole
//! fetch with a typed error; nothing polls, and nothing blocks forever. The
//! reconciliation core never sees this module — it only receives the three
//! files (or the run stops here).

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::task::JoinSet;
use tracing::info;

use crate::core::types::NamingConvention;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{convention} download failed: {reason}")]
    Download {
        convention: NamingConvention,
        reason: String,
    },

    #[error("{convention} download timed out after {seconds}s")]
    TimedOut {
        convention: NamingConvention,
        seconds: u64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Download task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Download URLs for the three catalog documents
#[derive(Debug, Clone)]
pub struct CatalogUrls {
    pub av: String,
    pub au: String,
    pub dr: String,
}

/// Paths of the downloaded catalog documents
#[derive(Debug, Clone)]
pub struct FetchedCatalogs {
    pub av: PathBuf,
    pub au: PathBuf,
    pub dr: PathBuf,
}

/// Download all three catalogs into `dir` concurrently.
///
/// `timeout` bounds each download individually.
///
/// # Errors
///
/// Returns the first download, timeout, or I/O error; remaining downloads
/// are aborted when the error is returned.
pub async fn fetch_all(
    urls: &CatalogUrls,
    dir: &Path,
    timeout: Duration,
) -> Result<FetchedCatalogs, FetchError> {
    let fetched = FetchedCatalogs {
        av: dir.join("av-style.xml"),
        au: dir.join("au-style.xml"),
        dr: dir.join("dr-style.xml"),
    };

    let progress = MultiProgress::new();
    let client = reqwest::Client::new();
    let mut tasks = JoinSet::new();

    let downloads = [
        (NamingConvention::Av, urls.av.clone(), fetched.av.clone()),
        (NamingConvention::Au, urls.au.clone(), fetched.au.clone()),
        (NamingConvention::Dr, urls.dr.clone(), fetched.dr.clone()),
    ];
    for (convention, url, dest) in downloads {
        let client = client.clone();
        let bar = progress.add(new_bar(convention));
        tasks.spawn(async move {
            match tokio::time::timeout(timeout, download_one(&client, convention, &url, &dest, &bar))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(FetchError::TimedOut {
                    convention,
                    seconds: timeout.as_secs(),
                }),
            }
        });
    }

    while let Some(joined) = tasks.join_next().await {
        joined??;
    }

    info!("All three catalogs downloaded to {}", dir.display());
    Ok(fetched)
}

fn new_bar(convention: NamingConvention) -> ProgressBar {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("{msg:>8} {bar:40} {bytes}/{total_bytes} ({bytes_per_sec})")
            .expect("static pattern"),
    );
    bar.set_message(convention.to_string());
    bar
}

async fn download_one(
    client: &reqwest::Client,
    convention: NamingConvention,
    url: &str,
    dest: &Path,
    bar: &ProgressBar,
) -> Result<(), FetchError> {
    let download_err = |err: reqwest::Error| FetchError::Download {
        convention,
        reason: err.to_string(),
    };

    let mut response = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(download_err)?;

    if let Some(len) = response.content_length() {
        bar.set_length(len);
    }

    let mut file = tokio::fs::File::create(dest).await?;
    while let Some(chunk) = response.chunk().await.map_err(download_err)? {
        file.write_all(&chunk).await?;
        bar.inc(chunk.len() as u64);
    }
    file.flush().await?;
    bar.finish();

    Ok(())
}
