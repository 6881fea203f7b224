// SPDX-License-Identifier: MPL-2.0
//! Streaming image downloads with progress reporting.
//!
//! [`fetch`] turns one HTTP GET into a stream of [`DownloadEvent`]s: zero or
//! more [`DownloadEvent::Progress`] reports followed by exactly one
//! [`DownloadEvent::Completed`]. The body is buffered in memory and decoded
//! on a blocking worker thread once the transfer finishes.

use crate::config::NetworkConfig;
use crate::domain::progress::DownloadProgress;
use crate::error::{Error, Result};
use crate::media::image::{decode, DecodeTarget, ImageData};
use futures_util::stream::{self, Stream, StreamExt};
use reqwest::Url;

/// One step of a download.
#[derive(Debug, Clone)]
pub enum DownloadEvent {
    Progress(DownloadProgress),
    Completed(Result<ImageData>),
}

/// Parses a row address, rejecting anything that is not an absolute http(s) URL.
pub fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::InvalidUrl(format!("unsupported scheme: {}", other))),
    }
}

/// Builds the shared HTTP client from the network settings.
pub fn build_client(network: &NetworkConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(network.redirect_limit() as usize))
        .user_agent(network.user_agent())
        .build()
        .map_err(|e| Error::Transfer(e.to_string()))
}

enum Phase {
    Connect {
        client: reqwest::Client,
        url: Url,
    },
    Receive {
        response: reqwest::Response,
        progress: DownloadProgress,
        buffer: Vec<u8>,
    },
    Finished,
}

/// Downloads `url` and decodes it for `target`.
pub fn fetch(
    client: reqwest::Client,
    url: Url,
    target: DecodeTarget,
) -> impl Stream<Item = DownloadEvent> + Send + 'static {
    stream::unfold(Phase::Connect { client, url }, move |phase| async move {
        match phase {
            Phase::Connect { client, url } => {
                tracing::debug!(%url, "requesting image");
                match connect(&client, url).await {
                    Ok(response) => {
                        let progress = DownloadProgress::new(0, response.content_length());
                        let buffer = Vec::with_capacity(initial_capacity(progress.total_bytes));
                        Some((
                            DownloadEvent::Progress(progress),
                            Phase::Receive {
                                response,
                                progress,
                                buffer,
                            },
                        ))
                    }
                    Err(err) => Some((DownloadEvent::Completed(Err(err)), Phase::Finished)),
                }
            }
            Phase::Receive {
                mut response,
                progress,
                mut buffer,
            } => match response.chunk().await {
                Ok(Some(chunk)) => {
                    buffer.extend_from_slice(&chunk);
                    let progress = progress.advanced(chunk.len() as u64);
                    Some((
                        DownloadEvent::Progress(progress),
                        Phase::Receive {
                            response,
                            progress,
                            buffer,
                        },
                    ))
                }
                Ok(None) => {
                    tracing::debug!(bytes = buffer.len(), "download finished, decoding");
                    let result = decode_off_thread(buffer, target).await;
                    Some((DownloadEvent::Completed(result), Phase::Finished))
                }
                Err(err) => Some((
                    DownloadEvent::Completed(Err(Error::Read(err.to_string()))),
                    Phase::Finished,
                )),
            },
            Phase::Finished => None,
        }
    })
}

/// Drives [`fetch`] to completion and returns only its result.
pub async fn fetch_image(
    client: reqwest::Client,
    url: Url,
    target: DecodeTarget,
) -> Result<ImageData> {
    let events = fetch(client, url, target);
    futures_util::pin_mut!(events);
    while let Some(event) = events.next().await {
        if let DownloadEvent::Completed(result) = event {
            return result;
        }
    }
    Err(Error::Read("download ended without a result".to_string()))
}

async fn connect(client: &reqwest::Client, url: Url) -> Result<reqwest::Response> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Transfer(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Transfer(format!("HTTP status: {}", response.status())));
    }
    Ok(response)
}

async fn decode_off_thread(bytes: Vec<u8>, target: DecodeTarget) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || decode(&bytes, target))
        .await
        .map_err(|e| Error::Read(e.to_string()))?
}

// Caps the upfront allocation so a bogus Content-Length cannot reserve gigabytes.
fn initial_capacity(total: Option<u64>) -> usize {
    const MAX_PREALLOCATION: u64 = 64 * 1024 * 1024;
    total.map_or(0, |t| t.min(MAX_PREALLOCATION) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_url_accepts_https() {
        let url = parse_url("https://example.com/a.jpg?dl=1").expect("valid url");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn parse_url_trims_whitespace() {
        assert!(parse_url("  http://example.com/a.png \n").is_ok());
    }

    #[test]
    fn parse_url_rejects_relative_and_garbage() {
        assert!(matches!(parse_url("images/a.png"), Err(Error::InvalidUrl(_))));
        assert!(matches!(parse_url(""), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn parse_url_rejects_non_http_schemes() {
        assert!(matches!(
            parse_url("file:///etc/passwd"),
            Err(Error::InvalidUrl(message)) if message.contains("file")
        ));
    }

    #[test]
    fn build_client_accepts_defaults() {
        assert!(build_client(&NetworkConfig::default()).is_ok());
    }

    #[test]
    fn initial_capacity_is_bounded() {
        assert_eq!(initial_capacity(None), 0);
        assert_eq!(initial_capacity(Some(10)), 10);
        assert_eq!(initial_capacity(Some(u64::MAX)), 64 * 1024 * 1024);
    }
}
