use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use reqwest::{Client, Url};
use tracing::{info, warn};

use crate::model::Report;
use crate::parser;

pub const BASE_URL: &str = "https://www.globalfirepower.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DETAIL_PATH: &str = "/country-military-strength-detail.php";
const USER_AGENT: &str = concat!("gfp_scraper/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub timeout: Duration,
}

fn create_client(config: &FetchConfig) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout)
        .build()
}

/// Detail page URL for a country slug such as `united-states-of-america`.
pub fn profile_url(base_url: &str, country_id: &str) -> Result<Url> {
    let page = format!("{}{}", base_url.trim_end_matches('/'), DETAIL_PATH);
    Url::parse_with_params(&page, &[("country_id", country_id)])
        .with_context(|| format!("Invalid base URL: {}", base_url))
}

/// GET the country's detail page. Any non-2xx status is an error.
pub async fn fetch_page(client: &Client, config: &FetchConfig, country_id: &str) -> Result<String> {
    let url = profile_url(&config.base_url, country_id)?;

    info!("Fetching {}", url);
    let start = Instant::now();
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} returned HTTP {}", url, status);
    }

    let html = response
        .text()
        .await
        .context("Failed to read response body")?;
    info!(
        "Fetched {} bytes in {}ms",
        html.len(),
        start.elapsed().as_millis()
    );
    Ok(html)
}

/// Fetch and extract one country. Returns `None` when there is no usable
/// document (network error, timeout, bad status, blank body).
pub async fn search(config: &FetchConfig, country_id: &str) -> Option<Report> {
    let client = match create_client(config) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to create HTTP client: {}", e);
            return None;
        }
    };

    let html = match fetch_page(&client, config, country_id).await {
        Ok(html) => html,
        Err(e) => {
            warn!("Fetch failed for {}: {:#}", country_id, e);
            return None;
        }
    };

    match parser::process_page(&html) {
        Ok(report) => Some(report),
        Err(e) => {
            warn!("Nothing to extract for {}: {}", country_id, e);
            None
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port, optionally after a
    /// delay. Returns the base URL to point the client at.
    async fn serve_once(status: &'static str, body: String, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            tokio::time::sleep(delay).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }

    fn local(base_url: String, timeout: Duration) -> FetchConfig {
        FetchConfig { base_url, timeout }
    }

    #[test]
    fn builds_detail_url() {
        let url = profile_url(BASE_URL, "united-states-of-america").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.globalfirepower.com/country-military-strength-detail.php?country_id=united-states-of-america"
        );
    }

    #[test]
    fn trailing_slash_and_escaping() {
        let url = profile_url("http://localhost:8080/", "côte d'ivoire").unwrap();
        assert_eq!(url.path(), "/country-military-strength-detail.php");
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "country_id");
        assert_eq!(value, "côte d'ivoire");
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(profile_url("not a url", "france").is_err());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_empty_result() {
        let config = FetchConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
        };
        assert!(search(&config, "united-states-of-america").await.is_none());
    }

    #[tokio::test]
    async fn error_status_is_empty_result() {
        let base = serve_once("404 Not Found", "<html>gone</html>".into(), Duration::ZERO).await;
        let config = local(base, Duration::from_secs(5));
        assert!(search(&config, "atlantis").await.is_none());
    }

    #[tokio::test]
    async fn stalled_server_times_out() {
        let base = serve_once("200 OK", "<html></html>".into(), Duration::from_secs(3)).await;
        let config = local(base, Duration::from_secs(1));
        assert!(search(&config, "united-states-of-america").await.is_none());
    }

    #[tokio::test]
    async fn served_profile_is_extracted() {
        let html = std::fs::read_to_string("tests/fixtures/united-states-of-america.html").unwrap();
        let base = serve_once("200 OK", html, Duration::ZERO).await;
        let config = local(base, Duration::from_secs(5));

        let report = search(&config, "united-states-of-america").await.unwrap();
        assert_eq!(report.section_count(), 12);
        assert_eq!(report.neighbouring_powers, vec!["Canada", "Mexico"]);
    }
}
