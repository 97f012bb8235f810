//! npm registry and download-stats API implementation

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::card::types::PackageStats;
use crate::fetch::error::FetchError;
use crate::fetch::source::PackageStatsSource;

/// Default base URL for the npm registry (package documents)
const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Default base URL for the npm download counts API
const DEFAULT_API_URL: &str = "https://api.npmjs.org";

/// Package document from the npm registry
#[derive(Debug, Deserialize)]
struct PackageDocument {
    name: String,
    time: PackageTime,
}

#[derive(Debug, Deserialize)]
struct PackageTime {
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

/// Response from the per-version download counts endpoint
#[derive(Debug, Deserialize)]
struct VersionDownloads {
    downloads: IndexMap<String, i64>,
}

/// Response from the download range endpoint
#[derive(Debug, Deserialize)]
struct DownloadRange {
    downloads: Vec<DailyDownloads>,
}

#[derive(Debug, Deserialize)]
struct DailyDownloads {
    downloads: i64,
}

/// Response from the download point endpoint
#[derive(Debug, Deserialize)]
struct DownloadPoint {
    downloads: i64,
}

/// Package statistics source backed by the npm registry and downloads API
pub struct NpmSource {
    client: reqwest::Client,
    registry_url: String,
    api_url: String,
}

impl NpmSource {
    /// Creates a new NpmSource with custom base URLs
    pub fn new(registry_url: &str, api_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("pkgcard")
                .build()
                .expect("Failed to create HTTP client"),
            registry_url: registry_url.to_string(),
            api_url: api_url.to_string(),
        }
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        package_name: &str,
    ) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            warn!("npm API returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse npm API response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })
    }
}

impl Default for NpmSource {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL, DEFAULT_API_URL)
    }
}

#[async_trait::async_trait]
impl PackageStatsSource for NpmSource {
    async fn fetch_stats(&self, package_name: &str) -> Result<PackageStats, FetchError> {
        let encoded_name = Self::encode_package_name(package_name);

        let document: PackageDocument = self
            .get_json(
                &format!("{}/{}", self.registry_url, encoded_name),
                package_name,
            )
            .await?;

        let versions_url = format!("{}/versions/{}/last-week", self.api_url, encoded_name);
        let range_url = format!(
            "{}/downloads/range/last-month/{}",
            self.api_url, package_name
        );
        // A single window from the creation date; clamping is the API's concern
        let all_time_url = format!(
            "{}/downloads/point/{}:{}/{}",
            self.api_url,
            document.time.created.format("%Y-%m-%d"),
            Utc::now().format("%Y-%m-%d"),
            package_name
        );

        let (versions, range, all_time) = tokio::join!(
            self.get_json::<VersionDownloads>(&versions_url, package_name),
            self.get_json::<DownloadRange>(&range_url, package_name),
            self.get_json::<DownloadPoint>(&all_time_url, package_name),
        );
        let (versions, range, all_time) = (versions?, range?, all_time?);

        Ok(PackageStats {
            url: format!("https://www.npmjs.com/package/{}", document.name),
            name: document.name,
            all_time_downloads: all_time.downloads,
            last_30_days: range.downloads.into_iter().map(|d| d.downloads).collect(),
            updated_at: document.time.modified,
            versions: versions.downloads,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    async fn mock_package_endpoints(server: &mut ServerGuard, name: &str, encoded: &str) {
        server
            .mock("GET", format!("/{}", encoded).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(
                r#"{{
                    "name": "{}",
                    "time": {{
                        "created": "2015-03-10T00:00:00.000Z",
                        "modified": "2024-06-01T12:00:00.000Z"
                    }}
                }}"#,
                name
            ))
            .create_async()
            .await;

        server
            .mock("GET", format!("/versions/{}/last-week", encoded).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "downloads": {
                        "1.9.0": 15,
                        "2.0.0": 80,
                        "1.8.0": 5
                    }
                }"#,
            )
            .create_async()
            .await;

        server
            .mock("GET", format!("/downloads/range/last-month/{}", name).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "downloads": [
                        {"downloads": 10, "day": "2024-06-01"},
                        {"downloads": 20, "day": "2024-06-02"},
                        {"downloads": 15, "day": "2024-06-03"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        server
            .mock(
                "GET",
                Matcher::Regex(format!(
                    r"^/downloads/point/\d{{4}}-\d{{2}}-\d{{2}}:\d{{4}}-\d{{2}}-\d{{2}}/{}$",
                    regex_escape(name)
                )),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"downloads": 123456}"#)
            .create_async()
            .await;
    }

    // Package names only need '.' escaped to be regex-safe
    fn regex_escape(name: &str) -> String {
        name.replace('.', r"\.")
    }

    #[tokio::test]
    async fn fetch_stats_returns_stats_with_histogram_in_response_order() {
        let mut server = Server::new_async().await;
        mock_package_endpoints(&mut server, "leftpad", "leftpad").await;

        let source = NpmSource::new(&server.url(), &server.url());
        let stats = source.fetch_stats("leftpad").await.unwrap();

        assert_eq!(stats.name, "leftpad");
        assert_eq!(stats.url, "https://www.npmjs.com/package/leftpad");
        assert_eq!(stats.all_time_downloads, 123_456);
        assert_eq!(stats.last_30_days, vec![10, 20, 15]);
        // Histogram keys keep the order the API returned them in
        let keys: Vec<&str> = stats.versions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["1.9.0", "2.0.0", "1.8.0"]);
        assert_eq!(stats.versions["2.0.0"], 80);
    }

    #[tokio::test]
    async fn fetch_stats_handles_scoped_package() {
        let mut server = Server::new_async().await;
        mock_package_endpoints(&mut server, "@types/node", "@types%2Fnode").await;

        let source = NpmSource::new(&server.url(), &server.url());
        let stats = source.fetch_stats("@types/node").await.unwrap();

        assert_eq!(stats.name, "@types/node");
    }

    #[tokio::test]
    async fn fetch_stats_returns_not_found_for_nonexistent_package() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/nonexistent-package")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Not found"}"#)
            .create_async()
            .await;

        let source = NpmSource::new(&server.url(), &server.url());
        let result = source.fetch_stats("nonexistent-package").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }

    #[tokio::test]
    async fn fetch_stats_returns_invalid_response_for_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/broken")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let source = NpmSource::new(&server.url(), &server.url());
        let result = source.fetch_stats("broken").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }
}
