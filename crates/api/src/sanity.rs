use std::env;
use std::time::Duration;

use async_trait::async_trait;
use foodtuck_types::CatalogItem;
use foodtuck_util::ContentConfig;
use reqwest::{Client, RequestBuilder, Url, header};
use tracing::debug;

use crate::{ContentError, ContentSource, decode_catalog};

/// Environment variable holding an optional read token for the dataset.
pub const TOKEN_ENV: &str = "FOODTUCK_SANITY_TOKEN";

/// Every food document, projected to the fields the navigation bar needs.
/// The image reference is resolved to a direct URL by the query itself.
pub const FOOD_CATALOG_QUERY: &str =
    r#"*[_type == "food"]{ name, description, category, "slug": slug.current, "image": image.asset->url }"#;

/// Hostnames allowed for local development regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Thin wrapper around a configured `reqwest::Client` for the query API.
#[derive(Debug, Clone)]
pub struct SanityClient {
    pub base_url: String,
    pub api_version: String,
    pub dataset: String,
    pub http: Client,
    pub user_agent: String,
}

impl SanityClient {
    /// Construct a client from the content configuration.
    ///
    /// The base URL is `content.base_url` when set, otherwise it is derived
    /// from the project id. Non-localhost hosts must use HTTPS. A bearer token
    /// is read from [`TOKEN_ENV`] when present.
    pub fn new_from_config(content: &ContentConfig) -> Result<Self, ContentError> {
        let base_url = match (&content.base_url, &content.project_id) {
            (Some(base_url), _) => base_url.trim_end_matches('/').to_string(),
            (None, Some(project_id)) => format!("https://{project_id}.api.sanity.io"),
            (None, None) => {
                return Err(ContentError::Config(
                    "set content.project_id or content.base_url (or FOODTUCK_SANITY_PROJECT_ID)".into(),
                ));
            }
        };
        validate_base_url(&base_url)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        if let Ok(token) = env::var(TOKEN_ENV)
            && !token.trim().is_empty()
        {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|error| ContentError::Config(format!("invalid {TOKEN_ENV}: {error}")))?;
            default_headers.insert(header::AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_version: content.api_version.trim_start_matches('v').to_string(),
            dataset: content.dataset.clone(),
            http,
            user_agent: format!("foodtuck-tui/0.1; {}", env::consts::OS),
        })
    }

    /// Build the catalog query request.
    pub fn catalog_request(&self) -> RequestBuilder {
        let url = format!("{}/v{}/data/query/{}", self.base_url, self.api_version, self.dataset);
        debug!(%url, "building catalog request");

        self.http
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .query(&[("query", FOOD_CATALOG_QUERY)])
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, ContentError> {
        let response = self.catalog_request().send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ContentError::Status {
                status,
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }
        let items = decode_catalog(&body)?;
        debug!(count = items.len(), "catalog fetched");
        Ok(items)
    }
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
fn validate_base_url(base: &str) -> Result<(), ContentError> {
    let parsed_base_url =
        Url::parse(base).map_err(|error| ContentError::Config(format!("invalid content base URL '{base}': {error}")))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| ContentError::Config("content base URL must include a host".into()))?;

    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if parsed_base_url.scheme() != "https" {
        return Err(ContentError::Config(format!(
            "content base URL must use https for non-localhost hosts; got '{}://'",
            parsed_base_url.scheme()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(project_id: Option<&str>, base_url: Option<&str>) -> ContentConfig {
        ContentConfig {
            project_id: project_id.map(str::to_string),
            base_url: base_url.map(str::to_string),
            ..ContentConfig::default()
        }
    }

    #[test]
    fn derives_base_url_from_project_id() {
        temp_env::with_var_unset(TOKEN_ENV, || {
            let client = SanityClient::new_from_config(&content(Some("abc123"), None)).expect("client");
            assert_eq!(client.base_url, "https://abc123.api.sanity.io");
        });
    }

    #[test]
    fn catalog_request_targets_query_endpoint() {
        temp_env::with_var_unset(TOKEN_ENV, || {
            let mut config = content(Some("abc123"), None);
            config.api_version = "v2023-10-01".into();
            let client = SanityClient::new_from_config(&config).expect("client");
            let request = client.catalog_request().build().expect("request");

            let url = request.url();
            assert_eq!(url.path(), "/v2023-10-01/data/query/production");
            let (key, value) = url.query_pairs().next().expect("query parameter");
            assert_eq!(key, "query");
            assert_eq!(value, FOOD_CATALOG_QUERY);
            assert!(request.headers().get(header::AUTHORIZATION).is_none());
        });
    }

    #[test]
    fn token_becomes_bearer_header() {
        temp_env::with_var(TOKEN_ENV, Some("sk-test"), || {
            let client = SanityClient::new_from_config(&content(None, Some("http://localhost:3333/"))).expect("client");
            assert_eq!(client.base_url, "http://localhost:3333");
            let request = client.catalog_request().build().expect("request");
            let authorization = request.headers().get(header::AUTHORIZATION).expect("authorization");
            assert_eq!(authorization, "Bearer sk-test");
        });
    }

    #[test]
    fn requires_a_project_or_base_url() {
        let error = SanityClient::new_from_config(&content(None, None)).expect_err("unconfigured");
        assert!(matches!(error, ContentError::Config(_)));
    }

    #[test]
    fn rejects_plain_http_for_remote_hosts() {
        assert!(validate_base_url("http://content.example.com").is_err());
        assert!(validate_base_url("https://content.example.com").is_ok());
        assert!(validate_base_url("http://127.0.0.1:8080").is_ok());
        assert!(validate_base_url("not a url").is_err());
    }
}
