pub mod spacex_api;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode, Url,
};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const APPLICATION_JSON: &str = "application/json";

/// Any failure while fetching a resource from the API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Api error {0}: {1}")]
    Api(StatusCode, String),
    #[error("Deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("URL parse error: {0}")]
    Parse(String),
}

/// Basic api client
#[derive(Debug)]
pub struct BaseApiClient {
    client: Client,
    pub base_url: Url,
}

impl BaseApiClient {
    /// Endpoints are relative, so the base url must end with `/`,
    /// otherwise `Url::join` drops its last path segment (`/v4`)
    fn normalize_base_url(base_url: &str) -> Result<Url, FetchError> {
        let with_slash = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Url::parse(&with_slash).map_err(|e| FetchError::Parse(e.to_string()))
    }

    fn build_url(&self, endpoint: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Api(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .default_headers(Self::get_default_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    pub async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let url = self.build_url(endpoint)?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[derive(serde::Deserialize, Debug)]
    struct Named {
        name: String,
    }

    #[rstest]
    #[case("https://api.spacexdata.com/v4", "launches", "https://api.spacexdata.com/v4/launches")]
    #[case("https://api.spacexdata.com/v4/", "/launches", "https://api.spacexdata.com/v4/launches")]
    #[case("http://127.0.0.1:1234", "rockets/5e9d0d95eda69955f709d1eb", "http://127.0.0.1:1234/rockets/5e9d0d95eda69955f709d1eb")]
    fn test_build_url(#[case] base_url: &str, #[case] endpoint: &str, #[case] exp_url: &str) {
        let client = BaseApiClient::new(base_url, TIMEOUT).unwrap();
        let new_url = client.build_url(endpoint).unwrap().to_string();
        assert_eq!(exp_url, new_url, "Expected URL == {exp_url}. Got == {new_url}");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = BaseApiClient::new("input", TIMEOUT);
        assert!(matches!(result, Err(FetchError::Parse(_))));
        assert!(result.unwrap_err().to_string().starts_with("URL parse error: "));
    }

    #[test]
    fn test_valid_headers() {
        let default_headers = BaseApiClient::get_default_headers();
        assert_eq!(default_headers[ACCEPT], "application/json");
    }

    #[tokio::test]
    async fn test_get_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rockets/falcon9")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "Falcon 9", "height": {"meters": 70}}"#)
            .create_async()
            .await;

        let client = BaseApiClient::new(&server.url(), TIMEOUT).unwrap();
        let rocket: Named = client.get("rockets/falcon9").await.unwrap();

        assert_eq!(rocket.name, "Falcon 9");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_request_not_found() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rockets/unknown")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let client = BaseApiClient::new(&server.url(), TIMEOUT).unwrap();
        let result = client.get::<Named>("rockets/unknown").await;

        match result {
            Err(FetchError::Api(status, body)) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "Not Found");
            }
            other => panic!("Expected FetchError::Api, got {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_request_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/launches")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = BaseApiClient::new(&server.url(), TIMEOUT).unwrap();
        let result = client.get::<Vec<Named>>("launches").await;

        assert!(matches!(result, Err(FetchError::Serde(_))));
        assert!(result.unwrap_err().to_string().starts_with("Deserialization error: "));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_reqwest_error() {
        let req_client = reqwest::Client::builder().build().unwrap();
        let err_reqwest = req_client.get("https://").send().await.unwrap_err();

        let fetch_error = FetchError::from(err_reqwest);

        assert!(matches!(fetch_error, FetchError::Reqwest(_)));
        assert!(fetch_error.to_string().starts_with("Network error: "));
    }

    #[test]
    fn test_api_error_message() {
        let fetch_error = FetchError::Api(StatusCode::INTERNAL_SERVER_ERROR, String::from("boom"));
        assert_eq!(fetch_error.to_string(), "Api error 500 Internal Server Error: boom");
    }
}
