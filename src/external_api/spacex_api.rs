pub mod models;

use super::{BaseApiClient, FetchError};
use models::launch::Launch;
use models::launchpad::Launchpad;
use models::payload::Payload;
use models::rocket::Rocket;
use std::time::Duration;

/// Read-only client for the SpaceX v4 REST API
#[derive(Debug)]
pub struct SpacexApi {
    pub client: BaseApiClient,
}

impl SpacexApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            client: BaseApiClient::new(base_url, timeout)?,
        })
    }

    pub async fn get_all_launches(&self) -> Result<Vec<Launch>, FetchError> {
        self.client.get::<Vec<Launch>>("launches").await
    }

    pub async fn get_all_rockets(&self) -> Result<Vec<Rocket>, FetchError> {
        self.client.get::<Vec<Rocket>>("rockets").await
    }

    pub async fn get_rocket_by_id(&self, rocket_id: &str) -> Result<Rocket, FetchError> {
        self.client.get::<Rocket>(&format!("rockets/{rocket_id}")).await
    }

    pub async fn get_payload_by_id(&self, payload_id: &str) -> Result<Payload, FetchError> {
        self.client.get::<Payload>(&format!("payloads/{payload_id}")).await
    }

    pub async fn get_launchpad_by_id(&self, launchpad_id: &str) -> Result<Launchpad, FetchError> {
        self.client.get::<Launchpad>(&format!("launchpads/{launchpad_id}")).await
    }
}

#[cfg(test)]
impl SpacexApi {
    pub fn mock(server_url: &str) -> Self {
        Self::new(server_url, Duration::from_secs(5)).unwrap()
    }

    async fn mock_json<T: serde::Serialize>(
        server: &mut mockito::ServerGuard,
        path: &str,
        body: &T,
    ) -> mockito::Mock {
        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(body).unwrap())
            .create_async()
            .await
    }

    pub async fn mock_get_all_launches(server: &mut mockito::ServerGuard, launches: &[Launch]) -> mockito::Mock {
        Self::mock_json(server, "/launches", &launches).await
    }

    pub async fn mock_get_all_rockets(server: &mut mockito::ServerGuard, rockets: &[Rocket]) -> mockito::Mock {
        Self::mock_json(server, "/rockets", &rockets).await
    }

    pub async fn mock_get_rocket_by_id(server: &mut mockito::ServerGuard, rocket: &Rocket) -> mockito::Mock {
        Self::mock_json(server, &format!("/rockets/{}", rocket.id), rocket).await
    }

    pub async fn mock_get_payload_by_id(server: &mut mockito::ServerGuard, payload: &Payload) -> mockito::Mock {
        Self::mock_json(server, &format!("/payloads/{}", payload.id), payload).await
    }

    pub async fn mock_get_launchpad_by_id(server: &mut mockito::ServerGuard, launchpad: &Launchpad) -> mockito::Mock {
        Self::mock_json(server, &format!("/launchpads/{}", launchpad.id), launchpad).await
    }

    pub async fn mock_error(server: &mut mockito::ServerGuard, path: &str, status: usize) -> mockito::Mock {
        server
            .mock("GET", path)
            .with_status(status)
            .create_async()
            .await
    }
}
