use crate::external_api::spacex_api::models::launch::Launch;
use crate::external_api::spacex_api::models::launchpad::Launchpad;
use crate::external_api::spacex_api::models::payload::Payload;
use crate::external_api::spacex_api::models::rocket::Rocket;
use crate::external_api::spacex_api::SpacexApi;
use crate::external_api::FetchError;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::info;

/// Everything the launch detail view shows
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    pub launch: Launch,
    pub rocket: Rocket,
    /// Same order as `launch.payloads`
    pub payloads: Vec<Payload>,
    pub launchpad: Launchpad,
}

impl DetailViewModel {
    pub fn formatted_date(&self) -> String {
        self.launch.detail_date()
    }

    pub fn success_label(&self) -> &'static str {
        self.launch.success_label()
    }

    pub fn mission_patch(&self) -> Option<&str> {
        self.launch.mission_patch()
    }
}

pub struct LaunchDetailAssembler<'a> {
    spacex_api: &'a SpacexApi,
    max_concurrent_fetches: usize,
}

impl<'a> LaunchDetailAssembler<'a> {
    pub fn new(spacex_api: &'a SpacexApi, max_concurrent_fetches: usize) -> Self {
        Self {
            spacex_api,
            max_concurrent_fetches: max_concurrent_fetches.max(1),
        }
    }

    /// Rocket, payloads and launchpad are fetched concurrently.
    /// Any failed request fails the whole detail
    pub async fn load(&self, launch: &Launch) -> Result<DetailViewModel, FetchError> {
        let (rocket, payloads, launchpad) = tokio::try_join!(
            self.spacex_api.get_rocket_by_id(&launch.rocket),
            self.fetch_payloads(&launch.payloads),
            self.spacex_api.get_launchpad_by_id(&launch.launchpad)
        )?;
        info!(launch_id = %launch.id, payloads = payloads.len(), "launch detail loaded");
        Ok(DetailViewModel {
            launch: launch.clone(),
            rocket,
            payloads,
            launchpad,
        })
    }

    /// `buffered` yields results in input order, whatever order the responses arrive in
    async fn fetch_payloads(&self, payload_ids: &[String]) -> Result<Vec<Payload>, FetchError> {
        stream::iter(payload_ids)
            .map(|payload_id| self.spacex_api.get_payload_by_id(payload_id))
            .buffered(self.max_concurrent_fetches)
            .try_collect()
            .await
    }
}
