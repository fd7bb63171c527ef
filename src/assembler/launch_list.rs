use crate::constants::UNKNOWN_ROCKET;
use crate::external_api::spacex_api::models::launch::Launch;
use crate::external_api::spacex_api::models::rocket::Rocket;
use crate::external_api::spacex_api::SpacexApi;
use crate::external_api::FetchError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// Rocket id -> rocket name
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RocketIndex(HashMap<String, String>);

impl RocketIndex {
    /// Duplicate ids: the last rocket wins
    pub fn from_rockets(rockets: &[Rocket]) -> Self {
        Self(
            rockets
                .iter()
                .map(|rocket| (rocket.id.clone(), rocket.name.clone()))
                .collect(),
        )
    }

    pub fn name_of(&self, rocket_id: &str) -> &str {
        self.0.get(rocket_id).map_or(UNKNOWN_ROCKET, String::as_str)
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LaunchFilter {
    #[default]
    All,
    Past,
    Upcoming,
}

impl LaunchFilter {
    /// A launch exactly at `now` counts as upcoming
    pub fn matches(self, launch: &Launch, now: DateTime<Utc>) -> bool {
        match self {
            LaunchFilter::All => true,
            LaunchFilter::Past => launch.date_utc < now,
            LaunchFilter::Upcoming => launch.date_utc >= now,
        }
    }
}

impl fmt::Display for LaunchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchFilter::All => write!(f, "all"),
            LaunchFilter::Past => write!(f, "past"),
            LaunchFilter::Upcoming => write!(f, "upcoming"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchList {
    /// Newest first
    pub launches: Vec<Launch>,
    pub rocket_index: RocketIndex,
}

impl LaunchList {
    pub fn find(&self, launch_id: &str) -> Option<&Launch> {
        self.launches.iter().find(|launch| launch.id == launch_id)
    }
}

/// Stable, so launches with equal dates keep their input order
pub fn sort_by_date_desc(launches: &mut [Launch]) {
    launches.sort_by(|a, b| b.date_utc.cmp(&a.date_utc));
}

pub fn filter_launches(launches: &[Launch], mode: LaunchFilter, now: DateTime<Utc>) -> Vec<&Launch> {
    launches.iter().filter(|launch| mode.matches(launch, now)).collect()
}

pub struct LaunchListAssembler<'a> {
    spacex_api: &'a SpacexApi,
}

impl<'a> LaunchListAssembler<'a> {
    pub fn new(spacex_api: &'a SpacexApi) -> Self {
        Self { spacex_api }
    }

    /// Fetch launches and rockets, newest launch first. Nothing is cached
    pub async fn load(&self) -> Result<LaunchList, FetchError> {
        let (mut launches, rockets) = tokio::try_join!(
            self.spacex_api.get_all_launches(),
            self.spacex_api.get_all_rockets()
        )?;
        sort_by_date_desc(&mut launches);
        let rocket_index = RocketIndex::from_rockets(&rockets);
        info!(launches = launches.len(), rockets = rockets.len(), "launch list loaded");
        Ok(LaunchList {
            launches,
            rocket_index,
        })
    }
}
