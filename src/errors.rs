use crate::external_api::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Launch with ID == {0} not found")]
    LaunchNotFound(String),
    #[error("The launch ID must not be empty")]
    EmptyLaunchId,
    #[error("Failed to retrieve the user's directories")]
    NotFoundUserDir,
    #[error("The string entered must be a URL")]
    InvalidUrl,
    #[error("Couldn't parse the config: {0}")]
    InvalidConfig(String),
    #[error("The number of concurrent fetches must be greater than zero")]
    ConcurrencyMoreThenZero,
    #[error("The request timeout must be greater than zero")]
    TimeoutMoreThenZero,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
