pub const CONFIG_DIR: &str = ".config/launchdeck";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_BASE_API_URL: &str = "https://api.spacexdata.com/v4";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 8;
pub const ENV_BASE_API_URL: &str = "LAUNCHDECK_BASE_API_URL";
pub const UNKNOWN_ROCKET: &str = "Unknown Rocket";

#[cfg(test)]
pub const CARGO_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Standard message
#[derive(Debug)]
pub enum Message {
    NoLaunches(String),
    NoMissionPatch,
    ConfigCreated(String),
    ConfigAlreadyExists(String),
}

impl Message {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::NoLaunches(filter) => format!("No launches match the filter: {}", filter),
            Message::NoMissionPatch => "No Mission Patch".to_string(),
            Message::ConfigCreated(path) => format!("Config created: {}", path),
            Message::ConfigAlreadyExists(path) => format!("Config already exists: {}", path),
        }
    }
}
