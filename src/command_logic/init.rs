use crate::config::Config;
use crate::constants::Message;
use crate::errors::AppError;
use std::path::Path;

/// Create the default config file if there is none yet
pub fn init_config(path_to_config: &Path) -> Result<String, AppError> {
    let path = path_to_config.display().to_string();
    if Config::save_default(path_to_config)? {
        Ok(Message::ConfigCreated(path).to_formatted_string())
    } else {
        Ok(Message::ConfigAlreadyExists(path).to_formatted_string())
    }
}
