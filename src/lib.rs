pub mod assembler;
pub mod cli_app;
pub mod command_logic;
pub mod config;
pub mod constants;
pub mod errors;
pub mod external_api;
pub mod view_state;

pub use assembler::launch_detail::{DetailViewModel, LaunchDetailAssembler};
pub use assembler::launch_list::{filter_launches, LaunchFilter, LaunchList, LaunchListAssembler, RocketIndex};
pub use errors::AppError;
pub use external_api::FetchError;
