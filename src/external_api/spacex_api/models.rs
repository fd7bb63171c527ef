pub mod launch;
pub mod launchpad;
pub mod payload;
pub mod rocket;
