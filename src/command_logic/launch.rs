use crate::assembler::launch_detail::{DetailViewModel, LaunchDetailAssembler};
use crate::assembler::launch_list::LaunchListAssembler;
use crate::constants::Message;
use crate::errors::AppError;
use crate::external_api::spacex_api::SpacexApi;
use crate::view_state::{drive_load, LaunchDetailView, ViewState};

pub fn render_launch_detail(detail: &DetailViewModel) -> String {
    let mut lines = vec![
        detail.launch.name.clone(),
        format!("Date: {}", detail.formatted_date()),
        format!("Status: {}", detail.success_label()),
        format!("Rocket: {}", detail.rocket.name),
        format!("Launch Site: {}", detail.launchpad.name),
    ];
    if let Some(location) = detail.launchpad.location() {
        lines.push(format!("Location: {location}"));
    }
    lines.push(match detail.mission_patch() {
        Some(url) => format!("Mission Patch: {url}"),
        None => Message::NoMissionPatch.to_formatted_string(),
    });
    lines.push("Payloads:".to_string());
    for payload in &detail.payloads {
        lines.push(format!("  ID: {}", payload.id));
        if let Some(name) = &payload.name {
            lines.push(format!("  Name: {name}"));
        }
        if let Some(payload_type) = &payload.payload_type {
            lines.push(format!("  Type: {payload_type}"));
        }
    }
    lines.join("\n")
}

/// Load the launch list, pick the launch by id and render its details.
/// The picked record is handed over as is, it is not fetched again
pub async fn show_launch_detail(
    spacex_api: &SpacexApi,
    launch_id: &str,
    max_concurrent_fetches: usize,
) -> Result<String, AppError> {
    let not_found = || AppError::LaunchNotFound(launch_id.to_string());

    let list_state = drive_load(
        ViewState::Idle,
        "launch_list",
        LaunchListAssembler::new(spacex_api).load(),
    )
    .await;
    let launch_list = list_state.into_result()?.ok_or_else(not_found)?;
    let launch = launch_list.find(launch_id).ok_or_else(not_found)?;

    let assembler = LaunchDetailAssembler::new(spacex_api, max_concurrent_fetches);
    let detail_view: LaunchDetailView =
        drive_load(ViewState::Idle, "launch_detail", assembler.load(launch)).await;
    let detail = detail_view.into_result()?.ok_or_else(not_found)?;
    Ok(render_launch_detail(&detail))
}
