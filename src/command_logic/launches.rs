use crate::assembler::launch_list::{LaunchFilter, LaunchListAssembler, RocketIndex};
use crate::constants::Message;
use crate::errors::AppError;
use crate::external_api::spacex_api::models::launch::Launch;
use crate::external_api::spacex_api::SpacexApi;
use crate::view_state::{drive_load, LaunchListView, ListEvent, ViewState};
use chrono::{DateTime, Utc};

/// One entry of the launch list
pub fn render_launch_row(launch: &Launch, rocket_index: &RocketIndex) -> String {
    format!(
        "{}\n  Date: {}\n  Rocket: {}\n  Status: {}",
        launch.name,
        launch.list_date(),
        rocket_index.name_of(&launch.rocket),
        launch.success_label()
    )
}

fn render_launch_list(view: &LaunchListView, now: DateTime<Utc>) -> String {
    let Some(launch_list) = view.state.data() else {
        return String::new();
    };
    let rows: Vec<String> = view
        .visible_launches(now)
        .into_iter()
        .map(|launch| render_launch_row(launch, &launch_list.rocket_index))
        .collect();
    if rows.is_empty() {
        return Message::NoLaunches(view.filter.to_string()).to_formatted_string();
    }
    rows.join("\n\n")
}

/// Load the launch list and render the launches matching `filter`.
/// `clock` is read after the load finishes.
pub async fn list_launches<C>(spacex_api: &SpacexApi, filter: LaunchFilter, clock: C) -> Result<String, AppError>
where
    C: Fn() -> DateTime<Utc>,
{
    let assembler = LaunchListAssembler::new(spacex_api);
    let view = LaunchListView {
        state: drive_load(ViewState::Idle, "launch_list", assembler.load()).await,
        filter: LaunchFilter::default(),
    }
    .apply(ListEvent::FilterChanged(filter));

    let rendered = render_launch_list(&view, clock());
    view.state.into_result()?;
    Ok(rendered)
}
