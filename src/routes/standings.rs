use log::error;
use rocket::get;
use rocket::http::Status;
use rocket::State;
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::macros::remote_error_handeler::remote_handle_get_error_http;
use crate::modules::guards::SessionUser;
use crate::modules::helpers::standings::StandingsHelpers;
use crate::modules::models::driver::Driver;
use crate::modules::models::race_result::RaceResult;
use crate::modules::models::team::Team;
use crate::modules::store_api::StoreClient;
use crate::{DriverStanding, TeamStanding};

#[derive(Serialize)]
struct DriverStandingsContext {
    standings: Vec<DriverStanding>,
}

#[get("/drivers")]
pub async fn drivers(_user: SessionUser, store: &State<StoreClient>) -> Result<Template, Status> {
    let results = remote_handle_get_error_http!(
        RaceResult::get_all(store).await,
        "routes/standings:drivers",
        "results"
    );
    let drivers = remote_handle_get_error_http!(
        Driver::get_all(store).await,
        "routes/standings:drivers",
        "drivers"
    );
    let teams = remote_handle_get_error_http!(
        Team::get_all(store).await,
        "routes/standings:drivers",
        "teams"
    );

    let standings = StandingsHelpers::driver_standings(&results, &drivers, &teams);

    Ok(Template::render(
        "driver_standings",
        DriverStandingsContext { standings },
    ))
}

#[derive(Serialize)]
struct TeamStandingsContext {
    standings: Vec<TeamStanding>,
}

#[get("/teams")]
pub async fn teams(_user: SessionUser, store: &State<StoreClient>) -> Result<Template, Status> {
    let results = remote_handle_get_error_http!(
        RaceResult::get_all(store).await,
        "routes/standings:teams",
        "results"
    );
    let drivers = remote_handle_get_error_http!(
        Driver::get_all(store).await,
        "routes/standings:teams",
        "drivers"
    );
    let teams = remote_handle_get_error_http!(
        Team::get_all(store).await,
        "routes/standings:teams",
        "teams"
    );

    let standings = StandingsHelpers::team_standings(&results, &drivers, &teams);

    Ok(Template::render(
        "team_standings",
        TeamStandingsContext { standings },
    ))
}
