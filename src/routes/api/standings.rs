use log::error;
use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

use crate::macros::remote_error_handeler::remote_handle_get_error_http;
use crate::modules::helpers::standings::StandingsHelpers;
use crate::modules::models::driver::Driver;
use crate::modules::models::race_result::RaceResult;
use crate::modules::models::team::Team;
use crate::modules::store_api::StoreClient;
use crate::{DriverStanding, TeamStanding};

#[get("/standings/drivers")]
pub async fn drivers(store: &State<StoreClient>) -> Result<Json<Vec<DriverStanding>>, Status> {
    let results = remote_handle_get_error_http!(
        RaceResult::get_all(store).await,
        "routes/api/standings:drivers",
        "results"
    );
    let drivers = remote_handle_get_error_http!(
        Driver::get_all(store).await,
        "routes/api/standings:drivers",
        "drivers"
    );
    let teams = remote_handle_get_error_http!(
        Team::get_all(store).await,
        "routes/api/standings:drivers",
        "teams"
    );

    Ok(Json(StandingsHelpers::driver_standings(
        &results, &drivers, &teams,
    )))
}

#[get("/standings/teams")]
pub async fn teams(store: &State<StoreClient>) -> Result<Json<Vec<TeamStanding>>, Status> {
    let results = remote_handle_get_error_http!(
        RaceResult::get_all(store).await,
        "routes/api/standings:teams",
        "results"
    );
    let drivers = remote_handle_get_error_http!(
        Driver::get_all(store).await,
        "routes/api/standings:teams",
        "drivers"
    );
    let teams = remote_handle_get_error_http!(
        Team::get_all(store).await,
        "routes/api/standings:teams",
        "teams"
    );

    Ok(Json(StandingsHelpers::team_standings(
        &results, &drivers, &teams,
    )))
}
