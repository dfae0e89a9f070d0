use log::error;
use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

use crate::macros::remote_error_handeler::remote_handle_get_error_http;
use crate::modules::models::race::Race;
use crate::modules::models::race_result::RaceResult;
use crate::modules::store_api::StoreClient;

#[get("/races")]
pub async fn get_all(store: &State<StoreClient>) -> Result<Json<Vec<Race>>, Status> {
    let mut races = remote_handle_get_error_http!(
        Race::get_all(store).await,
        "routes/api/race:get_all",
        "races"
    );
    Race::sort_by_date(&mut races);

    Ok(Json(races))
}

#[get("/races/<race_id>/results")]
pub async fn get_results(
    store: &State<StoreClient>,
    race_id: String,
) -> Result<Json<Vec<RaceResult>>, Status> {
    let mut results = remote_handle_get_error_http!(
        RaceResult::get_by_race(store, &race_id).await,
        "routes/api/race:get_results",
        "results"
    );
    results.sort_by_key(|result| result.position);

    Ok(Json(results))
}
