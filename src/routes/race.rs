use log::error;
use rocket::get;
use rocket::http::Status;
use rocket::State;
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::macros::remote_error_handeler::remote_handle_get_error_http;
use crate::modules::guards::SessionUser;
use crate::modules::models::driver::Driver;
use crate::modules::models::race::Race;
use crate::modules::models::race_result::RaceResult;
use crate::modules::models::track::Track;
use crate::modules::store_api::StoreClient;

#[derive(Serialize, Clone)]
struct RaceRow {
    race: Race,
    track: Option<Track>,
}

#[derive(Serialize)]
struct ScheduleContext {
    races: Vec<RaceRow>,
}

/// Race schedule, every race joined with its track in memory and listed
/// in calendar order.
#[get("/")]
pub async fn list(_user: SessionUser, store: &State<StoreClient>) -> Result<Template, Status> {
    let mut races = remote_handle_get_error_http!(
        Race::get_all(store).await,
        "routes/race:list",
        "races"
    );
    let tracks = remote_handle_get_error_http!(
        Track::get_all(store).await,
        "routes/race:list",
        "tracks"
    );

    Race::sort_by_date(&mut races);

    let rows = races
        .into_iter()
        .map(|race| {
            let track = Track::find_by_id(&tracks, &race.track_id).cloned();
            RaceRow { race, track }
        })
        .collect();

    Ok(Template::render("races", ScheduleContext { races: rows }))
}

#[derive(Serialize, Clone)]
struct ResultRow {
    result: RaceResult,
    driver: Option<Driver>,
}

#[derive(Serialize, Clone)]
struct RaceWithResults {
    race: Race,
    track: Option<Track>,
    results: Vec<ResultRow>,
    winner: Option<Driver>,
}

#[derive(Serialize)]
struct ResultsContext {
    races: Vec<RaceWithResults>,
}

/// Results per race. Four independent fetches combined client side: the
/// store does no joins.
#[get("/results")]
pub async fn results(_user: SessionUser, store: &State<StoreClient>) -> Result<Template, Status> {
    let mut races = remote_handle_get_error_http!(
        Race::get_all(store).await,
        "routes/race:results",
        "races"
    );
    let results = remote_handle_get_error_http!(
        RaceResult::get_all(store).await,
        "routes/race:results",
        "results"
    );
    let drivers = remote_handle_get_error_http!(
        Driver::get_all(store).await,
        "routes/race:results",
        "drivers"
    );
    let tracks = remote_handle_get_error_http!(
        Track::get_all(store).await,
        "routes/race:results",
        "tracks"
    );

    Race::sort_by_date(&mut races);

    let combined = races
        .into_iter()
        .map(|race| {
            let track = Track::find_by_id(&tracks, &race.track_id).cloned();

            let mut race_results: Vec<ResultRow> = RaceResult::for_race(&results, &race.race_id)
                .into_iter()
                .map(|result| ResultRow {
                    result: result.clone(),
                    driver: Driver::find_by_id(&drivers, &result.driver_id).cloned(),
                })
                .collect();
            race_results.sort_by_key(|row| row.result.position);

            let winner = race_results
                .iter()
                .find(|row| row.result.position == 1)
                .and_then(|row| row.driver.clone());

            RaceWithResults {
                race,
                track,
                results: race_results,
                winner,
            }
        })
        .collect();

    Ok(Template::render("race_results", ResultsContext { races: combined }))
}
