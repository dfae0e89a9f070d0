use log::error;
use rocket::form::Form;
use rocket::http::Status;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, FromForm, State};
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::macros::remote_error_handeler::remote_handle_get_error_http;
use crate::modules::guards::AdminUser;
use crate::modules::helpers::validation::ValidationHelpers;
use crate::modules::models::driver::Driver;
use crate::modules::models::race::{Race, RaceInput};
use crate::modules::models::track::Track;
use crate::modules::store_api::StoreClient;

#[derive(Serialize)]
struct RaceFormContext {
    races: Vec<Race>,
    tracks: Vec<Track>,
    drivers: Vec<Driver>,
    editing: Option<Race>,
    message: Option<String>,
}

#[get("/races?<edit>")]
pub async fn form(
    _admin: AdminUser,
    store: &State<StoreClient>,
    edit: Option<String>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, Status> {
    let mut races = remote_handle_get_error_http!(
        Race::get_all(store).await,
        "routes/admin/race:form",
        "races"
    );
    let tracks = remote_handle_get_error_http!(
        Track::get_all(store).await,
        "routes/admin/race:form",
        "tracks"
    );
    let drivers = remote_handle_get_error_http!(
        Driver::get_all(store).await,
        "routes/admin/race:form",
        "drivers"
    );

    Race::sort_by_date(&mut races);
    let editing = edit.and_then(|id| Race::find_by_id(&races, &id).cloned());

    Ok(Template::render(
        "admin/race_form",
        RaceFormContext {
            races,
            tracks,
            drivers,
            editing,
            message: flash.map(|f| f.message().to_string()),
        },
    ))
}

#[derive(FromForm)]
pub struct RaceFormData {
    pub race_id: String,
    pub race_name: String,
    pub track_id: String,
    pub race_date: String,
    pub laps: String,
    pub winner_driver_id: String,
}

#[post("/races/save", data = "<form>")]
pub async fn save(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<RaceFormData>,
) -> Flash<Redirect> {
    if form.race_name.trim().is_empty()
        || form.track_id.trim().is_empty()
        || form.race_date.trim().is_empty()
        || form.laps.trim().is_empty()
    {
        return Flash::error(
            Redirect::to("/admin/races"),
            "Please fill in all required fields",
        );
    }
    if !ValidationHelpers::is_valid_date(form.race_date.trim()) {
        return Flash::error(
            Redirect::to("/admin/races"),
            "Race date must be a date in the form YYYY-MM-DD",
        );
    }

    let input = RaceInput {
        race_name: form.race_name.trim().to_string(),
        track_id: form.track_id.clone(),
        race_date: form.race_date.trim().to_string(),
        laps: form.laps.trim().parse().unwrap_or(0),
        winner_driver_id: ValidationHelpers::non_empty(&form.winner_driver_id),
    };

    let saved = if form.race_id.is_empty() {
        Race::create(store, &input).await.map(|()| "Race added")
    } else {
        Race::update(store, &form.race_id, &input)
            .await
            .map(|()| "Race updated")
    };

    match saved {
        Ok(message) => Flash::success(Redirect::to("/admin/races"), message),
        Err(error) => {
            error!(target:"routes/admin/race:save", "Error saving race. (error: {})", error);
            Flash::error(Redirect::to("/admin/races"), "Could not save the race")
        }
    }
}

#[derive(FromForm)]
pub struct DeleteRaceFormData {
    pub race_id: String,
}

#[post("/races/delete", data = "<form>")]
pub async fn delete(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<DeleteRaceFormData>,
) -> Flash<Redirect> {
    if form.race_id.is_empty() {
        return Flash::error(Redirect::to("/admin/races"), "Please select a race to delete");
    }

    match Race::delete(store, &form.race_id).await {
        Ok(()) => Flash::success(Redirect::to("/admin/races"), "Race deleted"),
        Err(error) => {
            error!(target:"routes/admin/race:delete", "Error deleting race. (error: {})", error);
            Flash::error(Redirect::to("/admin/races"), "Could not delete the race")
        }
    }
}
