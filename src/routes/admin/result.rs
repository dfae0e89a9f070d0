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
use crate::modules::helpers::standings::StandingsHelpers;
use crate::modules::helpers::validation::ValidationHelpers;
use crate::modules::models::driver::Driver;
use crate::modules::models::race::Race;
use crate::modules::models::race_result::{RaceResult, RaceResultInput};
use crate::modules::store_api::StoreClient;

#[derive(Serialize, Clone)]
struct ResultRow {
    result: RaceResult,
    // "race - driver (position, points)", built here so the template
    // does not have to re-join the lists
    label: String,
}

#[derive(Serialize)]
struct ResultFormContext {
    results: Vec<ResultRow>,
    races: Vec<Race>,
    drivers: Vec<Driver>,
    editing: Option<RaceResult>,
    message: Option<String>,
}

fn result_label(result: &RaceResult, races: &[Race], drivers: &[Driver]) -> String {
    let race_name = Race::find_by_id(races, &result.race_id)
        .map(|race| race.race_name.clone())
        .unwrap_or_else(|| "Unknown race".to_string());
    let driver_name = Driver::find_by_id(drivers, &result.driver_id)
        .map(|driver| driver.full_name())
        .unwrap_or_else(|| "Unknown driver".to_string());

    format!(
        "{} - {} (position: {}, points: {})",
        race_name, driver_name, result.position, result.points
    )
}

#[get("/results?<edit>")]
pub async fn form(
    _admin: AdminUser,
    store: &State<StoreClient>,
    edit: Option<String>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, Status> {
    let results = remote_handle_get_error_http!(
        RaceResult::get_all(store).await,
        "routes/admin/result:form",
        "results"
    );
    let races = remote_handle_get_error_http!(
        Race::get_all(store).await,
        "routes/admin/result:form",
        "races"
    );
    let drivers = remote_handle_get_error_http!(
        Driver::get_all(store).await,
        "routes/admin/result:form",
        "drivers"
    );

    let editing = edit.and_then(|id| RaceResult::find_by_id(&results, &id).cloned());

    let rows = results
        .iter()
        .map(|result| ResultRow {
            label: result_label(result, &races, &drivers),
            result: result.clone(),
        })
        .collect();

    Ok(Template::render(
        "admin/result_form",
        ResultFormContext {
            results: rows,
            races,
            drivers,
            editing,
            message: flash.map(|f| f.message().to_string()),
        },
    ))
}

#[derive(FromForm)]
pub struct ResultFormData {
    pub result_id: String,
    pub race_id: String,
    pub driver_id: String,
    pub position: String,
}

#[post("/results/save", data = "<form>")]
pub async fn save(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<ResultFormData>,
) -> Result<Flash<Redirect>, Status> {
    // the duplicate checks run against the current remote result list
    let results = remote_handle_get_error_http!(
        RaceResult::get_all(store).await,
        "routes/admin/result:save",
        "results"
    );

    let editing = ValidationHelpers::non_empty(&form.result_id);
    let position = match ValidationHelpers::validate_result_submission(
        &results,
        &form.race_id,
        &form.driver_id,
        &form.position,
        editing.as_deref(),
    ) {
        Ok(position) => position,
        Err(error) => {
            return Ok(Flash::error(Redirect::to("/admin/results"), error.to_string()))
        }
    };

    let input = RaceResultInput {
        race_id: form.race_id.clone(),
        driver_id: form.driver_id.clone(),
        position,
        points: StandingsHelpers::points_for_position(position),
    };

    let saved = match &editing {
        None => RaceResult::create(store, &input).await.map(|()| "Result added"),
        Some(result_id) => RaceResult::update(store, result_id, &input)
            .await
            .map(|()| "Result updated"),
    };

    match saved {
        Ok(message) => Ok(Flash::success(Redirect::to("/admin/results"), message)),
        Err(error) => {
            error!(target:"routes/admin/result:save", "Error saving result. (error: {})", error);
            Ok(Flash::error(
                Redirect::to("/admin/results"),
                "Could not save the result",
            ))
        }
    }
}

#[derive(FromForm)]
pub struct DeleteResultFormData {
    pub result_id: String,
}

#[post("/results/delete", data = "<form>")]
pub async fn delete(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<DeleteResultFormData>,
) -> Flash<Redirect> {
    if form.result_id.is_empty() {
        return Flash::error(
            Redirect::to("/admin/results"),
            "Please select a result to delete",
        );
    }

    match RaceResult::delete(store, &form.result_id).await {
        Ok(()) => Flash::success(Redirect::to("/admin/results"), "Result deleted"),
        Err(error) => {
            error!(target:"routes/admin/result:delete", "Error deleting result. (error: {})", error);
            Flash::error(Redirect::to("/admin/results"), "Could not delete the result")
        }
    }
}
