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
use crate::modules::models::driver::{Driver, DriverInput};
use crate::modules::models::team::Team;
use crate::modules::store_api::StoreClient;

#[derive(Serialize)]
struct DriverFormContext {
    drivers: Vec<Driver>,
    teams: Vec<Team>,
    editing: Option<Driver>,
    message: Option<String>,
}

#[get("/drivers?<edit>")]
pub async fn form(
    _admin: AdminUser,
    store: &State<StoreClient>,
    edit: Option<String>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, Status> {
    let drivers = remote_handle_get_error_http!(
        Driver::get_all(store).await,
        "routes/admin/driver:form",
        "drivers"
    );
    let teams = remote_handle_get_error_http!(
        Team::get_all(store).await,
        "routes/admin/driver:form",
        "teams"
    );

    let editing = edit.and_then(|id| Driver::find_by_id(&drivers, &id).cloned());

    Ok(Template::render(
        "admin/driver_form",
        DriverFormContext {
            drivers,
            teams,
            editing,
            message: flash.map(|f| f.message().to_string()),
        },
    ))
}

#[derive(FromForm)]
pub struct DriverFormData {
    pub driver_id: String,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub team_id: String,
}

#[post("/drivers/save", data = "<form>")]
pub async fn save(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<DriverFormData>,
) -> Flash<Redirect> {
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Flash::error(
            Redirect::to("/admin/drivers"),
            "Please fill in all required fields",
        );
    }

    let date_of_birth = ValidationHelpers::non_empty(&form.date_of_birth);
    if let Some(date) = &date_of_birth {
        if !ValidationHelpers::is_valid_date(date) {
            return Flash::error(
                Redirect::to("/admin/drivers"),
                "Date of birth must be a date in the form YYYY-MM-DD",
            );
        }
    }

    let input = DriverInput {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        nationality: ValidationHelpers::non_empty(&form.nationality),
        date_of_birth,
        team_id: ValidationHelpers::non_empty(&form.team_id),
    };

    let saved = if form.driver_id.is_empty() {
        Driver::create(store, &input).await.map(|()| "Driver added")
    } else {
        Driver::update(store, &form.driver_id, &input)
            .await
            .map(|()| "Driver updated")
    };

    match saved {
        Ok(message) => Flash::success(Redirect::to("/admin/drivers"), message),
        Err(error) => {
            error!(target:"routes/admin/driver:save", "Error saving driver. (error: {})", error);
            Flash::error(Redirect::to("/admin/drivers"), "Could not save the driver")
        }
    }
}

#[derive(FromForm)]
pub struct DeleteDriverFormData {
    pub driver_id: String,
}

#[post("/drivers/delete", data = "<form>")]
pub async fn delete(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<DeleteDriverFormData>,
) -> Flash<Redirect> {
    if form.driver_id.is_empty() {
        return Flash::error(
            Redirect::to("/admin/drivers"),
            "Please select a driver to delete",
        );
    }

    match Driver::delete(store, &form.driver_id).await {
        Ok(()) => Flash::success(Redirect::to("/admin/drivers"), "Driver deleted"),
        Err(error) => {
            error!(target:"routes/admin/driver:delete", "Error deleting driver. (error: {})", error);
            Flash::error(Redirect::to("/admin/drivers"), "Could not delete the driver")
        }
    }
}
