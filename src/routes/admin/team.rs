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
use crate::modules::models::team::{Team, TeamInput};
use crate::modules::store_api::StoreClient;

#[derive(Serialize)]
struct TeamFormContext {
    teams: Vec<Team>,
    editing: Option<Team>,
    message: Option<String>,
}

#[get("/teams?<edit>")]
pub async fn form(
    _admin: AdminUser,
    store: &State<StoreClient>,
    edit: Option<String>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, Status> {
    let teams = remote_handle_get_error_http!(
        Team::get_all(store).await,
        "routes/admin/team:form",
        "teams"
    );

    let editing = edit.and_then(|id| Team::find_by_id(&teams, &id).cloned());

    Ok(Template::render(
        "admin/team_form",
        TeamFormContext {
            teams,
            editing,
            message: flash.map(|f| f.message().to_string()),
        },
    ))
}

#[derive(FromForm)]
pub struct TeamFormData {
    pub team_id: String,
    pub team_name: String,
    pub nationality: String,
    pub founded_year: String,
}

#[post("/teams/save", data = "<form>")]
pub async fn save(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<TeamFormData>,
) -> Flash<Redirect> {
    if form.team_name.trim().is_empty() {
        return Flash::error(Redirect::to("/admin/teams"), "Team name is required");
    }

    let input = TeamInput {
        team_name: form.team_name.trim().to_string(),
        nationality: ValidationHelpers::non_empty(&form.nationality),
        founded_year: form.founded_year.trim().parse().ok(),
    };

    let saved = if form.team_id.is_empty() {
        Team::create(store, &input).await.map(|()| "Team added")
    } else {
        Team::update(store, &form.team_id, &input)
            .await
            .map(|()| "Team updated")
    };

    match saved {
        Ok(message) => Flash::success(Redirect::to("/admin/teams"), message),
        Err(error) => {
            error!(target:"routes/admin/team:save", "Error saving team. (error: {})", error);
            Flash::error(Redirect::to("/admin/teams"), "Could not save the team")
        }
    }
}

#[derive(FromForm)]
pub struct DeleteTeamFormData {
    pub team_id: String,
}

#[post("/teams/delete", data = "<form>")]
pub async fn delete(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<DeleteTeamFormData>,
) -> Flash<Redirect> {
    if form.team_id.is_empty() {
        return Flash::error(Redirect::to("/admin/teams"), "Please select a team to delete");
    }

    match Team::delete(store, &form.team_id).await {
        Ok(()) => Flash::success(Redirect::to("/admin/teams"), "Team deleted"),
        Err(error) => {
            error!(target:"routes/admin/team:delete", "Error deleting team. (error: {})", error);
            Flash::error(Redirect::to("/admin/teams"), "Could not delete the team")
        }
    }
}
