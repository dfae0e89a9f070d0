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
use crate::modules::models::track::{Track, TrackInput};
use crate::modules::store_api::StoreClient;

#[derive(Serialize)]
struct TrackFormContext {
    tracks: Vec<Track>,
    editing: Option<Track>,
    message: Option<String>,
}

#[get("/tracks?<edit>")]
pub async fn form(
    _admin: AdminUser,
    store: &State<StoreClient>,
    edit: Option<String>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, Status> {
    let tracks = remote_handle_get_error_http!(
        Track::get_all(store).await,
        "routes/admin/track:form",
        "tracks"
    );

    let editing = edit.and_then(|id| Track::find_by_id(&tracks, &id).cloned());

    Ok(Template::render(
        "admin/track_form",
        TrackFormContext {
            tracks,
            editing,
            message: flash.map(|f| f.message().to_string()),
        },
    ))
}

#[derive(FromForm)]
pub struct TrackFormData {
    pub track_id: String,
    pub track_name: String,
    pub location: String,
    pub length: String,
    pub lap_record: String,
}

#[post("/tracks/save", data = "<form>")]
pub async fn save(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<TrackFormData>,
) -> Flash<Redirect> {
    if form.track_name.trim().is_empty()
        || form.location.trim().is_empty()
        || form.length.trim().is_empty()
    {
        return Flash::error(
            Redirect::to("/admin/tracks"),
            "Please fill in all required fields",
        );
    }

    let length: f32 = match form.length.trim().parse() {
        Ok(length) => length,
        Err(_) => {
            return Flash::error(
                Redirect::to("/admin/tracks"),
                "Track length must be a number",
            )
        }
    };

    let input = TrackInput {
        track_name: form.track_name.trim().to_string(),
        location: form.location.trim().to_string(),
        length,
        lap_record: ValidationHelpers::non_empty(&form.lap_record),
    };

    let saved = if form.track_id.is_empty() {
        Track::create(store, &input).await.map(|()| "Track added")
    } else {
        Track::update(store, &form.track_id, &input)
            .await
            .map(|()| "Track updated")
    };

    match saved {
        Ok(message) => Flash::success(Redirect::to("/admin/tracks"), message),
        Err(error) => {
            error!(target:"routes/admin/track:save", "Error saving track. (error: {})", error);
            Flash::error(Redirect::to("/admin/tracks"), "Could not save the track")
        }
    }
}

#[derive(FromForm)]
pub struct DeleteTrackFormData {
    pub track_id: String,
}

#[post("/tracks/delete", data = "<form>")]
pub async fn delete(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<DeleteTrackFormData>,
) -> Flash<Redirect> {
    if form.track_id.is_empty() {
        return Flash::error(
            Redirect::to("/admin/tracks"),
            "Please select a track to delete",
        );
    }

    match Track::delete(store, &form.track_id).await {
        Ok(()) => Flash::success(Redirect::to("/admin/tracks"), "Track deleted"),
        Err(error) => {
            error!(target:"routes/admin/track:delete", "Error deleting track. (error: {})", error);
            Flash::error(Redirect::to("/admin/tracks"), "Could not delete the track")
        }
    }
}
