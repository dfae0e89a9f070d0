use rocket::get;
use rocket::request::FlashMessage;
use rocket::response::Redirect;
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::modules::guards::SessionUser;

#[derive(Serialize)]
struct HomeContext {
    username: String,
    message: Option<String>,
}

#[get("/")]
pub async fn index(
    user: Option<SessionUser>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, Redirect> {
    let user = match user {
        Some(user) => user,
        None => return Err(Redirect::to("/login")),
    };

    Ok(Template::render(
        "index",
        HomeContext {
            username: user.first_name,
            message: flash.map(|f| f.message().to_string()),
        },
    ))
}
