use rocket::get;
use rocket::request::FlashMessage;
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::modules::guards::AdminUser;

#[derive(Serialize)]
struct PanelContext {
    username: String,
    message: Option<String>,
}

#[get("/")]
pub fn index(admin: AdminUser, flash: Option<FlashMessage<'_>>) -> Template {
    Template::render(
        "admin/panel",
        PanelContext {
            username: admin.first_name,
            message: flash.map(|f| f.message().to_string()),
        },
    )
}
