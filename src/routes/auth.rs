use log::error;
use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, FromForm, State};
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::errors::Error;
use crate::modules::auth_api::AuthClient;
use crate::modules::helpers::validation::ValidationHelpers;

#[derive(Serialize)]
struct AuthContext {
    message: Option<String>,
}

#[get("/login")]
pub fn login_page(flash: Option<FlashMessage<'_>>) -> Template {
    Template::render(
        "login",
        AuthContext {
            message: flash.map(|f| f.message().to_string()),
        },
    )
}

#[derive(FromForm)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

#[post("/login", data = "<form>")]
pub async fn login(form: Form<LoginFormData>, auth: &State<AuthClient>) -> Flash<Redirect> {
    if form.email.is_empty() || form.password.is_empty() {
        return Flash::error(Redirect::to("/login"), "Please fill in all required fields");
    }
    // rejected before any remote call is issued
    if !ValidationHelpers::is_valid_email(&form.email) {
        return Flash::error(Redirect::to("/login"), "Invalid email address format");
    }

    match auth.sign_in(&form.email, &form.password).await {
        Ok(_) => Flash::success(Redirect::to("/"), "Signed in successfully"),
        Err(error) => {
            error!(target:"routes/auth:login", "Error signing in. (error: {})", error);
            Flash::error(Redirect::to("/login"), "Could not sign in")
        }
    }
}

#[get("/register")]
pub fn register_page(flash: Option<FlashMessage<'_>>) -> Template {
    Template::render(
        "register",
        AuthContext {
            message: flash.map(|f| f.message().to_string()),
        },
    )
}

#[derive(FromForm)]
pub struct RegisterFormData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[post("/register", data = "<form>")]
pub async fn register(form: Form<RegisterFormData>, auth: &State<AuthClient>) -> Flash<Redirect> {
    if form.email.is_empty()
        || form.password.is_empty()
        || form.first_name.is_empty()
        || form.last_name.is_empty()
    {
        return Flash::error(
            Redirect::to("/register"),
            "Please fill in all required fields",
        );
    }
    if !ValidationHelpers::is_valid_email(&form.email) {
        return Flash::error(Redirect::to("/register"), "Invalid email address format");
    }

    match auth
        .sign_up(&form.email, &form.password, &form.first_name, &form.last_name)
        .await
    {
        Ok(_) => Flash::success(Redirect::to("/"), "Registration completed successfully"),
        Err(error) => {
            error!(target:"routes/auth:register", "Error signing up. (error: {})", error);
            Flash::error(Redirect::to("/register"), "Could not complete the registration")
        }
    }
}

#[get("/logout")]
pub async fn logout(auth: &State<AuthClient>) -> Flash<Redirect> {
    match auth.sign_out().await {
        Ok(()) => Flash::success(Redirect::to("/login"), "Signed out successfully"),
        Err(Error::NotLoggedInError) => Flash::error(
            Redirect::to("/login"),
            "You cannot sign out because you are not signed in",
        ),
        Err(error) => {
            error!(target:"routes/auth:logout", "Error signing out. (error: {})", error);
            Flash::error(Redirect::to("/"), "Could not sign out")
        }
    }
}
