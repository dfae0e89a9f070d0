use log::warn;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};

use crate::modules::auth_api::AuthClient;

/// The signed in user, resolved against the auth service on every screen
/// entry. Screens requiring a session take this guard; a missing or
/// rejected token turns into a 401, which the catcher sends to the login
/// screen.
pub struct SessionUser {
    pub id: String,
    pub first_name: String,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = match request.rocket().state::<AuthClient>() {
            Some(auth) => auth,
            None => return Outcome::Error((Status::InternalServerError, ())),
        };

        match auth.current_user().await {
            Ok(user) => Outcome::Success(SessionUser {
                first_name: user.first_name(),
                id: user.id,
            }),
            Err(_) => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// A signed in user whose id matches the configured admin id.
pub struct AdminUser {
    pub id: String,
    pub first_name: String,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let user = match request.guard::<SessionUser>().await {
            Outcome::Success(user) => user,
            _ => return Outcome::Error((Status::Unauthorized, ())),
        };

        let admin_id = std::env::var("ADMIN_USER_ID").unwrap_or_default();
        if !admin_id.is_empty() && user.id == admin_id {
            Outcome::Success(AdminUser {
                id: user.id,
                first_name: user.first_name,
            })
        } else {
            warn!(target: "guards", "user {} tried to reach an admin screen", user.id);
            Outcome::Error((Status::Forbidden, ()))
        }
    }
}
