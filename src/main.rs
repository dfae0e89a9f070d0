use rocket::fs::{relative, FileServer};
use rocket::response::{Flash, Redirect};
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

use f1_paddock::cron_jobs::register_cron_jobs;
use f1_paddock::modules::auth_api::{AdminAuthClient, AuthClient};
use f1_paddock::modules::helpers::fairings::cors::CORS;
use f1_paddock::modules::helpers::handelbars::format_date::FormatDateHelper;
use f1_paddock::modules::helpers::handelbars::format_race_status::FormatRaceStatus;
use f1_paddock::modules::helpers::logging::setup_logging;
use f1_paddock::modules::store_api::StoreClient;
use f1_paddock::routes::{admin, api, article, auth, home, race, standings};

#[macro_use]
extern crate rocket;

#[catch(401)]
fn unauthorized() -> Redirect {
    Redirect::to("/login")
}

#[catch(403)]
fn forbidden() -> Flash<Redirect> {
    Flash::error(Redirect::to("/"), "You do not have access to that screen")
}

#[launch]
async fn rocket() -> Rocket<Build> {
    dotenvy::dotenv().ok();
    setup_logging().expect("Failed to setup logging");

    // the clients are built once here and handed to the screens as managed
    // state; the admin client never leaves the server side
    let store = StoreClient::from_env().expect("Failed to configure the store client");
    let auth = AuthClient::from_env().expect("Failed to configure the auth client");
    let admin_auth =
        AdminAuthClient::from_env().expect("Failed to configure the admin auth client");

    // keeps the stored session token fresh in the background
    register_cron_jobs(auth.clone()).await;

    rocket::build()
        .attach(Template::custom(|engines| {
            engines
                .handlebars
                .register_helper("formatDate", Box::new(FormatDateHelper));
            engines
                .handlebars
                .register_helper("formatRaceStatus", Box::new(FormatRaceStatus));
            engines.handlebars.set_strict_mode(true);
        }))
        .attach(CORS)
        .manage(store)
        .manage(auth)
        .manage(admin_auth)
        .mount("/", routes![
            home::index,
            auth::login_page,
            auth::login,
            auth::register_page,
            auth::register,
            auth::logout,
        ])
        .mount("/races", routes![
            race::list,
            race::results,
        ])
        .mount("/standings", routes![
            standings::drivers,
            standings::teams,
        ])
        .mount("/articles", routes![
            article::list,
            article::detail,
            article::new_page,
            article::create,
        ])
        .mount("/admin", routes![
            admin::panel::index,
            admin::race::form,
            admin::race::save,
            admin::race::delete,
            admin::track::form,
            admin::track::save,
            admin::track::delete,
            admin::team::form,
            admin::team::save,
            admin::team::delete,
            admin::driver::form,
            admin::driver::save,
            admin::driver::delete,
            admin::result::form,
            admin::result::save,
            admin::result::delete,
            admin::article::form,
            admin::article::save,
            admin::article::delete,
        ])
        .mount("/api", routes![
            api::race::get_all,
            api::race::get_results,
            api::standings::drivers,
            api::standings::teams,
            api::article::get_all,
            api::article::get_one,
        ])
        .mount("/static", FileServer::from(relative!("static")))
        .register("/", catchers![unauthorized, forbidden])
}
