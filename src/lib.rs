use serde::{Deserialize, Serialize};

pub mod cron_jobs;
pub mod errors;
pub mod modules;

pub mod macros {
    pub mod remote_error_handeler;
}

pub mod routes {
    pub mod article;
    pub mod auth;
    pub mod home;
    pub mod race;
    pub mod standings;

    pub mod admin {
        pub mod article;
        pub mod driver;
        pub mod panel;
        pub mod race;
        pub mod result;
        pub mod team;
        pub mod track;
    }

    pub mod api {
        pub mod article;
        pub mod race;
        pub mod standings;
    }
}

use modules::models::driver::Driver;
use modules::models::team::Team;

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct DriverStanding {
    pub driver: Driver,
    pub team: Option<Team>,
    pub points: i32,
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct TeamStanding {
    pub team: Team,
    pub drivers: Vec<Driver>,
    pub points: i32,
}
