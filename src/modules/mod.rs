pub mod auth_api;
pub mod guards;
pub mod store_api;

pub mod models {
    pub mod article;
    pub mod driver;
    pub mod race;
    pub mod race_result;
    pub mod team;
    pub mod track;
}

pub mod helpers {
    pub mod general;
    pub mod logging;
    pub mod standings;
    pub mod validation;

    pub mod fairings {
        pub mod cors;
    }

    pub mod handelbars {
        pub mod format_date;
        pub mod format_race_status;
    }
}
