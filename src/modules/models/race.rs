use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::store_api::StoreClient;

pub const TABLE: &str = "Races";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Race {
    pub race_id: String,
    pub race_name: String,
    pub track_id: String,
    // kept as a string, the store serves calendar dates as YYYY-MM-DD
    pub race_date: String,
    pub laps: i32,
    pub winner_driver_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct RaceInput {
    pub race_name: String,
    pub track_id: String,
    pub race_date: String,
    pub laps: i32,
    pub winner_driver_id: Option<String>,
}

impl Race {
    pub async fn create(client: &StoreClient, input: &RaceInput) -> CustomResult<()> {
        client.insert(TABLE, input).await?;
        info!(target: "models/race", "created race {}", input.race_name);
        Ok(())
    }

    pub async fn get_all(client: &StoreClient) -> CustomResult<Vec<Race>> {
        client.select(TABLE).await
    }

    pub async fn update(client: &StoreClient, race_id: &str, input: &RaceInput) -> CustomResult<()> {
        client.update(TABLE, "race_id", race_id, input).await?;
        info!(target: "models/race", "updated race {}", race_id);
        Ok(())
    }

    pub async fn delete(client: &StoreClient, race_id: &str) -> CustomResult<()> {
        client.delete(TABLE, "race_id", race_id).await?;
        info!(target: "models/race", "deleted race {}", race_id);
        Ok(())
    }

    pub fn find_by_id<'a>(races: &'a [Race], race_id: &str) -> Option<&'a Race> {
        races.iter().find(|race| race.race_id == race_id)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.race_date, "%Y-%m-%d").ok()
    }

    /// Chronological order. Rows with an unparseable date sort last.
    pub fn sort_by_date(races: &mut [Race]) {
        races.sort_by_key(|race| race.date().unwrap_or(NaiveDate::MAX));
    }
}
