use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::store_api::StoreClient;

pub const TABLE: &str = "RaceResults";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct RaceResult {
    pub result_id: String,
    pub race_id: String,
    pub driver_id: String,
    pub position: i32,
    // derived from position before the row is sent, never entered directly
    pub points: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct RaceResultInput {
    pub race_id: String,
    pub driver_id: String,
    pub position: i32,
    pub points: i32,
}

impl RaceResult {
    pub async fn create(client: &StoreClient, input: &RaceResultInput) -> CustomResult<()> {
        client.insert(TABLE, input).await?;
        info!(
            target: "models/race_result",
            "created result for race {} (position {})", input.race_id, input.position
        );
        Ok(())
    }

    pub async fn get_all(client: &StoreClient) -> CustomResult<Vec<RaceResult>> {
        client.select(TABLE).await
    }

    pub async fn get_by_race(client: &StoreClient, race_id: &str) -> CustomResult<Vec<RaceResult>> {
        client.select_eq(TABLE, "race_id", race_id).await
    }

    pub async fn update(
        client: &StoreClient,
        result_id: &str,
        input: &RaceResultInput,
    ) -> CustomResult<()> {
        client.update(TABLE, "result_id", result_id, input).await?;
        info!(target: "models/race_result", "updated result {}", result_id);
        Ok(())
    }

    pub async fn delete(client: &StoreClient, result_id: &str) -> CustomResult<()> {
        client.delete(TABLE, "result_id", result_id).await?;
        info!(target: "models/race_result", "deleted result {}", result_id);
        Ok(())
    }

    pub fn find_by_id<'a>(results: &'a [RaceResult], result_id: &str) -> Option<&'a RaceResult> {
        results.iter().find(|result| result.result_id == result_id)
    }

    pub fn for_race<'a>(results: &'a [RaceResult], race_id: &str) -> Vec<&'a RaceResult> {
        results
            .iter()
            .filter(|result| result.race_id == race_id)
            .collect()
    }
}
