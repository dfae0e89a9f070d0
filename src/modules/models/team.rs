use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::store_api::StoreClient;

pub const TABLE: &str = "Teams";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Team {
    pub team_id: String,
    pub team_name: String,
    pub nationality: Option<String>,
    pub founded_year: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct TeamInput {
    pub team_name: String,
    pub nationality: Option<String>,
    pub founded_year: Option<i32>,
}

impl Team {
    pub async fn create(client: &StoreClient, input: &TeamInput) -> CustomResult<()> {
        client.insert(TABLE, input).await?;
        info!(target: "models/team", "created team {}", input.team_name);
        Ok(())
    }

    pub async fn get_all(client: &StoreClient) -> CustomResult<Vec<Team>> {
        client.select(TABLE).await
    }

    pub async fn update(client: &StoreClient, team_id: &str, input: &TeamInput) -> CustomResult<()> {
        client.update(TABLE, "team_id", team_id, input).await?;
        info!(target: "models/team", "updated team {}", team_id);
        Ok(())
    }

    pub async fn delete(client: &StoreClient, team_id: &str) -> CustomResult<()> {
        client.delete(TABLE, "team_id", team_id).await?;
        info!(target: "models/team", "deleted team {}", team_id);
        Ok(())
    }

    pub fn find_by_id<'a>(teams: &'a [Team], team_id: &str) -> Option<&'a Team> {
        teams.iter().find(|team| team.team_id == team_id)
    }

    /// Placeholder for a team id that no longer resolves to a row.
    pub fn unknown(team_id: &str) -> Team {
        Team {
            team_id: team_id.to_string(),
            team_name: "Unknown Team".to_string(),
            nationality: None,
            founded_year: None,
        }
    }
}
