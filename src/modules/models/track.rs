use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::store_api::StoreClient;

pub const TABLE: &str = "Tracks";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Track {
    pub track_id: String,
    pub track_name: String,
    pub location: String,
    pub length: f32,
    pub lap_record: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct TrackInput {
    pub track_name: String,
    pub location: String,
    pub length: f32,
    pub lap_record: Option<String>,
}

impl Track {
    pub async fn create(client: &StoreClient, input: &TrackInput) -> CustomResult<()> {
        client.insert(TABLE, input).await?;
        info!(target: "models/track", "created track {}", input.track_name);
        Ok(())
    }

    pub async fn get_all(client: &StoreClient) -> CustomResult<Vec<Track>> {
        client.select(TABLE).await
    }

    pub async fn update(
        client: &StoreClient,
        track_id: &str,
        input: &TrackInput,
    ) -> CustomResult<()> {
        client.update(TABLE, "track_id", track_id, input).await?;
        info!(target: "models/track", "updated track {}", track_id);
        Ok(())
    }

    pub async fn delete(client: &StoreClient, track_id: &str) -> CustomResult<()> {
        client.delete(TABLE, "track_id", track_id).await?;
        info!(target: "models/track", "deleted track {}", track_id);
        Ok(())
    }

    pub fn find_by_id<'a>(tracks: &'a [Track], track_id: &str) -> Option<&'a Track> {
        tracks.iter().find(|track| track.track_id == track_id)
    }
}
