use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::store_api::StoreClient;

pub const TABLE: &str = "Drivers";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Driver {
    pub driver_id: String,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    // nullable, a driver may be unassigned
    pub team_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct DriverInput {
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub team_id: Option<String>,
}

impl Driver {
    pub async fn create(client: &StoreClient, input: &DriverInput) -> CustomResult<()> {
        client.insert(TABLE, input).await?;
        info!(
            target: "models/driver",
            "created driver {} {}", input.first_name, input.last_name
        );
        Ok(())
    }

    pub async fn get_all(client: &StoreClient) -> CustomResult<Vec<Driver>> {
        client.select(TABLE).await
    }

    pub async fn update(
        client: &StoreClient,
        driver_id: &str,
        input: &DriverInput,
    ) -> CustomResult<()> {
        client.update(TABLE, "driver_id", driver_id, input).await?;
        info!(target: "models/driver", "updated driver {}", driver_id);
        Ok(())
    }

    pub async fn delete(client: &StoreClient, driver_id: &str) -> CustomResult<()> {
        client.delete(TABLE, "driver_id", driver_id).await?;
        info!(target: "models/driver", "deleted driver {}", driver_id);
        Ok(())
    }

    pub fn find_by_id<'a>(drivers: &'a [Driver], driver_id: &str) -> Option<&'a Driver> {
        drivers.iter().find(|driver| driver.driver_id == driver_id)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Placeholder for a driver id that no longer resolves to a row, kept
    /// in the standings instead of dropping the points.
    pub fn unknown(driver_id: &str) -> Driver {
        Driver {
            driver_id: driver_id.to_string(),
            first_name: "Unknown".to_string(),
            last_name: "Driver".to_string(),
            nationality: None,
            date_of_birth: None,
            team_id: None,
        }
    }
}
