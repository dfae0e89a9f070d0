use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use snafu::ResultExt;

use crate::errors::{CustomResult, DecodeSnafu, MissingEnvSnafu, RemoteApiSnafu, RequestSnafu};

/// Client for the hosted table store.
///
/// Every operation maps to exactly one REST call against
/// `{base_url}/rest/v1/{table}`. The store only supports equality filters;
/// anything that looks like a join is done in memory after independent
/// fetches.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    pub fn new(base_url: &str, api_key: &str) -> StoreClient {
        StoreClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_env() -> CustomResult<StoreClient> {
        let url = std::env::var("SUPABASE_URL").context(MissingEnvSnafu {
            name: "SUPABASE_URL",
        })?;
        let key = std::env::var("SUPABASE_ANON_KEY").context(MissingEnvSnafu {
            name: "SUPABASE_ANON_KEY",
        })?;

        Ok(StoreClient::new(&url, &key))
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub async fn select<T: DeserializeOwned>(&self, table: &str) -> CustomResult<Vec<T>> {
        let url = self.table_url(table);
        debug!(target: "store_api", "select from {}", table);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", "*")])
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        let response = check_status(&url, response).await?;
        response.json::<Vec<T>>().await.context(DecodeSnafu)
    }

    pub async fn select_eq<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> CustomResult<Vec<T>> {
        let url = self.table_url(table);
        debug!(target: "store_api", "select from {} where {} = {}", table, column, value);

        let filter = format!("eq.{value}");
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", "*"), (column, filter.as_str())])
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        let response = check_status(&url, response).await?;
        response.json::<Vec<T>>().await.context(DecodeSnafu)
    }

    pub async fn insert<T: Serialize>(&self, table: &str, row: &T) -> CustomResult<()> {
        let url = self.table_url(table);
        debug!(target: "store_api", "insert into {}", table);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        check_status(&url, response).await?;
        Ok(())
    }

    pub async fn update<T: Serialize>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        row: &T,
    ) -> CustomResult<()> {
        let url = self.table_url(table);
        debug!(target: "store_api", "update {} where {} = {}", table, column, value);

        let response = self
            .http
            .patch(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[(column, &format!("eq.{value}"))])
            .json(row)
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        check_status(&url, response).await?;
        Ok(())
    }

    pub async fn delete(&self, table: &str, column: &str, value: &str) -> CustomResult<()> {
        let url = self.table_url(table);
        debug!(target: "store_api", "delete from {} where {} = {}", table, column, value);

        let response = self
            .http
            .delete(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[(column, &format!("eq.{value}"))])
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        check_status(&url, response).await?;
        Ok(())
    }
}

async fn check_status(
    url: &str,
    response: reqwest::Response,
) -> CustomResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    RemoteApiSnafu {
        url,
        status: status.as_u16(),
        body,
    }
    .fail()
}
