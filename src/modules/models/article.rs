use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::store_api::StoreClient;

pub const TABLE: &str = "Articles";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Article {
    pub article_id: String,
    pub title: String,
    pub content: String,
    // RFC 3339 timestamps assigned by the store
    pub created_at: String,
    pub updated_at: Option<String>,
    pub author_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    pub author_id: Option<String>,
}

impl Article {
    pub async fn create(client: &StoreClient, input: &ArticleInput) -> CustomResult<()> {
        client.insert(TABLE, input).await?;
        info!(target: "models/article", "created article {}", input.title);
        Ok(())
    }

    pub async fn get_all(client: &StoreClient) -> CustomResult<Vec<Article>> {
        client.select(TABLE).await
    }

    pub async fn get_by_id(client: &StoreClient, article_id: &str) -> CustomResult<Option<Article>> {
        let mut rows: Vec<Article> = client.select_eq(TABLE, "article_id", article_id).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }

    pub async fn update(
        client: &StoreClient,
        article_id: &str,
        input: &ArticleInput,
    ) -> CustomResult<()> {
        client.update(TABLE, "article_id", article_id, input).await?;
        info!(target: "models/article", "updated article {}", article_id);
        Ok(())
    }

    pub async fn delete(client: &StoreClient, article_id: &str) -> CustomResult<()> {
        client.delete(TABLE, "article_id", article_id).await?;
        info!(target: "models/article", "deleted article {}", article_id);
        Ok(())
    }

    /// Newest first, by creation timestamp. RFC 3339 strings compare
    /// chronologically as plain strings.
    pub fn sort_newest_first(articles: &mut [Article]) {
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    pub fn preview(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            return self.content.clone();
        }

        let cut: String = self.content.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
