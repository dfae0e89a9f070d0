use log::error;
use rocket::get;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

use crate::macros::remote_error_handeler::remote_handle_get_error_http;
use crate::modules::models::article::Article;
use crate::modules::store_api::StoreClient;

#[get("/articles")]
pub async fn get_all(store: &State<StoreClient>) -> Result<Json<Vec<Article>>, Status> {
    let mut articles = remote_handle_get_error_http!(
        Article::get_all(store).await,
        "routes/api/article:get_all",
        "articles"
    );
    Article::sort_newest_first(&mut articles);

    Ok(Json(articles))
}

#[get("/articles/<article_id>")]
pub async fn get_one(
    store: &State<StoreClient>,
    article_id: String,
) -> Result<Json<Article>, Status> {
    let article = remote_handle_get_error_http!(
        Article::get_by_id(store, &article_id).await,
        "routes/api/article:get_one",
        "article"
    );

    match article {
        Some(article) => Ok(Json(article)),
        None => Err(Status::NotFound),
    }
}
