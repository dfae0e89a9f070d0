use log::error;
use rocket::form::Form;
use rocket::http::Status;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, FromForm, State};
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::macros::remote_error_handeler::remote_handle_get_error_http;
use crate::modules::guards::AdminUser;
use crate::modules::models::article::{Article, ArticleInput};
use crate::modules::store_api::StoreClient;

#[derive(Serialize)]
struct ArticleFormContext {
    articles: Vec<Article>,
    editing: Option<Article>,
    message: Option<String>,
}

#[get("/articles?<edit>")]
pub async fn form(
    _admin: AdminUser,
    store: &State<StoreClient>,
    edit: Option<String>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, Status> {
    let mut articles = remote_handle_get_error_http!(
        Article::get_all(store).await,
        "routes/admin/article:form",
        "articles"
    );
    Article::sort_newest_first(&mut articles);

    let editing = edit.and_then(|id| {
        articles
            .iter()
            .find(|article| article.article_id == id)
            .cloned()
    });

    Ok(Template::render(
        "admin/article_form",
        ArticleFormContext {
            articles,
            editing,
            message: flash.map(|f| f.message().to_string()),
        },
    ))
}

#[derive(FromForm)]
pub struct AdminArticleFormData {
    pub article_id: String,
    pub title: String,
    pub content: String,
}

#[post("/articles/save", data = "<form>")]
pub async fn save(
    admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<AdminArticleFormData>,
) -> Flash<Redirect> {
    if form.title.trim().is_empty() || form.content.trim().is_empty() {
        return Flash::error(Redirect::to("/admin/articles"), "Please fill in all fields");
    }

    let input = ArticleInput {
        title: form.title.clone(),
        content: form.content.clone(),
        author_id: Some(admin.id),
    };

    let saved = if form.article_id.is_empty() {
        Article::create(store, &input).await.map(|()| "Article added")
    } else {
        Article::update(store, &form.article_id, &input)
            .await
            .map(|()| "Article updated")
    };

    match saved {
        Ok(message) => Flash::success(Redirect::to("/admin/articles"), message),
        Err(error) => {
            error!(target:"routes/admin/article:save", "Error saving article. (error: {})", error);
            Flash::error(Redirect::to("/admin/articles"), "Could not save the article")
        }
    }
}

#[derive(FromForm)]
pub struct DeleteArticleFormData {
    pub article_id: String,
}

#[post("/articles/delete", data = "<form>")]
pub async fn delete(
    _admin: AdminUser,
    store: &State<StoreClient>,
    form: Form<DeleteArticleFormData>,
) -> Flash<Redirect> {
    if form.article_id.is_empty() {
        return Flash::error(
            Redirect::to("/admin/articles"),
            "Please select an article to delete",
        );
    }

    match Article::delete(store, &form.article_id).await {
        Ok(()) => Flash::success(Redirect::to("/admin/articles"), "Article deleted"),
        Err(error) => {
            error!(target:"routes/admin/article:delete", "Error deleting article. (error: {})", error);
            Flash::error(Redirect::to("/admin/articles"), "Could not delete the article")
        }
    }
}
