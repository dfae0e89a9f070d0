use log::error;
use rocket::form::Form;
use rocket::http::Status;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, FromForm, State};
use rocket_dyn_templates::Template;
use serde::Serialize;

use crate::macros::remote_error_handeler::remote_handle_get_error_http;
use crate::modules::auth_api::AdminAuthClient;
use crate::modules::guards::SessionUser;
use crate::modules::helpers::general::Helpers;
use crate::modules::models::article::{Article, ArticleInput};
use crate::modules::store_api::StoreClient;

#[derive(Serialize, Clone)]
struct ArticleRow {
    article: Article,
    author_name: Option<String>,
    preview: String,
}

#[derive(Serialize)]
struct ArticlesContext {
    articles: Vec<ArticleRow>,
    message: Option<String>,
}

#[get("/")]
pub async fn list(
    _user: SessionUser,
    store: &State<StoreClient>,
    admin_auth: &State<AdminAuthClient>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, Status> {
    let mut articles = remote_handle_get_error_http!(
        Article::get_all(store).await,
        "routes/article:list",
        "articles"
    );
    Article::sort_newest_first(&mut articles);

    // author names come from the auth service, resolved in one go
    let author_ids: Vec<String> = articles
        .iter()
        .filter_map(|article| article.author_id.clone())
        .collect();
    let author_ids = Helpers::dedupe_preserving_order(&author_ids);
    let authors = admin_auth.authors_info(&author_ids).await;

    let rows = articles
        .into_iter()
        .map(|article| {
            let author_name = article
                .author_id
                .as_ref()
                .map(|id| authors.get(id).cloned().unwrap_or_else(|| "Unknown".to_string()));
            let preview = article.preview(200);
            ArticleRow {
                article,
                author_name,
                preview,
            }
        })
        .collect();

    Ok(Template::render(
        "articles",
        ArticlesContext {
            articles: rows,
            message: flash.map(|f| f.message().to_string()),
        },
    ))
}

#[derive(Serialize)]
struct ArticleDetailContext {
    article: Article,
    author_name: Option<String>,
}

#[get("/<article_id>", rank = 2)]
pub async fn detail(
    _user: SessionUser,
    store: &State<StoreClient>,
    admin_auth: &State<AdminAuthClient>,
    article_id: String,
) -> Result<Template, Status> {
    let article = remote_handle_get_error_http!(
        Article::get_by_id(store, &article_id).await,
        "routes/article:detail",
        "article"
    );
    let article = match article {
        Some(article) => article,
        None => return Err(Status::NotFound),
    };

    let author_name = match &article.author_id {
        Some(author_id) => {
            let authors = admin_auth.authors_info(&[author_id.clone()]).await;
            Some(
                authors
                    .get(author_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string()),
            )
        }
        None => None,
    };

    Ok(Template::render(
        "article_detail",
        ArticleDetailContext {
            article,
            author_name,
        },
    ))
}

#[derive(Serialize)]
struct NewArticleContext {
    message: Option<String>,
}

#[get("/new", rank = 1)]
pub fn new_page(_user: SessionUser, flash: Option<FlashMessage<'_>>) -> Template {
    Template::render(
        "article_form",
        NewArticleContext {
            message: flash.map(|f| f.message().to_string()),
        },
    )
}

#[derive(FromForm)]
pub struct ArticleFormData {
    pub title: String,
    pub content: String,
}

#[post("/new", data = "<form>")]
pub async fn create(
    user: SessionUser,
    store: &State<StoreClient>,
    form: Form<ArticleFormData>,
) -> Flash<Redirect> {
    if form.title.trim().is_empty() || form.content.trim().is_empty() {
        return Flash::error(Redirect::to("/articles/new"), "Please fill in all fields");
    }

    let input = ArticleInput {
        title: form.title.clone(),
        content: form.content.clone(),
        author_id: Some(user.id),
    };

    match Article::create(store, &input).await {
        Ok(()) => Flash::success(Redirect::to("/articles"), "Article added successfully"),
        Err(error) => {
            error!(target:"routes/article:create", "Error creating article. (error: {})", error);
            Flash::error(Redirect::to("/articles/new"), "Could not create the article")
        }
    }
}
