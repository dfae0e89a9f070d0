use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use snafu::ResultExt;

use crate::errors::{
    CustomResult, DecodeSnafu, Error, InvalidEmailSnafu, MissingEnvSnafu, RemoteApiSnafu,
    RequestSnafu, SignUpFailedSnafu, TokenStorageSnafu,
};
use crate::modules::helpers::validation::ValidationHelpers;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl AuthUser {
    /// First name from the signup metadata, "Unknown" when absent.
    pub fn first_name(&self) -> String {
        self.user_metadata
            .get("first_name")
            .and_then(|value| value.as_str())
            .unwrap_or("Unknown")
            .to_string()
    }
}

// The signup endpoint returns a full session when the instance
// auto confirms accounts, and a bare user object otherwise.
#[derive(Debug, Deserialize)]
struct MaybeSession {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<AuthUser>,
}

/// Client for the hosted auth service.
///
/// Holds the live session in memory and persists the access token as a
/// single string in a local token file, which is cleared on sign out.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    token_path: PathBuf,
    session: Arc<Mutex<Option<Session>>>,
}

impl AuthClient {
    pub fn new(base_url: &str, api_key: &str, token_path: PathBuf) -> AuthClient {
        AuthClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            token_path,
            session: Arc::new(Mutex::new(None)),
        }
    }

    pub fn from_env() -> CustomResult<AuthClient> {
        let url = std::env::var("SUPABASE_URL").context(MissingEnvSnafu {
            name: "SUPABASE_URL",
        })?;
        let key = std::env::var("SUPABASE_ANON_KEY").context(MissingEnvSnafu {
            name: "SUPABASE_ANON_KEY",
        })?;
        let token_path = std::env::var("TOKEN_FILE").unwrap_or_else(|_| "session.token".to_string());

        Ok(AuthClient::new(&url, &key, PathBuf::from(token_path)))
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> CustomResult<Session> {
        snafu::ensure!(
            ValidationHelpers::is_valid_email(email),
            InvalidEmailSnafu { email }
        );

        let url = self.auth_url("signup");
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&json!({
                "email": email,
                "password": password,
                "data": {
                    "first_name": first_name,
                    "last_name": last_name,
                },
            }))
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        let response = check_status(&url, response).await?;
        let maybe: MaybeSession = response.json().await.context(DecodeSnafu)?;

        let session = match (maybe.access_token, maybe.refresh_token, maybe.user) {
            (Some(access_token), Some(refresh_token), Some(user)) => Session {
                access_token,
                refresh_token,
                user,
            },
            _ => return SignUpFailedSnafu.fail(),
        };

        info!(target: "auth_api", "signed up {}", email);
        self.store_session(session.clone())?;
        Ok(session)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> CustomResult<Session> {
        snafu::ensure!(
            ValidationHelpers::is_valid_email(email),
            InvalidEmailSnafu { email }
        );

        let url = self.auth_url("token");
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        let response = check_status(&url, response).await?;
        let session: Session = response.json().await.context(DecodeSnafu)?;

        info!(target: "auth_api", "signed in {}", email);
        self.store_session(session.clone())?;
        Ok(session)
    }

    pub async fn sign_out(&self) -> CustomResult<()> {
        let token = self.stored_token()?.ok_or(Error::NotLoggedInError)?;

        let url = self.auth_url("logout");
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&token)
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        check_status(&url, response).await?;

        self.clear_token()?;
        *self.session.lock().unwrap() = None;
        info!(target: "auth_api", "signed out");
        Ok(())
    }

    /// Current user for the stored access token.
    pub async fn current_user(&self) -> CustomResult<AuthUser> {
        let token = self.stored_token()?.ok_or(Error::NotLoggedInError)?;

        let url = self.auth_url("user");
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&token)
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        let response = check_status(&url, response).await?;
        response.json().await.context(DecodeSnafu)
    }

    /// Exchange the in memory refresh token for a fresh session. The new
    /// access token replaces the stored one.
    pub async fn refresh_session(&self) -> CustomResult<Session> {
        let refresh_token = {
            let session = self.session.lock().unwrap();
            session
                .as_ref()
                .map(|s| s.refresh_token.clone())
                .ok_or(Error::NotLoggedInError)?
        };

        let url = self.auth_url("token");
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        let response = check_status(&url, response).await?;
        let session: Session = response.json().await.context(DecodeSnafu)?;

        self.store_session(session.clone())?;
        Ok(session)
    }

    /// A user counts as logged in when a token is stored, the auth service
    /// still accepts it, and refreshing the session does not fail. Any
    /// failure is "not logged in", never retried.
    pub async fn is_logged_in(&self) -> bool {
        match self.stored_token() {
            Ok(Some(_)) => {}
            _ => return false,
        }

        if self.current_user().await.is_err() {
            return false;
        }

        match self.refresh_session().await {
            Ok(_) => true,
            // nothing to refresh in this process yet, the token itself is valid
            Err(Error::NotLoggedInError) => true,
            Err(error) => {
                warn!(target: "auth_api", "session refresh failed: {}", error);
                false
            }
        }
    }

    fn store_session(&self, session: Session) -> CustomResult<()> {
        self.save_token(&session.access_token)?;
        *self.session.lock().unwrap() = Some(session);
        Ok(())
    }

    fn save_token(&self, token: &str) -> CustomResult<()> {
        std::fs::write(&self.token_path, token).context(TokenStorageSnafu)
    }

    pub fn stored_token(&self) -> CustomResult<Option<String>> {
        match std::fs::read_to_string(&self.token_path) {
            Ok(token) => {
                let token = token.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error).context(TokenStorageSnafu),
        }
    }

    fn clear_token(&self) -> CustomResult<()> {
        match std::fs::remove_file(&self.token_path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error).context(TokenStorageSnafu),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AdminUserList {
    users: Vec<AuthUser>,
}

/// Client for the auth service admin endpoints. Holds the elevated service
/// key, so it is constructed once in main and only ever handed to server
/// side code.
#[derive(Debug, Clone)]
pub struct AdminAuthClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl AdminAuthClient {
    pub fn new(base_url: &str, service_key: &str) -> AdminAuthClient {
        AdminAuthClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }

    pub fn from_env() -> CustomResult<AdminAuthClient> {
        let url = std::env::var("SUPABASE_URL").context(MissingEnvSnafu {
            name: "SUPABASE_URL",
        })?;
        let key = std::env::var("SUPABASE_SERVICE_KEY").context(MissingEnvSnafu {
            name: "SUPABASE_SERVICE_KEY",
        })?;

        Ok(AdminAuthClient::new(&url, &key))
    }

    pub async fn retrieve_users(&self) -> CustomResult<Vec<AuthUser>> {
        let url = format!("{}/auth/v1/admin/users", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;

        let response = check_status(&url, response).await?;
        let list: AdminUserList = response.json().await.context(DecodeSnafu)?;
        Ok(list.users)
    }

    /// Map author ids to first names for display. A lookup failure yields
    /// an empty map, the screens fall back to "Unknown".
    pub async fn authors_info(&self, author_ids: &[String]) -> HashMap<String, String> {
        let users = match self.retrieve_users().await {
            Ok(users) => users,
            Err(error) => {
                warn!(target: "auth_api", "could not retrieve authors: {}", error);
                return HashMap::new();
            }
        };

        users
            .into_iter()
            .filter(|user| author_ids.contains(&user.id))
            .map(|user| {
                let name = user.first_name();
                (user.id, name)
            })
            .collect()
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
