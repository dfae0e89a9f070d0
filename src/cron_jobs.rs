use std::time::Duration;

use log::{info, warn};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::errors::Error;
use crate::modules::auth_api::AuthClient;

pub async fn refresh_session(auth: &AuthClient) {
    match auth.refresh_session().await {
        Ok(_) => {
            info!(target: "cron/session", "session refreshed");
        }
        // no session in this process, nothing to keep alive
        Err(Error::NotLoggedInError) => {}
        Err(error) => {
            warn!(target: "cron/session", "failed to refresh session: {}", error);
        }
    }
}

pub async fn register_cron_jobs(auth: AuthClient) {
    let scheduler = JobScheduler::new().await.unwrap();

    // refresh the stored session every 30 minutes so the token stays valid
    let j = Job::new_repeated_async(Duration::from_secs(1800), move |_uuid, _l| {
        let auth = auth.clone();
        Box::pin(async move {
            refresh_session(&auth).await;
        })
    })
    .unwrap();
    scheduler.add(j).await.unwrap();
    scheduler.start().await.unwrap();
}
