use anyhow::Context;
use tracing::{error, info, instrument};

use crate::{
    config::SeedConfig,
    state::AppState,
    users::{password::hash_password, User, UserStore},
};

/// Process exit status of the `seed` binary.
pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Makes sure the sample user exists. Safe to run repeatedly: an existing row is left as is.
#[instrument(skip_all, fields(email = %seed.email))]
pub async fn run(store: &dyn UserStore, seed: &SeedConfig) -> anyhow::Result<User> {
    info!("start seeding");
    let hash = hash_password(&seed.password).context("hash seed password")?;
    let user = store
        .upsert_by_email(&seed.email, &hash)
        .await
        .context("upsert seed user")?;
    info!(user_id = %user.id, "seed user present");
    Ok(user)
}

/// Seeds through `state`, then closes its pool whatever the outcome.
pub async fn execute(state: &AppState) -> u8 {
    let outcome = run(state.users.as_ref(), &state.config.seed).await;
    state.close().await;

    match outcome {
        Ok(user) => {
            info!(user_id = %user.id, "created user");
            info!("seeding finished");
            EXIT_OK
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "seeding failed");
            EXIT_FAILURE
        }
    }
}
