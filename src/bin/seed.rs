use std::process::ExitCode;

use tracing::error;
use userboard::{logging, seed, state::AppState};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init();

    let app_state = match AppState::init().await {
        Ok(s) => s,
        Err(e) => {
            error!(error = %format!("{e:#}"), "seeding failed");
            return ExitCode::from(seed::EXIT_FAILURE);
        }
    };
    app_state.migrate().await;

    ExitCode::from(seed::execute(&app_state).await)
}
