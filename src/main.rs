use anyhow::Context;
use userboard::{app, config::AppConfig, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    // validate everything before a pool exists
    let config = AppConfig::from_env().context("load config")?;
    let addr = config.bind_addr()?;

    let app_state = AppState::connect(config).await?;
    app_state.migrate().await;

    let router = app::build_app(app_state.clone());
    let served = app::serve(router, addr).await;

    app_state.close().await;
    served
}
