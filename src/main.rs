use rag_chat::{app::App, config::ChatConfig, util::log};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ChatConfig::load(&config_path)?;
    log::init_logger(&config.log_dir)?;
    log::init_tracing(&config.log_dir)?;
    rag_chat::log_info!("Starting with config {}", config_path);

    let app = App::new(config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();

    if let Err(e) = &result {
        rag_chat::log_error!("Exiting on error: {:?}", e);
    }
    result
}
