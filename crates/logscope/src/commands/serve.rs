//! Serve command implementation

use anyhow::Result;
use chrono::Local;
use logscope_core::Settings;
use logscope_web::AppState;
use tracing::info;

use crate::cli::ServeArgs;
use crate::output::print_info;

pub async fn execute(mut settings: Settings, args: ServeArgs) -> Result<()> {
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }

    let store = super::open_store(&settings);
    store.ensure_layout(Local::now().date_naive())?;
    info!("Log root ready at {}", store.root().display());

    let bind_addr = settings.bind_addr();
    print_info(&format!("LogScope listening on http://{}", bind_addr));

    let state = AppState::new(settings.registry, store);
    logscope_web::start_server_with_cors(&bind_addr, state, args.cors_origin).await?;
    Ok(())
}
