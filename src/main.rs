//! HAL Function Browser entry point.
//!
//! ```text
//! main()
//!  └─ AppContext::bootstrap()   -- config, repository, sample data
//!  └─ eframe::run_native()
//!       └─ BrowserApp::new()    -- hotkey, floating widget, first tree load
//! ```

use anyhow::Context;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hal_browser::app::resolve_data_dir;
use hal_browser::model::constants::{APP_TITLE, MAIN_WINDOW_MIN_SIZE, MAIN_WINDOW_SIZE};
use hal_browser::ui::BrowserApp;
use hal_browser::AppContext;

fn main() -> anyhow::Result<()> {
    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir();
    info!(data_dir = %data_dir.display(), "{APP_TITLE} starting");

    let startup = AppContext::bootstrap(&data_dir)
        .with_context(|| format!("failed to prepare data directory {}", data_dir.display()))?;

    let visible = startup.context.visibility().is_visible();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(MAIN_WINDOW_SIZE)
            .with_min_inner_size(MAIN_WINDOW_MIN_SIZE)
            .with_visible(visible),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(BrowserApp::new(cc, startup)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))?;

    info!("{APP_TITLE} exiting");
    Ok(())
}
