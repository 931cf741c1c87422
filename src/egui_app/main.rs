/**
 * egui Native Desktop App - Main Entry Point
 *
 * Sets up logging and the tokio runtime, then hands control to eframe.
 */
use std::time::{Duration, Instant};

use eframe::egui;
use pokedex::egui_app::{theme, views, AppState};
use tracing_subscriber::EnvFilter;

/// How often to wake up while requests or timers are pending.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokedex=info")),
        )
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pokédex",
        options,
        Box::new(move |cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(PokedexApp::new(AppState::new(handle))))
        }),
    )?;

    drop(runtime);
    Ok(())
}

/// Main application state
struct PokedexApp {
    state: AppState,
}

impl PokedexApp {
    fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PokedexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll(Instant::now());

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        if self.state.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
