//! Window session tracer
//!
//! Runs a short window session against a recording surface and logs every
//! call that reaches the surface. Pass a `.toml` or `.ron` toolkit
//! configuration as the only argument to change the display, the defaults or
//! the window manager.

use winkit::foundation::logging;
use winkit::prelude::*;
use winkit::core::ConfigError;
use winkit::surface::{CallLog, SurfaceCall};

#[derive(thiserror::Error, Debug)]
enum TraceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Window creation failed: {0}")]
    Create(#[from] CreateError),
}

/// A window with a title bar, repainted from its own saved state
struct TitledPanel {
    title: &'static str,
}

static TITLED_PANEL: TitledPanel = TitledPanel { title: "panel" };

const TITLE_HEIGHT: Coord = 10;

impl WindowClass for TitledPanel {
    fn class_name(&self) -> &'static str {
        "TitledPanel"
    }

    fn instance_size(&self) -> usize {
        std::mem::size_of::<winkit::window::WindowObject>() + 32
    }

    fn hooks(&self) -> ClassHooks {
        ClassHooks::REDRAW | ClassHooks::AFTER_CLEAR
    }

    fn redraw(&self, desktop: &mut Desktop, window: WindowHandle) {
        desktop.clear(window);
    }

    fn after_clear(&self, desktop: &mut Desktop, window: WindowHandle) {
        let Some(Rect { width, height, .. }) = desktop.bounds(window) else {
            return;
        };
        desktop.draw_box(window, 0, 0, width, height);
        desktop.draw_line(window, 0, TITLE_HEIGHT, width - 1, TITLE_HEIGHT);
        desktop.draw_string_box(window, 1, 1, width - 2, TITLE_HEIGHT - 1, self.title, Justify::Center);
    }
}

struct TraceSession {
    ws: WindowSystem,
    log: CallLog,
}

impl TraceSession {
    fn new(config: &ToolkitConfig) -> Self {
        let surface = RecordingSurface::new(config.display.width, config.display.height);
        let log = surface.log();
        let mut ws = WindowSystem::from_config(config, Box::new(surface));
        ws.set_default_font(Some(Font::new("fixed_5x8", 8, 5)));

        Self { ws, log }
    }

    fn flush(&self, step: &str) {
        let calls = self.log.take();
        let paints = calls.iter().filter(|call| call.is_paint()).count();
        log::info!("{step}: {} surface calls ({paints} paint)", calls.len());
        for call in &calls {
            match call {
                SurfaceCall::SetClip(area) => log::debug!("  clip {area:?}"),
                other => log::debug!("  {other:?}"),
            }
        }
    }

    fn run(&mut self) -> Result<(), TraceError> {
        log::info!("Tracing with {} placement", self.ws.manager_name());

        let background = self
            .ws
            .create_window(None, &WindowInit::new(0, 0, 120, 80).with_show(true))?;
        self.flush("show background window");

        let panel = self.ws.create(
            None,
            &WindowInit::new(60, 40, 100, 70),
            &TITLED_PANEL,
            WindowFlags::ENABLED,
        )?;
        self.ws.set_visible(panel, true);
        self.flush("show panel");

        self.ws.desktop_mut().fill_circle(background, 30, 30, 12);
        self.ws.desktop_mut().draw_pixel(panel, 5, 20);
        self.flush("draw");

        self.ws.move_to(panel, 400, 400);
        log::info!("Panel requested at (400, 400), placed at {:?}", self.ws.bounds(panel));
        self.flush("move panel off-screen");

        self.ws.raise(background);
        self.flush("raise background");

        self.ws.set_min_max(panel, MinMax::Maximized);
        log::info!("Panel is {:?} at {:?}", self.ws.min_max(panel), self.ws.bounds(panel));
        self.flush("maximize panel");

        self.ws.set_visible(panel, false);
        self.flush("hide panel");

        let storage = self.ws.destroy(panel);
        log::info!("Destroyed panel, caller storage returned: {}", storage.is_some());
        self.ws.destroy(background);
        self.flush("destroy");

        let stats = self.ws.desktop().heap_stats();
        log::info!(
            "Heap: {} allocations, {} releases, {} failures, {} bytes in use",
            stats.allocations,
            stats.releases,
            stats.failures,
            stats.bytes_in_use
        );
        Ok(())
    }
}

fn load_config() -> Result<ToolkitConfig, TraceError> {
    let config = match std::env::args().nth(1) {
        Some(path) => ToolkitConfig::load_from_file(&path)?,
        None => ToolkitConfig::default(),
    };
    config.validate().map_err(TraceError::InvalidConfig)?;
    Ok(config)
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init();
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    logging::init_with_level(&config.log_level);

    let mut session = TraceSession::new(&config);
    if let Err(e) = session.run() {
        log::error!("Trace failed: {e}");
        std::process::exit(1);
    }
}
