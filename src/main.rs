use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{collections::HashMap, io, sync::atomic::Ordering, time::Duration};

use dogtui::api::DogApiClient;
use dogtui::config::Config;
use dogtui::services::{self, ApiRequest, ApiResponse};
use dogtui::{log_debug, model, ui, ImagePreviewState, DEBUG_MODE};

mod app;
mod handlers;

/// Cute dog images in your terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/dogtui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (h/l breed, j/k scroll)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

pub struct App {
    pub model: model::Model,

    api_tx: tokio::sync::mpsc::UnboundedSender<ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,
    image_picker: Option<ratatui_image::picker::Picker>,
    image_update_tx: tokio::sync::mpsc::UnboundedSender<(String, ImagePreviewState)>,
    image_update_rx: tokio::sync::mpsc::UnboundedReceiver<(String, ImagePreviewState)>,
    open_command: Option<String>,

    /// Maps image URLs to their preview states
    image_state_map: HashMap<String, ImagePreviewState>,
}

impl App {
    fn new(config: Config) -> Self {
        let client = DogApiClient::new(config.base_url.clone(), config.image_count);

        // Spawn API service worker
        let (api_tx, api_rx) = services::spawn_api_service(client);

        // Create channel for decoded images
        let (image_update_tx, image_update_rx) = tokio::sync::mpsc::unbounded_channel();

        let image_picker = if config.image_preview_enabled {
            Some(build_image_picker(&config.image_protocol))
        } else {
            log_debug("Image preview disabled in config");
            None
        };

        let mut model = model::Model::new(config.vim_mode);
        model.ui.can_open_links = config.open_command.is_some();
        model.ui.image_preview_enabled = image_picker.is_some();

        let mut app = App {
            model,
            api_tx,
            api_rx,
            image_picker,
            image_update_tx,
            image_update_rx,
            open_command: config.open_command,
            image_state_map: HashMap::new(),
        };

        app.mount();

        app
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }
}

/// Detect the terminal graphics protocol, honoring the configured override
fn build_image_picker(image_protocol: &str) -> ratatui_image::picker::Picker {
    use ratatui_image::picker::{Picker, ProtocolType};

    let mut picker = match Picker::from_query_stdio() {
        Ok(p) => p,
        Err(e) => {
            log_debug(&format!("Image preview: Failed to detect terminal: {}", e));
            Picker::from_fontsize((8, 16)) // Fallback font size
        }
    };

    let font_size = picker.font_size();
    log_debug(&format!("Image font size: {}x{}", font_size.0, font_size.1));

    match image_protocol.to_lowercase().as_str() {
        "auto" => log_debug("Image preview: Auto-detected protocol"),
        "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
        "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
        "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
        "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
        unknown => log_debug(&format!(
            "Image preview: Unknown protocol '{}', using auto-detect",
            unknown
        )),
    }

    picker
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    let (mut config, config_path) = Config::load(args.config)?;
    match &config_path {
        Some(path) => log_debug(&format!("Loaded config from: {:?}", path)),
        None => log_debug("No config file found, using defaults"),
    }

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    // Initialize app (queries the terminal for image support before raw mode)
    let mut app = App::new(config);

    // Setup terminal, undoing raw mode and the alternate screen if any step fails
    enable_raw_mode()?;
    let mut terminal = restore_on_error(setup_terminal(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Run `restore` before handing back an error
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app.model, &mut app.image_state_map);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Process decoded images from background tasks (non-blocking)
        while let Ok((url, image_state)) = app.image_update_rx.try_recv() {
            app.apply_image_update(url, image_state);
        }

        // Short poll keeps fetch results flowing to the screen while idle
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_on_error_runs_cleanup_on_failure() {
        let mut restored = false;
        let result: Result<()> = restore_on_error(Err(anyhow::anyhow!("no tty")), || {
            restored = true;
        });

        assert!(result.is_err());
        assert!(restored);
    }

    #[test]
    fn test_restore_on_error_skips_cleanup_on_success() {
        let mut restored = false;
        let result = restore_on_error(Ok(7), || restored = true);

        assert_eq!(result.unwrap(), 7);
        assert!(!restored);
    }
}
