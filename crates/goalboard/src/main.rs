use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod api;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod thunks;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use api::Api;
use goalboard_config::AppConfig;
use store::AppStore;
use theme::Theme;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting goalboard, logging to {}", log_file.display());

    let config = AppConfig::load();

    // Thunks spawn their API calls onto this runtime
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let _guard = runtime.enter();

    let api = Api::from_config(&config);
    let mut store = store::create_store(&config, api.clone());

    // Redraw whenever the state changed
    let dirty = Arc::new(AtomicBool::new(true));
    let listener_dirty = Arc::clone(&dirty);
    store.subscribe(move |_| listener_dirty.store(true, Ordering::Relaxed));

    store.dispatch(thunks::handle_initial_data(&api));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store, &dirty);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("goalboard failed: {:#}", err);
    }
    log::info!("Exiting goalboard");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut AppStore,
    dirty: &AtomicBool,
) -> Result<()> {
    let theme = Theme::default();

    loop {
        // Actions dispatched by finished API calls
        store.process_pending();

        if !store.state().running {
            break;
        }

        if dirty.swap(false, Ordering::Relaxed) {
            terminal.draw(|frame| {
                let area = frame.area();
                views::render(store.state(), &theme, area, frame);
            })?;
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Resize(_, _) => dirty.store(true, Ordering::Relaxed),
                _ => {}
            }
        }
    }

    Ok(())
}
