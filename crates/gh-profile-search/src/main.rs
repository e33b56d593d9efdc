use gh_profile_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event as TermEvent, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod utils;
mod view_models;
mod views;

use actions::{Action, Event, GlobalAction, SearchAction};
use background::{spawn_background_worker, SharedState};
use middleware::{
    github_middleware::GitHubMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware, navigation_middleware::NavigationMiddleware,
    text_input_middleware::TextInputMiddleware, Middleware,
};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let log_path = logger::init()?;
    log::info!("Starting gh-profile-search, logging to {}", log_path.display());

    let config = AppConfig::load();

    // Middleware executes in this order
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(GitHubMiddleware::new(&config)?),
    ];

    let initial_state = AppState::new(config);
    let shared_state: SharedState = Arc::new(RwLock::new(initial_state.clone()));

    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared_state),
        middleware,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        initial_state,
        &shared_state,
        &action_tx,
        &result_rx,
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Unblock the worker if the loop ended without a Quit
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    drop(action_tx);
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    if let Err(err) = &result {
        log::error!("Application error: {:#}", err);
    }

    log::info!("Exiting gh-profile-search");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
    shared_state: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&state, area, frame);
        })?;

        if !state.running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let TermEvent::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    send(action_tx, Action::Global(GlobalAction::KeyPressed(key)))?;
                }
            }
        }

        // Reduce everything the middleware forwarded since the last frame
        while let Ok(action) = result_rx.try_recv() {
            let submitted = matches!(action, Action::Search(SearchAction::Submit));
            state = reducers::app_reducer::reduce(state, &action);
            publish(shared_state, &state);

            if submitted {
                send(
                    action_tx,
                    Action::event(Event::SearchSubmitted {
                        query: state.search.query.clone(),
                    }),
                )?;
            }
        }
    }

    Ok(())
}

fn send(action_tx: &Sender<Action>, action: Action) -> anyhow::Result<()> {
    action_tx
        .send(action)
        .map_err(|_| anyhow::anyhow!("Background worker is no longer running"))
}

/// Make the reduced state visible to the middleware thread
fn publish(shared_state: &SharedState, state: &AppState) {
    match shared_state.write() {
        Ok(mut shared) => *shared = state.clone(),
        Err(e) => log::error!("Failed to write shared state: {}", e),
    }
}
