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
use std::sync::mpsc;
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod theme;
mod utils;
mod views;

use actions::{Action, GlobalAction};
use background::{spawn_background_worker, SharedState};
use middleware::{
    github::GitHubMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
    persistence::PersistenceMiddleware, Middleware,
};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init();
    log::info!("Starting gh-issue-tui (log file: {})", log_file.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        eprintln!("Error: {:#}", err);
    }

    log::info!("Exiting gh-issue-tui");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    // The tracked repository list is read from durable storage exactly once,
    // before the first render.
    let tracked = gh_issue_config::load_tracked_repositories();
    let mut app_state = AppState::new(tracked.clone());

    // action channel: main thread + dispatcher re-entry -> background worker
    // result channel: background worker -> main thread reducers
    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let shared: SharedState = Arc::new(RwLock::new(app_state.clone()));

    let middleware: Vec<Box<dyn Middleware + Send>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(GitHubMiddleware::new()?),
        Box::new(PersistenceMiddleware::new(tracked)?),
    ];

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
    );

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&app_state, area, frame);
        })?;

        if !app_state.running {
            break;
        }

        // Forward raw key presses into the middleware chain
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let _ = action_tx.send(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }

        // Apply actions the worker forwarded for reduction
        let mut reduced = false;
        while let Ok(action) = result_rx.try_recv() {
            app_state = reducers::reduce(app_state, &action);
            reduced = true;
        }

        // Publish the new snapshot so middleware sees current state
        if reduced {
            if let Ok(mut snapshot) = shared.write() {
                *snapshot = app_state.clone();
            }
        }
    }

    drop(action_tx);
    let _ = worker.join();
    Ok(())
}
