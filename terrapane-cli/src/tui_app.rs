//! TUI application: event loop and screen composition.
//!
//! The loop is tick-driven: crossterm events are handled as they arrive, and
//! every tick advances the map transition, drains completed search attempts,
//! and mirrors map move events into the shared camera before redrawing.
//!
//! The terminal is acquired in [`App::new`] and restored in `Drop`, so
//! teardown runs exactly once even when the loop exits with an error.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::{Constraint, Layout};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use terrapane::camera::{Camera, CameraProvider, SharedCamera, INITIAL_CENTER, INITIAL_ZOOM};
use terrapane::geocode::{MapboxGeocoder, PlaceKind};
use terrapane::map::MapControl;
use terrapane::search::{CameraCommand, SearchController};

use crate::error::CliError;
use crate::ui::map_view::{PAN_STEP, ZOOM_STEP};
use crate::ui::widgets::{ErrorBanner, SearchBar, StatusLine};
use crate::ui::TerminalMap;

/// UI tick rate; also the animation step interval.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Run the interactive viewer until the user quits or `cancel` fires.
pub fn run_tui(
    search: SearchController<MapboxGeocoder>,
    cancel: CancellationToken,
) -> Result<(), CliError> {
    let mut app = App::new(search).map_err(CliError::Io)?;

    tracing::info!("TUI started");
    let result = app.run(cancel);
    tracing::info!("TUI stopped");

    result
}

struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    map: TerminalMap,
    shared_camera: SharedCamera,
    moves: broadcast::Receiver<Camera>,
    search: SearchController<MapboxGeocoder>,
    query: String,
    kind: PlaceKind,
    should_quit: bool,
}

impl App {
    fn new(search: SearchController<MapboxGeocoder>) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let map = TerminalMap::new();
        let moves = map.subscribe_moves();

        Ok(Self {
            terminal,
            map,
            shared_camera: SharedCamera::new(),
            moves,
            search,
            query: String::new(),
            kind: PlaceKind::default(),
            should_quit: false,
        })
    }

    /// Restore terminal to normal state.
    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn run(&mut self, cancel: CancellationToken) -> Result<(), CliError> {
        let mut last_tick = Instant::now();

        while !self.should_quit && !cancel.is_cancelled() {
            self.draw().map_err(CliError::Io)?;

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).map_err(CliError::Io)? {
                if let Event::Key(key) = event::read().map_err(CliError::Io)? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.on_tick();
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    fn on_tick(&mut self) {
        self.map.tick(Instant::now());

        if let Some(command) = self.search.poll() {
            self.apply_command(command);
            // Text clears on success only; a returned command implies success.
            self.query.clear();
        }

        // Mirror map movement into the shared camera for display.
        loop {
            match self.moves.try_recv() {
                Ok(camera) => self.shared_camera.receive_move(camera),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "camera mirror lagged behind move events");
                }
                Err(_) => break,
            }
        }
    }

    fn apply_command(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::FlyTo { center, zoom } => self.map.fly_to(center, zoom),
            CameraCommand::FitBounds { bounds, padding } => self.map.fit_bounds(bounds, padding),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.map.fly_to(INITIAL_CENTER, INITIAL_ZOOM),
            KeyCode::Enter => {
                // The loading flag disables submission, not just the UI hint.
                if !self.search.is_loading() {
                    self.search.submit(&self.query, self.kind);
                }
            }
            KeyCode::Tab => self.kind = self.kind.toggled(),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Left => self.map.pan(-PAN_STEP, 0.0),
            KeyCode::Right => self.map.pan(PAN_STEP, 0.0),
            KeyCode::Up => self.map.pan(0.0, -PAN_STEP),
            KeyCode::Down => self.map.pan(0.0, PAN_STEP),
            KeyCode::PageUp => self.map.zoom(ZOOM_STEP),
            KeyCode::PageDown => self.map.zoom(-ZOOM_STEP),
            KeyCode::Char(c) if !ctrl => self.query.push(c),
            _ => {}
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        // Split field borrows so the terminal closure can use the rest.
        let Self {
            terminal,
            map,
            shared_camera,
            search,
            query,
            kind,
            ..
        } = self;

        let error = search.error().map(str::to_string);
        let loading = search.is_loading();
        let camera = shared_camera.camera();
        let kind = *kind;

        terminal.draw(|frame| {
            draw_ui(frame, map, query, kind, loading, camera, error.as_deref());
        })?;

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn draw_ui(
    frame: &mut Frame,
    map: &mut TerminalMap,
    query: &str,
    kind: PlaceKind,
    loading: bool,
    camera: Camera,
    error: Option<&str>,
) {
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ];
    if error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    let areas = Layout::vertical(constraints).split(frame.area());

    frame.render_widget(SearchBar::new(query, kind, loading), areas[0]);
    map.render(frame, areas[1]);
    frame.render_widget(StatusLine::new(camera), areas[2]);
    if let Some(message) = error {
        frame.render_widget(ErrorBanner::new(message), areas[3]);
    }
}
