use std::io;
use std::rc::Rc;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::config::Config;
use crate::debug_log;
use crate::menu::{EntryId, MenuCatalog, MenuEntry, SelectionState};

use super::help::render_help;
use super::main_scene::render_main_scene;
use super::sidebar::render_sidebar;
use super::spinner::Spinner;

/// Degrees turned per manual rotate key press.
const NUDGE_DEGREES: f64 = 15.0;

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    MainScene,
}

/// Application state for the TUI.
pub struct App {
    /// Application configuration.
    pub config: Config,

    /// Selected entry and model rotation, backed by the catalog.
    pub selection: SelectionState,

    /// Drives the model rotation from wall-clock time.
    pub spinner: Spinner,

    /// Entry ids in the order the sidebar lists them.
    order: Vec<EntryId>,

    /// Index into `order` of the entry under the cursor.
    pub cursor: usize,

    /// Which panel has focus.
    pub focus: Focus,

    /// Whether the sidebar is visible.
    pub sidebar_visible: bool,

    /// Whether the help overlay is shown.
    pub show_help: bool,

    /// Whether the app should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance around an already built catalog.
    pub fn new(config: Config, catalog: Rc<MenuCatalog>) -> Self {
        let order = catalog
            .sections()
            .into_iter()
            .flat_map(|(_, items)| items.into_iter().map(|e| e.id))
            .collect();

        let mut selection = SelectionState::new(catalog);
        selection.subscribe(|entry| debug_log::log_selection(&entry.name, &entry.id.to_string()));

        let spinner = Spinner::new(config.rotation_period());

        Self {
            config,
            selection,
            spinner,
            order,
            cursor: 0,
            focus: Focus::default(),
            sidebar_visible: true,
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Run the application main loop.
    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Force a full clear to sync ratatui's internal state with the actual terminal
        terminal.clear()?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick = self.config.tick();
        loop {
            self.spinner.tick(Instant::now(), &mut self.selection);

            terminal.draw(|frame| self.render(frame))?;

            // The poll timeout doubles as the animation frame interval.
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();

        if self.show_help {
            render_help(frame, area);
            return;
        }

        if self.sidebar_visible {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(self.config.sidebar_width),
                    Constraint::Fill(1),
                ])
                .split(area);
            render_sidebar(frame, chunks[0], self);
            render_main_scene(frame, chunks[1], self);
        } else {
            render_main_scene(frame, area, self);
        }

        if let Some(ref msg) = self.status_message {
            let status_area = Rect {
                x: area.x,
                y: area.height.saturating_sub(1),
                width: area.width,
                height: 1,
            };
            let status = Paragraph::new(msg.as_str()).style(Style::default().fg(Color::Yellow));
            frame.render_widget(status, status_area);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.sidebar_visible = !self.sidebar_visible;
                if !self.sidebar_visible {
                    self.focus = Focus::MainScene;
                }
                debug_log::log_layout("sidebar", self.sidebar_visible);
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::MainScene,
                    Focus::MainScene if self.sidebar_visible => Focus::Sidebar,
                    Focus::MainScene => Focus::MainScene,
                };
                return;
            }
            KeyCode::Char('p') => {
                let paused = self.spinner.toggle_pause();
                debug_log::log_rotation_paused(paused, self.selection.rotation_phase());
                self.status_message = Some(if paused {
                    "Rotation paused".to_string()
                } else {
                    "Rotation resumed".to_string()
                });
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::MainScene => self.handle_main_scene_key(key),
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.cursor = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.cursor = self.order.len().saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select_cursor(),
            _ => {}
        }
    }

    fn handle_main_scene_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => self.selection.advance_rotation(-NUDGE_DEGREES),
            KeyCode::Char('l') | KeyCode::Right => self.selection.advance_rotation(NUDGE_DEGREES),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
        }
    }

    fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// The entry under the sidebar cursor.
    pub fn cursor_entry(&self) -> Option<&MenuEntry> {
        let id = *self.order.get(self.cursor)?;
        self.selection.catalog().get(id)
    }

    /// Make the entry under the cursor the current selection.
    fn select_cursor(&mut self) {
        let Some(entry) = self.cursor_entry().cloned() else {
            self.status_message = Some("Nothing to select".to_string());
            return;
        };

        if self.selection.select(&entry) {
            self.status_message = Some(format!("Selected {} ({})", entry.name, entry.price));
        }
    }
}
