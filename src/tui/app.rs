use super::{handlers, ui};
use crate::{
    app::{AppState, FormController, FormField, FormInput, submit_warning},
    error::Result,
    storage::BlobStore,
    view::{DetailView, ListView},
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect, widgets::ListState};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Form,
}

pub struct App<B: BlobStore> {
    pub state: AppState,
    pub controller: FormController<B>,
    pub form: FormInput,
    pub focus: FormField,
    pub input_mode: InputMode,
    pub list_state: ListState,
    /// Inner area of the list pane from the last draw, for mouse hits
    pub list_area: Rect,
    pub detail_scroll: u16,
    pub date_format: String,
    pub show_help: bool,
    pub message: Option<String>,
}

impl<B: BlobStore> App<B> {
    pub fn new(controller: FormController<B>, date_format: impl Into<String>) -> Self {
        let state = controller.load_state();
        let mut list_state = ListState::default();
        list_state.select(state.list_view().active_index());

        Self {
            state,
            controller,
            form: FormInput::default(),
            focus: FormField::Name,
            input_mode: InputMode::Normal,
            list_state,
            list_area: Rect::default(),
            detail_scroll: 0,
            date_format: date_format.into(),
            show_help: false,
            message: None,
        }
    }

    pub fn list_view(&self) -> ListView {
        self.state.list_view()
    }

    pub fn detail_view(&self) -> DetailView {
        self.state.detail_view(&self.date_format)
    }

    /// Position of the selection in newest-first order.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.state.selected_id()?;
        self.state.newest_first().iter().position(|p| p.id() == id)
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        let id = match self.state.newest_first().get(index) {
            Some(place) => place.id().to_string(),
            None => return false,
        };
        let changed = self.state.selected_id() != Some(id.as_str());
        self.state.select(&id);
        if changed {
            self.detail_scroll = 0;
        }
        true
    }

    pub fn next(&mut self) {
        if self.state.is_empty() {
            return;
        }
        let index = match self.selected_index() {
            Some(i) => (i + 1).min(self.state.len() - 1),
            None => 0,
        };
        self.select_index(index);
    }

    pub fn previous(&mut self) {
        if self.state.is_empty() {
            return;
        }
        let index = self.selected_index().map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.select_index(index);
    }

    pub fn first(&mut self) {
        self.select_index(0);
    }

    pub fn last(&mut self) {
        if let Some(last) = self.state.len().checked_sub(1) {
            self.select_index(last);
        }
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn open_form(&mut self) {
        self.focus = FormField::Name;
        self.input_mode = InputMode::Form;
    }

    /// Closes the form; typed values are kept for the next open.
    pub fn close_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn type_char(&mut self, c: char) {
        self.form.value_mut(self.focus).push(c);
    }

    pub fn backspace(&mut self) {
        self.form.value_mut(self.focus).pop();
    }

    /// Inserts a line break; ignored on single-line fields.
    pub fn newline(&mut self) -> bool {
        if !self.focus.is_multiline() {
            return false;
        }
        self.form.value_mut(self.focus).push('\n');
        true
    }

    pub fn submit_form(&mut self) {
        match self.controller.submit(&mut self.state, &mut self.form) {
            Ok(submitted) => {
                let label = self
                    .state
                    .get(&submitted.id)
                    .map(|p| p.display_name())
                    .unwrap_or_default();
                self.message = Some(if submitted.saved {
                    format!("Added {}", label)
                } else {
                    format!("Added {} (not saved, see log)", label)
                });
                self.detail_scroll = 0;
                self.focus = FormField::Name;
                self.input_mode = InputMode::Normal;
            }
            Err(e) => {
                self.message = Some(submit_warning(&e));
            }
        }
    }

    /// Selects the list row under a click, if any.
    pub fn handle_mouse_click(&mut self, column: u16, row: u16) {
        let area = self.list_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside || self.input_mode != InputMode::Normal {
            return;
        }
        let index = self.list_state.offset() + (row - area.y) as usize;
        self.select_index(index);
    }
}

pub fn run_tui<B: BlobStore>(controller: FormController<B>, date_format: &str) -> Result<()> {
    let mut app = App::new(controller, date_format);
    tracing::info!(places = app.state.len(), "Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with error");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: BlobStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<B>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let quit = match app.input_mode {
                    InputMode::Normal => handlers::handle_normal_mode(app, key),
                    InputMode::Form => handlers::handle_form_mode(app, key),
                };
                if quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse_event) => handlers::handle_mouse(app, mouse_event),
            _ => {}
        }
    }
}
