use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::{error, info};

use crate::{
    app::{Portfolio, ui},
    models::LineItemId,
};

/// Editable column of the selected row.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum Field {
    #[strum(to_string = "Base")]
    BaseAmount,
    #[strum(to_string = "Mode")]
    MarginMode,
    #[strum(to_string = "Margin")]
    MarginValue,
    #[strum(to_string = "Class")]
    WithholdingClass,
}

impl Field {
    fn next(self) -> Self {
        let fields: Vec<Field> = Field::iter().collect();
        let i = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(i + 1) % fields.len()]
    }

    fn previous(self) -> Self {
        let fields: Vec<Field> = Field::iter().collect();
        let i = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(i + fields.len() - 1) % fields.len()]
    }
}

pub struct App {
    portfolio: Portfolio,
    table_state: TableState,
    field: Field,
    export_path: String,
    popup_message: Option<String>,
    error_popup: Option<String>,
}

impl App {
    pub fn new(portfolio: Portfolio, export_path: String) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            portfolio,
            table_state,
            field: Field::BaseAmount,
            export_path,
            popup_message: None,
            error_popup: None,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn popup_message(&self) -> &Option<String> {
        &self.popup_message
    }

    pub fn error_popup(&self) -> &Option<String> {
        &self.error_popup
    }

    pub fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.error_popup = None;
    }

    fn selected_id(&self) -> Option<LineItemId> {
        self.table_state
            .selected()
            .and_then(|i| self.portfolio.rows().get(i))
            .map(|row| *row.id())
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if self.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.portfolio,
                &mut self.table_state,
                self.field,
                &self.popup_message,
                &self.error_popup,
            )
        })?;
        Ok(())
    }

    /// Applies one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.error_popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.clear_error_popup();
            }
            return false;
        }

        if self.popup_message.is_some() {
            self.clear_popup();
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Down => self.select_next_row(),
            KeyCode::Up => self.select_previous_row(),
            KeyCode::Right | KeyCode::Tab => self.field = self.field.next(),
            KeyCode::Left | KeyCode::BackTab => self.field = self.field.previous(),
            KeyCode::F(2) => {
                let id = self.portfolio.add_row();
                self.table_state.select(Some(self.portfolio.rows().len() - 1));
                info!(%id, "added line item");
            }
            KeyCode::F(3) => self.remove_selected_row(),
            KeyCode::F(4) => match self.portfolio.export_summary(&self.export_path) {
                Ok(path) => self.show_popup(&format!("Summary exported to {}", path)),
                Err(e) => {
                    error!("{:?}", e);
                    self.show_error_popup(&format!("Error exporting summary: {:?}", e));
                }
            },
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected_field(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                if let Some(text) = self.selected_text_mut() {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = self.selected_text_mut() {
                    text.pop();
                }
            }
            _ => {}
        }

        false
    }

    fn select_next_row(&mut self) {
        let len = self.portfolio.rows().len();
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn select_previous_row(&mut self) {
        let len = self.portfolio.rows().len();
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn remove_selected_row(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };

        if self.portfolio.remove_row(id) {
            info!(%id, "removed line item");
            let last = self.portfolio.rows().len() - 1;
            if self.table_state.selected().is_some_and(|i| i > last) {
                self.table_state.select(Some(last));
            }
        } else {
            self.show_error_popup("At least one line item is required");
        }
    }

    fn toggle_selected_field(&mut self) {
        let field = self.field;
        let Some(row) = self.selected_id().and_then(|id| self.portfolio.row_mut(id)) else {
            return;
        };

        match field {
            Field::MarginMode => {
                let mode = row.margin_mode().toggled();
                row.set_margin_mode(mode);
            }
            Field::WithholdingClass => {
                let class = row.withholding_class().toggled();
                row.set_withholding_class(class);
            }
            Field::BaseAmount | Field::MarginValue => {}
        }
    }

    fn selected_text_mut(&mut self) -> Option<&mut String> {
        let field = self.field;
        let id = self.selected_id()?;
        let row = self.portfolio.row_mut(id)?;

        match field {
            Field::BaseAmount => Some(row.base_amount_mut()),
            Field::MarginValue => Some(row.margin_value_mut()),
            Field::MarginMode | Field::WithholdingClass => None,
        }
    }
}
