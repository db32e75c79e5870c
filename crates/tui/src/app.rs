use std::{io, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use predictor_core::{
    form::SUGGESTION_LIMIT, team_options, Autocomplete, Catalog, Field, FieldKind,
    PredictionForm, PredictionStore, StoreError, SubmissionHandler, SubmissionStatus,
    SubmitRejected,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::{spawn, sync::mpsc};
use tracing::{debug, error, info};

use crate::input::{is_date_char, LineEditor, MAX_FIELD_LEN};

const TICK_RATE: Duration = Duration::from_millis(250);
const TITLE: &str = "Powley's Predictor 25/26";
const SUBTITLE: &str = "Fill out your predictions for the upcoming season!";
const MIN_VALUE_WIDTH: u16 = 20;
const DATE_LEN: usize = 10;

const DETAIL_FIELDS: [Field; 2] = [Field::Name, Field::Email];
const LEFT_COLUMN: [Field; 9] = [
    Field::TitleWinner,
    Field::Top4First,
    Field::Top4Second,
    Field::Top4Third,
    Field::RelegatedFirst,
    Field::RelegatedSecond,
    Field::RelegatedThird,
    Field::FaCupWinner,
    Field::ClWinner,
];
const RIGHT_COLUMN: [Field; 6] = [
    Field::ManagerToLeave,
    Field::ManagerLeaveDate,
    Field::HitSigning,
    Field::FlopSigning,
    Field::Overachievers,
    Field::Underachievers,
];

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    selection_bg: Color,
    selection_fg: Color,
    success: Color,
    danger: Color,
    on_accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            success: Color::Green,
            danger: Color::Red,
            on_accent: Color::Black,
        }
    }
}

/// Keyboard focus: one of the form fields, or the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    const COUNT: usize = Field::ALL.len() + 1;

    fn index(self) -> usize {
        match self {
            Focus::Field(field) => Field::ALL
                .iter()
                .position(|candidate| *candidate == field)
                .unwrap_or(0),
            Focus::Submit => Field::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        Field::ALL
            .get(index)
            .copied()
            .map(Focus::Field)
            .unwrap_or(Focus::Submit)
    }

    fn step(self, delta: isize) -> Self {
        let count = Self::COUNT as isize;
        let next = (self.index() as isize + delta).rem_euclid(count);
        Self::from_index(next as usize)
    }
}

/// Team chooser opened over a choice field.
#[derive(Debug, Clone)]
struct TeamPicker {
    field: Field,
    options: Vec<String>,
    cursor: usize,
}

impl TeamPicker {
    fn move_cursor(&mut self, delta: isize) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    fn selected(&self) -> Option<&str> {
        self.options.get(self.cursor).map(String::as_str)
    }
}

enum AppEvent {
    Input(Event),
    Tick,
    Submitted(Result<(), StoreError>),
}

/// Terminal front end for the prediction form.
pub struct PredictorApp<S> {
    handler: SubmissionHandler<S>,
    form: PredictionForm,
    catalog: Option<Catalog>,
    catalog_rx: Option<mpsc::Receiver<Catalog>>,
    event_tx: Option<mpsc::Sender<AppEvent>>,
    focus: Focus,
    editor: LineEditor,
    autocomplete: Autocomplete,
    picker: Option<TeamPicker>,
    focused_value: Option<Rect>,
    status: String,
    should_quit: bool,
    theme: Theme,
}

impl<S: PredictionStore + 'static> PredictorApp<S> {
    pub fn new(handler: SubmissionHandler<S>) -> Self {
        Self {
            handler,
            form: PredictionForm::new(),
            catalog: None,
            catalog_rx: None,
            event_tx: None,
            focus: Focus::Field(Field::Name),
            editor: LineEditor::default(),
            autocomplete: Autocomplete::default(),
            picker: None,
            focused_value: None,
            status: "Loading teams…".to_string(),
            should_quit: false,
            theme: Theme::default(),
        }
    }

    /// Receive the catalog once the background load settles.
    pub fn attach_catalog(&mut self, receiver: mpsc::Receiver<Catalog>) {
        self.catalog_rx = Some(receiver);
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx.clone());
        self.event_tx = Some(event_tx);

        let mut catalog_rx = self.catalog_rx.take();

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.should_quit {
                break;
            }

            if let Some(rx) = catalog_rx.as_mut() {
                let mut catalog_closed = false;
                tokio::select! {
                    maybe_event = event_rx.recv() => {
                        if !self.process_app_event(maybe_event) {
                            break;
                        }
                    }
                    maybe_catalog = rx.recv() => {
                        match maybe_catalog {
                            Some(catalog) => self.handle_catalog(catalog),
                            None => error!("Catalog channel closed before delivery"),
                        }
                        catalog_closed = true;
                    }
                }
                if catalog_closed {
                    catalog_rx = None;
                    if self.catalog.is_none() {
                        self.handle_catalog(Catalog::default());
                    }
                }
            } else {
                let maybe_event = event_rx.recv().await;
                if !self.process_app_event(maybe_event) {
                    break;
                }
            }

            if self.should_quit {
                break;
            }
        }

        restore_terminal(&mut terminal)?;
        self.event_tx = None;
        Ok(())
    }

    fn handle_catalog(&mut self, catalog: Catalog) {
        info!(
            teams = catalog.teams.len(),
            players = catalog.players.len(),
            "Catalog received"
        );
        self.status = if catalog.teams.is_empty() {
            "Team list unavailable; choice questions can be left blank".to_string()
        } else {
            format!("Loaded {} teams", catalog.teams.len())
        };
        self.catalog = Some(catalog);
    }

    fn process_app_event(&mut self, maybe_event: Option<AppEvent>) -> bool {
        match maybe_event {
            Some(AppEvent::Input(Event::Key(key))) => {
                if key.kind != KeyEventKind::Release {
                    self.handle_key(key);
                }
                true
            }
            Some(AppEvent::Input(_)) | Some(AppEvent::Tick) => true,
            Some(AppEvent::Submitted(outcome)) => {
                self.finish_submit(outcome);
                true
            }
            None => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL {
            match key.code {
                KeyCode::Char('c') => {
                    self.request_quit();
                    return;
                }
                KeyCode::Char('s') => {
                    self.start_submit();
                    return;
                }
                _ => {}
            }
        }

        if self.picker.is_some() {
            self.handle_picker_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.move_focus(1);
                return;
            }
            KeyCode::BackTab => {
                self.move_focus(-1);
                return;
            }
            KeyCode::Esc => {
                if self.autocomplete.is_open() {
                    self.autocomplete.clear();
                } else {
                    self.request_quit();
                }
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.start_submit(),
                KeyCode::Up => self.move_focus(-1),
                KeyCode::Down => self.move_focus(1),
                _ => {}
            },
            Focus::Field(field) => match field.kind() {
                FieldKind::Team => self.handle_team_key(field, key),
                FieldKind::Player => self.handle_player_key(field, key),
                FieldKind::Text | FieldKind::Email | FieldKind::Date => {
                    self.handle_text_key(field, key);
                }
            },
        }
    }

    /// Quit unless a write is in flight; an issued write always settles.
    fn request_quit(&mut self) {
        if self.handler.can_submit() {
            self.should_quit = true;
        } else {
            self.status = "Waiting for the submission to finish...".to_string();
        }
    }

    fn move_focus(&mut self, delta: isize) {
        self.focus = self.focus.step(delta);
        self.on_focus_changed();
    }

    fn focus_field(&mut self, field: Field) {
        self.focus = Focus::Field(field);
        self.on_focus_changed();
    }

    fn on_focus_changed(&mut self) {
        self.autocomplete.clear();
        if let Focus::Field(field) = self.focus {
            self.editor = LineEditor::at_end(self.form.get(field));
        }
    }

    fn handle_team_key(&mut self, field: Field, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.open_picker(field),
            KeyCode::Backspace | KeyCode::Delete => {
                if !self.form.get(field).is_empty() {
                    debug!(?field, "Choice cleared");
                    self.form.clear(field);
                }
            }
            KeyCode::Up => self.move_focus(-1),
            KeyCode::Down => self.move_focus(1),
            _ => {}
        }
    }

    fn open_picker(&mut self, field: Field) {
        let Some(catalog) = self.catalog.as_ref() else {
            self.status = "Teams are still loading".to_string();
            return;
        };
        if catalog.teams.is_empty() {
            self.status = "No teams available".to_string();
            return;
        }

        let options: Vec<String> = team_options(&catalog.teams, &self.form, field)
            .into_iter()
            .map(str::to_string)
            .collect();
        let current = self.form.get(field);
        let cursor = options
            .iter()
            .position(|option| option == current)
            .unwrap_or(0);
        self.picker = Some(TeamPicker {
            field,
            options,
            cursor,
        });
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.picker = None,
            KeyCode::Up | KeyCode::Char('k') => picker.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => picker.move_cursor(1),
            KeyCode::PageUp => picker.move_cursor(-10),
            KeyCode::PageDown => picker.move_cursor(10),
            KeyCode::Home => picker.cursor = 0,
            KeyCode::End => picker.move_cursor(isize::MAX / 2),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let field = picker.field;
                if let Some(team) = picker.selected().map(str::to_string) {
                    info!(?field, %team, "Team selected");
                    self.form.set(field, team);
                }
                self.picker = None;
                self.move_focus(1);
            }
            _ => {}
        }
    }

    fn handle_player_key(&mut self, field: Field, key: KeyEvent) {
        if self.autocomplete.is_open() {
            match key.code {
                KeyCode::Up => {
                    self.autocomplete.move_cursor(-1);
                    return;
                }
                KeyCode::Down => {
                    self.autocomplete.move_cursor(1);
                    return;
                }
                KeyCode::Enter => {
                    if let Some(name) = self.autocomplete.select() {
                        self.editor = LineEditor::at_end(&name);
                        self.form.set(field, name);
                    }
                    return;
                }
                _ => {}
            }
        }

        if self.handle_text_key(field, key) {
            let catalog = self.catalog.as_ref().map(|catalog| &catalog.players);
            match catalog {
                Some(players) => self.autocomplete.update(players, self.form.get(field)),
                None => self.autocomplete.clear(),
            }
        }
    }

    /// Apply an editing key to a free-text field. Returns whether the value changed.
    fn handle_text_key(&mut self, field: Field, key: KeyEvent) -> bool {
        let mut value = self.form.get(field).to_string();
        let changed = match key.code {
            KeyCode::Char(ch) if is_text_input(key.modifiers) => {
                if field.kind() == FieldKind::Date {
                    is_date_char(ch) && self.editor.insert(&mut value, ch, DATE_LEN)
                } else {
                    self.editor.insert(&mut value, ch, MAX_FIELD_LEN)
                }
            }
            KeyCode::Backspace => self.editor.backspace(&mut value),
            KeyCode::Delete => self.editor.delete(&mut value),
            KeyCode::Left => {
                self.editor.move_cursor(&value, -1);
                false
            }
            KeyCode::Right => {
                self.editor.move_cursor(&value, 1);
                false
            }
            KeyCode::Home => {
                self.editor.move_home();
                false
            }
            KeyCode::End => {
                self.editor.move_end(&value);
                false
            }
            KeyCode::Enter | KeyCode::Down => {
                self.move_focus(1);
                false
            }
            KeyCode::Up => {
                self.move_focus(-1);
                false
            }
            _ => false,
        };
        if changed {
            self.form.set(field, value);
        }
        changed
    }

    fn start_submit(&mut self) {
        let Some(sender) = self.event_tx.clone() else {
            self.status = "Internal error: event channel unavailable".to_string();
            error!("event_channel_missing");
            return;
        };

        let record = match self.handler.begin(&self.form) {
            Ok(record) => record,
            Err(SubmitRejected::InFlight) => {
                self.status = "Submission already in progress".to_string();
                return;
            }
            Err(SubmitRejected::Invalid(err)) => {
                info!(%err, "Submission blocked by validation");
                self.status = err.to_string();
                self.focus_field(err.field());
                return;
            }
        };

        self.picker = None;
        self.autocomplete.clear();
        self.status = "Submitting...".to_string();
        info!(email = %record.email, "Submitting prediction");
        let store = self.handler.store();
        spawn(async move {
            let outcome = store.insert(&record).await;
            if let Err(mpsc::error::SendError(AppEvent::Submitted(outcome))) =
                sender.send(AppEvent::Submitted(outcome)).await
            {
                match outcome {
                    Ok(()) => info!("Prediction stored after UI closed"),
                    Err(err) => error!(%err, "Prediction failed after UI closed"),
                }
            }
        });
    }

    fn finish_submit(&mut self, outcome: Result<(), StoreError>) {
        self.handler.complete(&mut self.form, outcome);
        if self.handler.status() == SubmissionStatus::Succeeded {
            self.focus_field(Field::Name);
        } else {
            self.on_focus_changed();
        }
        if let Some(message) = self.handler.message() {
            self.status = message.to_string();
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(LEFT_COLUMN.len() as u16 + 2),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);

        self.focused_value = None;
        self.render_header(frame, chunks[0]);
        self.render_details(frame, chunks[1]);
        self.render_predictions(frame, chunks[2]);
        self.render_submit(frame, chunks[3]);
        self.render_status(frame, chunks[4]);

        if self.autocomplete.is_open() {
            self.render_suggestions(frame);
        }
        if let Some(picker) = &self.picker {
            self.render_picker(frame, picker);
        } else {
            self.place_cursor(frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(self.theme.muted))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_details(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Your Details");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);
        for (field, column) in DETAIL_FIELDS.into_iter().zip(columns.iter()) {
            self.render_field_rows(frame, *column, &[field]);
        }
    }

    fn render_predictions(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Your Predictions");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);
        self.render_field_rows(frame, columns[0], &LEFT_COLUMN);
        self.render_field_rows(frame, columns[1], &RIGHT_COLUMN);
    }

    fn render_field_rows(&mut self, frame: &mut Frame, area: Rect, fields: &[Field]) {
        let label_width = label_width(fields, area.width);
        let visible = area.height as usize;
        let focused_row = fields
            .iter()
            .position(|field| self.focus == Focus::Field(*field));
        let offset = scroll_offset(focused_row, visible);

        for (row, field) in fields.iter().copied().enumerate().skip(offset).take(visible) {
            let y = area.y + (row - offset) as u16;
            let row_area = Rect::new(area.x, y, area.width, 1);
            let focused = self.focus == Focus::Field(field);
            if focused {
                self.focused_value = Some(Rect::new(
                    area.x + label_width,
                    y,
                    area.width.saturating_sub(label_width),
                    1,
                ));
            }

            let continues_group = row > offset
                && field.group().is_some()
                && fields[row - 1].group() == field.group();
            let label = if continues_group {
                String::new()
            } else {
                fit_label(field.label(), label_width)
            };
            let label_style = if focused {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.primary_fg)
            };

            let value = self.form.get(field);
            let value_span = if value.is_empty() {
                Span::styled(
                    self.placeholder_for(field),
                    Style::default().fg(self.theme.muted),
                )
            } else {
                Span::raw(value.to_string())
            };
            let value_style = if focused {
                Style::default()
                    .bg(self.theme.selection_bg)
                    .fg(self.theme.selection_fg)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(label, label_style),
                value_span,
            ]);
            frame.render_widget(Paragraph::new(line).style(value_style), row_area);
        }
    }

    fn placeholder_for(&self, field: Field) -> String {
        if field.kind() == FieldKind::Team {
            match &self.catalog {
                None => return "Loading teams…".to_string(),
                Some(catalog) if catalog.teams.is_empty() => {
                    return "No teams available".to_string()
                }
                Some(_) => {}
            }
        }
        field.placeholder().to_string()
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect) {
        let submitting = !self.handler.can_submit();
        let label = if submitting {
            "Submitting..."
        } else {
            "Submit Predictions"
        };
        let style = if submitting {
            Style::default().fg(self.theme.muted)
        } else if self.focus == Focus::Submit {
            Style::default()
                .bg(self.theme.accent)
                .fg(self.theme.on_accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.accent)
        };
        let button = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Status");
        let colour = match self.handler.status() {
            SubmissionStatus::Succeeded => self.theme.success,
            SubmissionStatus::Failed => self.theme.danger,
            SubmissionStatus::Idle | SubmissionStatus::Submitting => self.theme.primary_fg,
        };
        let primary = Line::from(Span::styled(
            self.status.clone(),
            Style::default().fg(colour),
        ));
        let help = Line::from(Span::styled(
            "Tab/↑↓ move  Enter choose  Del clear  Ctrl-S submit  Esc quit",
            Style::default().fg(self.theme.muted),
        ));
        let paragraph = Paragraph::new(vec![primary, help])
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_suggestions(&self, frame: &mut Frame) {
        let Some(anchor) = self.focused_value else {
            return;
        };
        let frame_area = frame.size();
        let x = anchor.x.min(frame_area.width.saturating_sub(1));
        let width = anchor.width.max(16).min(frame_area.width.saturating_sub(x));
        let height =
            (SUGGESTION_LIMIT as u16 + 2).min(frame_area.height.saturating_sub(anchor.y + 1));
        if width == 0 || height < 3 {
            return;
        }
        let area = Rect::new(x, anchor.y + 1, width, height);

        let items: Vec<ListItem> = self
            .autocomplete
            .suggestions()
            .iter()
            .map(|player| ListItem::new(player.web_name.clone()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Players"))
            .highlight_style(
                Style::default()
                    .bg(self.theme.selection_bg)
                    .fg(self.theme.selection_fg),
            );
        let mut state = ListState::default();
        state.select(Some(self.autocomplete.cursor()));

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_picker(&self, frame: &mut Frame, picker: &TeamPicker) {
        let frame_area = frame.size();
        let height = (picker.options.len() as u16 + 2)
            .min(frame_area.height.saturating_sub(2))
            .max(3);
        let area = centered_rect(40, height, frame_area);

        let items: Vec<ListItem> = picker
            .options
            .iter()
            .map(|team| ListItem::new(team.clone()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(picker.field.label()),
            )
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut state = ListState::default();
        state.select(Some(picker.cursor));

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn place_cursor(&self, frame: &mut Frame) {
        let (Focus::Field(field), Some(area)) = (self.focus, self.focused_value) else {
            return;
        };
        if field.kind() == FieldKind::Team {
            return;
        }
        let x = (area.x + self.editor.cursor() as u16).min(area.x + area.width.saturating_sub(1));
        frame.set_cursor(x, area.y);
    }
}

/// Label column width: the longest label plus a gap, leaving room for values.
fn label_width(fields: &[Field], area_width: u16) -> u16 {
    let longest = fields
        .iter()
        .map(|field| field.label().chars().count())
        .max()
        .unwrap_or(0) as u16;
    (longest + 1).min(area_width.saturating_sub(MIN_VALUE_WIDTH))
}

/// Pad `label` to `width` cells, ending in `…` when it does not fit.
fn fit_label(label: &str, width: u16) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    if label.chars().count() < width {
        return format!("{label:<width$}");
    }
    let mut fitted: String = label.chars().take(width.saturating_sub(2)).collect();
    fitted.push('…');
    format!("{fitted:<width$}")
}

/// First row to draw so the focused row stays visible.
fn scroll_offset(focused_row: Option<usize>, visible: usize) -> usize {
    focused_row.map_or(0, |row| (row + 1).saturating_sub(visible))
}

/// Plain, shifted, or AltGr (reported as Ctrl+Alt on some platforms) characters.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty()
        || modifiers == KeyModifiers::SHIFT
        || modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
