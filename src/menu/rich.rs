use super::{Menu, MenuAction, MenuOption, MenuState, MenuStep, Selection};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout, Write};

const TITLE: &str = " HTML/CSS CLEANING TOOL ";
const HELP: &str = "↑/↓ move • SPACE toggle • ENTER continue • ESC quit";

/// Full-screen checkbox menu drawn with ratatui
#[derive(Debug, Default)]
pub struct RichMenu;

impl RichMenu {
    pub fn new() -> Self {
        Self
    }
}

impl Menu for RichMenu {
    /// Errors mean the terminal could not be driven; callers fall back to
    /// the numbered menu rather than treating them as a cancellation.
    fn open(&mut self, options: &[MenuOption]) -> Result<Option<Selection>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let res = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(mut terminal) => run_menu(&mut terminal, options),
            Err(err) => Err(err.into()),
        };

        // A confirmed selection survives a failed restore.
        restore_terminal(&mut io::stdout(), disable_raw_mode());

        res
    }
}

/// Leave the alternate screen and show the cursor even if raw mode could not
/// be switched off; failures are only logged.
fn restore_terminal<W: Write>(out: &mut W, raw_mode_off: io::Result<()>) {
    if let Err(err) = raw_mode_off {
        tracing::debug!("failed to disable raw mode: {}", err);
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, Show) {
        tracing::debug!("failed to leave alternate screen: {}", err);
    }
}

/// Map a key press to a menu action; unbound keys yield `None`.
pub fn action_for_key(key: KeyEvent) -> Option<MenuAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(MenuAction::Cancel);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuAction::Down),
        KeyCode::Char(' ') => Some(MenuAction::Toggle),
        KeyCode::Enter => Some(MenuAction::Confirm),
        KeyCode::Esc => Some(MenuAction::Cancel),
        _ => None,
    }
}

fn run_menu(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    options: &[MenuOption],
) -> Result<Option<Selection>> {
    let mut state = MenuState::new();
    loop {
        terminal.draw(|f| ui(f, options, &state))?;

        if let Event::Key(key) = event::read()? {
            let Some(action) = action_for_key(key) else {
                continue;
            };
            match state.handle(action, options) {
                MenuStep::Browsing => {}
                MenuStep::Confirmed(selection) => return Ok(Some(selection)),
                MenuStep::Cancelled => return Ok(None),
            }
        }
    }
}

fn ui(f: &mut Frame, options: &[MenuOption], state: &MenuState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(f.size());

    draw_header(f, chunks[0]);
    draw_options(f, chunks[1], options, state);
    draw_footer(f, chunks[2], options, state);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            HELP,
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_options(f: &mut Frame, area: Rect, options: &[MenuOption], state: &MenuState) {
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let checkbox = if state.is_selected(i) { "[*] " } else { "[ ] " };
            let status = if option.enabled { "" } else { " (DISABLED)" };

            let name_style = if !option.enabled {
                Style::default().fg(Color::DarkGray)
            } else if state.is_selected(i) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}{}{}", checkbox, option.name, status),
                    name_style,
                )),
                Line::from(Span::styled(
                    format!("    {}", option.description),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Operations"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.current()));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(f: &mut Frame, area: Rect, options: &[MenuOption], state: &MenuState) {
    let chosen = state.chosen_names(options);
    let summary = if chosen.is_empty() {
        String::from("(none)")
    } else {
        chosen.join(", ")
    };

    let paragraph = Paragraph::new(Line::from(vec![
        Span::raw("Selected: "),
        Span::styled(summary, Style::default().add_modifier(Modifier::DIM)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}
