//! TUI rendering with ratatui
//!
//! Board, hint and search-space panels for the Mastermind game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Code, Feedback};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const SYMBOL_COLORS: [Color; 10] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.values()
        .iter()
        .map(|&v| {
            Span::styled(
                format!(" {v} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(SYMBOL_COLORS[v as usize % SYMBOL_COLORS.len()])
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn peg_spans(feedback: Feedback, code_length: usize) -> Vec<Span<'static>> {
    let exact = usize::from(feedback.exact_matches());
    let partial = usize::from(feedback.partial_matches());
    let empty = code_length.saturating_sub(exact + partial);

    vec![
        Span::styled("●".repeat(exact), Style::default().fg(Color::Green)),
        Span::styled("○".repeat(partial), Style::default().fg(Color::Yellow)),
        Span::styled("·".repeat(empty), Style::default().fg(Color::DarkGray)),
    ]
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let code_length = app.board.code_length();

    let mut items: Vec<ListItem> = app
        .board
        .turns()
        .iter()
        .zip(&app.candidate_counts)
        .enumerate()
        .map(|(i, (turn, remaining))| {
            let mut spans = vec![Span::raw(format!("{:>2}. ", i + 1))];
            spans.extend(code_spans(turn.guess()));
            spans.push(Span::raw("  "));
            spans.extend(peg_spans(turn.feedback(), code_length));
            spans.push(Span::styled(
                format!("  {remaining} left"),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    if app.input_mode == InputMode::GameOver {
        let mut spans = vec![Span::raw("Secret: ")];
        spans.extend(code_spans(app.board.secret_code()));
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(spans)));
    }

    let title = format!(
        " Board ({}/{}) ",
        app.board.turns().len(),
        app.board.max_turns()
    );
    let board = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Hint
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(50), // Candidates
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_search_progress(f, app, chunks[1]);
    render_candidates(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(hint) = &app.hint {
        let mut suggested = vec![Span::raw("Try:        ")];
        suggested.extend(code_spans(&hint.guess));
        vec![
            Line::from(suggested),
            Line::from(format!("Eliminates: at least {}", hint.minimax_score)),
            Line::from(format!("Worst case: {} remain", hint.worst_case)),
        ]
    } else {
        vec![Line::from("Press 'h' for a minimax hint")]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.tracker.all_possible_codes().len().max(1);
    let remaining = app.candidates_count();

    // Share of the information needed that has been gained, in bits
    let total_bits = (total as f64).log2();
    let remaining_bits = (remaining.max(1) as f64).log2();
    let progress_pct = if total_bits > 0.0 {
        (((total_bits - remaining_bits) / total_bits) * 100.0).clamp(0.0, 100.0) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{remaining}/{total} codes possible"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.tracker.possible_secret_codes();

    let content: Vec<Line> = if candidates.is_empty() {
        vec![Line::from("No codes fit the feedback")]
    } else if candidates.len() <= 8 {
        candidates
            .iter()
            .map(|code| {
                let mut spans = vec![Span::raw("  ")];
                spans.extend(code_spans(code));
                Line::from(spans)
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{} codes still possible", candidates.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (candidates.len() as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Guess (digits, e.g. 0011) | h: hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let range = app.config.value_range();
    let shape_text = format!(
        "{} × {}..={}",
        app.config.code_length(),
        range.start(),
        range.end()
    );
    f.render_widget(
        Paragraph::new(shape_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats = &app.stats;
    let average = if stats.games_won > 0 {
        let total: usize = stats.guess_distribution.iter().map(|(g, n)| g * n).sum();
        total as f64 / stats.games_won as f64
    } else {
        0.0
    };
    let stats_text = format!(
        "Games: {} | Won: {} | Avg: {average:.2}",
        stats.total_games, stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let turns_text = format!("Turns left: {}", app.board.turns_remaining());
    f.render_widget(
        Paragraph::new(turns_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("q: Quit | n: New | h: Hint | Enter: Guess")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
