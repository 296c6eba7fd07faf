use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use greeter_core::RULES;

use crate::app::{App, AttendeeForm, Outcome};

const IDLE_HINT: &str = "Fill out the form and click Generate SQL.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(size);

    render_header(frame, chunks[0]);

    if app.show_rules {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        render_form(frame, columns[0], &app.form);
        render_rules(frame, columns[1]);
    } else {
        render_form(frame, chunks[1], &app.form);
    }

    render_outcome(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    if app.show_help {
        render_help(frame, size);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("greeter");
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "Auto-grader Set Up",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(block);
    frame.render_widget(paragraph, area);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, form: &AttendeeForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Attendee Information");
    let mut lines = vec![
        Line::from(Span::styled(
            "Fields marked with * are required.",
            Style::default().fg(Color::DarkGray),
        )),
        field_line("Email *", &form.email, form.focus == 0),
        field_line("First name *", &form.first, form.focus == 1),
        field_line("Middle name (optional)", &form.middle, form.focus == 2),
        field_line("Last name *", &form.last, form.focus == 3),
        Line::from(""),
    ];

    let generate_style = if form.is_generate_focus() {
        Style::default().fg(Color::Black).bg(Color::LightGreen)
    } else {
        Style::default().fg(Color::Green)
    };
    let quit_style = if form.is_quit_focus() {
        Style::default().fg(Color::Black).bg(Color::LightRed)
    } else {
        Style::default().fg(Color::Red)
    };

    lines.push(Line::from(vec![
        Span::styled("[Generate SQL]", generate_style),
        Span::raw("  "),
        Span::styled("[Quit]", quit_style),
    ]));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn render_rules(frame: &mut Frame<'_>, area: Rect) {
    let lines: Vec<Line> = RULES
        .iter()
        .map(|rule| Line::from(format!("- {}", rule)))
        .collect();
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Rules"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_outcome(frame: &mut Frame<'_>, area: Rect, app: &App) {
    match &app.outcome {
        Outcome::Idle => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                IDLE_HINT,
                Style::default().fg(Color::Cyan),
            )))
            .block(Block::default().borders(Borders::ALL).title("Output"));
            frame.render_widget(paragraph, area);
        }
        Outcome::Rejected(messages) => {
            let lines: Vec<Line> = messages
                .iter()
                .map(|message| {
                    Line::from(Span::styled(
                        message.clone(),
                        Style::default().fg(Color::Red),
                    ))
                })
                .collect();
            let paragraph = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Output"))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
        Outcome::Generated(script) => {
            let title = format!("Generated SQL ({})  ctrl+s saves", script.file_name());
            // No wrapping: the script is shown exactly as it will be saved.
            let paragraph = Paragraph::new(script.sql.as_str())
                .block(Block::default().borders(Borders::ALL).title(title))
                .scroll((app.script_scroll, 0));
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hint = match app.outcome {
        Outcome::Generated(_) => {
            "tab next  shift+tab prev  enter select  pgup/pgdn scroll  ctrl+s save  F1 help  esc quit"
        }
        _ => "tab next  shift+tab prev  enter select  ctrl+u clear  F1 help  esc quit",
    };

    let mut lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    ))];

    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(err) = &app.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let modal = centered_rect(70, 60, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: esc quit, Ctrl+C quit, F1 help"),
        Line::from("Form: tab/shift+tab move, enter activate, Ctrl+U clear field, Ctrl+W delete word"),
        Line::from("Output: pgup/pgdn scroll, Ctrl+S save workshop_greeting.sql"),
        Line::from(""),
        Line::from("A single initial needs a trailing space, e.g. \"K \"."),
        Line::from("Names are sent exactly as typed, including trailing spaces."),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let mut spans = vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_string(), style),
    ];
    // Block cursor so trailing spaces stay visible while typing.
    if focused {
        spans.push(Span::styled(" ", Style::default().bg(Color::Yellow)));
    }
    Line::from(spans)
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
