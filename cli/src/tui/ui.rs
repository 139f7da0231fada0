use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::tui::app::{App, InputMode};

const LABEL_WIDTH: usize = 14;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("ATTENDANCE TRACKER", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(format!("< {} >", app.day), Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(main_chunks[1]);

    draw_class_list(f, app, content_chunks[0]);
    draw_attendance_chart(f, app, content_chunks[1]);

    let footer = match app.input_mode {
        InputMode::ConfirmReset => Paragraph::new("Reset all data? This cannot be undone. y: Yes | n: No")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        InputMode::Normal if !app.status.is_empty() => {
            Paragraph::new(app.status.as_str()).style(Style::default().fg(Color::Yellow))
        }
        InputMode::Normal => Paragraph::new(
            "j/k: Navigate | a: Absent | c: Cancelled | s: Save | h/l: Day | t: Today | R: Reset | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(footer.alignment(Alignment::Center), main_chunks[2]);
}

fn draw_class_list(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Classes on {} ", app.day))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if app.classes.is_empty() {
        let empty = Paragraph::new(format!("No classes scheduled for {}.", app.day))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let store = &app.ctx.store;
    let rows: Vec<Row> = app.classes.iter().zip(&app.marks).map(|(class_name, mark)| {
        let absent = if mark.absent { "✖" } else { " " };
        let cancelled = if mark.cancelled { "⊘" } else { " " };

        Row::new(vec![
            Span::styled(absent, Style::default().fg(Color::Red)),
            Span::styled(cancelled, Style::default().fg(Color::Yellow)),
            Span::styled(class_name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(store.absences().get(class_name).to_string()),
            Span::raw(store.cancellations().get(class_name).to_string()),
        ])
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),  // Absent mark
            Constraint::Length(3),  // Cancelled mark
            Constraint::Min(10),    // Class
            Constraint::Length(5),  // Absences
            Constraint::Length(5),  // Cancelled
        ]
    )
    .header(Row::new(vec!["Ab", "Cx", "Class", "Abs", "Can"]).style(Style::default().fg(Color::Yellow)))
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_attendance_chart(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Attendance % ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if app.report.is_empty() {
        let empty = Paragraph::new("No classes registered yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = app.report.iter().map(|(class_name, percentage)| {
        let color = match *percentage {
            p if p >= 75.0 => Color::Green,
            p if p >= 50.0 => Color::Yellow,
            _ => Color::Red,
        };
        Bar::default()
            .label(truncate_label(class_name, LABEL_WIDTH))
            .value(percentage.clamp(0.0, 100.0).round() as u64)
            .text_value(format!("{:.2}%", percentage))
            .style(Style::default().fg(color))
    }).collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars))
        .max(100);

    f.render_widget(chart, area);
}

/// Cuts `text` to at most `max` terminal columns.
fn truncate_label(text: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            out.push('…');
            break;
        }
        width += w;
        out.push(c);
    }
    out
}
