//! Summary screen rendering.

use crate::app::App;
use crate::dump_view::StateCounts;
use crate::format::{Value, ValueFormat};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the summary screen.
pub(super) fn draw_summary(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let Some(ref info) = app.dump else {
        draw_welcome(f, app, area, colors);
        return;
    };

    let counts = StateCounts::tally(&info.dump.threads);
    let other = info.dump.threads.len() - counts.all;
    let loaded = ValueFormat::date()
        .render(&Value::Timestamp(info.loaded_at), &app.locale)
        .unwrap_or_default();
    let fmt = |n: usize| {
        ValueFormat::number()
            .render(&Value::Int(n as i64), &app.locale)
            .unwrap_or_else(|_| n.to_string())
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("File:    {}", info.path.display()),
            Style::default().fg(colors.text),
        )),
        Line::from(Span::styled(
            format!("Loaded:  {}", loaded),
            Style::default().fg(colors.text),
        )),
        Line::from(Span::styled(
            format!("Threads: {}", fmt(info.dump.threads.len())),
            Style::default().fg(colors.text),
        )),
        Line::from(""),
    ];

    let rows = [
        ("Runnable", counts.runnable, colors.success),
        ("Waiting", counts.waiting, colors.info),
        ("Timed Waiting", counts.timed_waiting, colors.warning),
        ("Blocked", counts.blocked, colors.danger),
    ];
    for (label, count, color) in rows {
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(color)),
            Span::styled(format!("{label:<14}"), Style::default().fg(colors.text)),
            Span::styled(fmt(count), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]));
    }
    if other > 0 {
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(colors.muted)),
            Span::styled(format!("{:<14}", "Other"), Style::default().fg(colors.muted)),
            Span::styled(fmt(other), Style::default().fg(colors.muted)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press d to open the thread dump viewer",
        Style::default().fg(colors.muted),
    )));

    if let Some(ref error) = app.error_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors.danger),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" threadlens ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );
    f.render_widget(paragraph, area);
}

fn draw_welcome(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "threadlens",
            Style::default().fg(colors.heading).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A terminal-based JVM thread dump viewer",
            Style::default().fg(colors.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Usage: threadlens <dump.json>",
            Style::default().fg(colors.muted),
        )),
    ];

    if let Some(ref error) = app.error_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors.danger),
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );
    f.render_widget(paragraph, area);
}
