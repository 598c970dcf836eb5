//! Thread dump viewer overlay - pure rendering layer.

use super::{DumpViewState, StateCounts};
use crate::dump::{DumpInfo, ThreadRecord, ThreadState};
use crate::format::{Locale, Value, ValueFormat};
use crate::ui::ThemeColors;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Stack frames shown per thread before eliding the rest.
const STACK_PREVIEW: usize = 6;
/// Locked monitors shown per thread.
const MONITOR_PREVIEW: usize = 3;

/// Draw the dump viewer overlay. Visibility is decided by the caller;
/// an absent dump renders an explanatory message instead of failing.
pub fn draw_dump_view(
    f: &mut Frame<'_>,
    state: &DumpViewState,
    dump: Option<&DumpInfo>,
    locale: &Locale,
    colors: &ThemeColors,
) {
    let area = centered_rect(90, 90, f.area());

    f.render_widget(Clear, area);

    let title = match dump {
        Some(info) => {
            let loaded = ValueFormat::date()
                .render(&Value::Timestamp(info.loaded_at), locale)
                .unwrap_or_default();
            format!(" Thread Dump - loaded {} ", loaded)
        }
        None => " Thread Dump ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Badges + search (2 lines + border)
            Constraint::Min(3),    // Thread list
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    let threads = dump.map(|info| &info.dump);
    let counts = state.counts(threads);
    let filtered = state.filtered(threads);

    draw_header(f, chunks[0], state, counts, locale, colors);

    if dump.is_none() {
        draw_message(f, chunks[1], "No thread dump loaded", colors);
    } else if filtered.is_empty() {
        draw_message(f, chunks[1], "No threads match the active filters", colors);
    } else {
        draw_thread_list(f, chunks[1], state, &filtered, locale, colors);
    }

    draw_footer(f, chunks[2], colors);
}

fn draw_header(
    f: &mut Frame<'_>,
    area: Rect,
    state: &DumpViewState,
    counts: StateCounts,
    locale: &Locale,
    colors: &ThemeColors,
) {
    let mut badges: Vec<Span<'static>> = Vec::new();
    let entries = [
        ("a", "All", counts.all, colors.heading, state.state_filter().is_none()),
        (
            "r",
            "Runnable",
            counts.runnable,
            colors.success,
            state.state_filter() == Some(&ThreadState::Runnable),
        ),
        (
            "w",
            "Waiting",
            counts.waiting,
            colors.info,
            state.state_filter() == Some(&ThreadState::Waiting),
        ),
        (
            "t",
            "Timed Waiting",
            counts.timed_waiting,
            colors.warning,
            state.state_filter() == Some(&ThreadState::TimedWaiting),
        ),
        (
            "b",
            "Blocked",
            counts.blocked,
            colors.danger,
            state.state_filter() == Some(&ThreadState::Blocked),
        ),
    ];
    for (key, label, count, color, active) in entries {
        let count = fmt_count(count as i64, locale);
        let mut style = Style::default().fg(colors.bg).bg(color);
        if active {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        badges.push(Span::styled(format!(" {label} {count} "), style));
        badges.push(Span::styled(
            format!(" {key}  "),
            Style::default().fg(colors.muted),
        ));
    }

    let search_line = if state.is_searching() {
        Line::from(vec![
            Span::styled("/", Style::default().fg(colors.heading)),
            Span::styled(state.search().to_string(), Style::default().fg(colors.text)),
            Span::styled("█", Style::default().fg(colors.heading)),
        ])
    } else if !state.search().is_empty() {
        Line::from(Span::styled(
            format!("Lock filter: {}", state.search()),
            Style::default().fg(colors.text),
        ))
    } else {
        Line::from(Span::styled(
            "Press / to filter by lock name",
            Style::default().fg(colors.muted),
        ))
    };

    let paragraph = Paragraph::new(vec![Line::from(badges), search_line]).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors.border)),
    );
    f.render_widget(paragraph, area);
}

fn draw_thread_list(
    f: &mut Frame<'_>,
    area: Rect,
    state: &DumpViewState,
    filtered: &[&ThreadRecord],
    locale: &Locale,
    colors: &ThemeColors,
) {
    let height = area.height as usize;
    let width = area.width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (idx, thread) in filtered.iter().enumerate().skip(state.selected()) {
        let entry = thread_lines(thread, idx == state.selected(), width, locale, colors);
        if !lines.is_empty() && lines.len() + entry.len() > height {
            break;
        }
        lines.extend(entry);
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn thread_lines(
    thread: &ThreadRecord,
    selected: bool,
    width: usize,
    locale: &Locale,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let badge_style = match colors.state_color(&thread.thread_state) {
        Some(color) => Style::default().fg(colors.bg).bg(color),
        None => Style::default().fg(colors.text).bg(colors.border),
    };
    let name_style = if selected {
        Style::default()
            .fg(colors.cursor_fg)
            .bg(colors.cursor_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
    };

    let mut header = vec![
        Span::styled(format!(" {} ", thread.thread_state.as_str()), badge_style),
        Span::raw(" "),
        Span::styled(thread.thread_name.clone(), name_style),
        Span::styled(
            format!(" (ID {})", thread.thread_id),
            Style::default().fg(colors.muted),
        ),
    ];
    if thread.daemon {
        header.push(Span::styled(
            " daemon",
            Style::default().fg(colors.muted).add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(header));

    let metrics = format!(
        "   blocked {} ms / {}x   waited {} ms / {}x",
        fmt_count(thread.blocked_time, locale),
        fmt_count(thread.blocked_count, locale),
        fmt_count(thread.waited_time, locale),
        fmt_count(thread.waited_count, locale),
    );
    lines.push(Line::from(Span::styled(
        metrics,
        Style::default().fg(colors.text),
    )));

    if let Some(ref lock) = thread.lock_name {
        let mut lock_line = format!("   lock {}", lock);
        if let Some(ref owner) = thread.lock_owner_name {
            lock_line.push_str(&format!(" held by {}", owner));
        }
        lines.push(Line::from(Span::styled(
            truncate_to_width(&lock_line, width),
            Style::default().fg(colors.warning),
        )));
    }

    for frame in thread.stack_trace.iter().take(STACK_PREVIEW) {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("     at {}", frame.render()), width),
            Style::default().fg(colors.muted),
        )));
    }
    if thread.stack_trace.len() > STACK_PREVIEW {
        lines.push(Line::from(Span::styled(
            format!("     ... {} more frames", thread.stack_trace.len() - STACK_PREVIEW),
            Style::default().fg(colors.muted).add_modifier(Modifier::ITALIC),
        )));
    }

    if !thread.locked_synchronizers.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("     holds {} synchronizer(s)", thread.locked_synchronizers.len()),
            Style::default().fg(colors.info),
        )));
    }

    for monitor in thread.locked_monitors.iter().take(MONITOR_PREVIEW) {
        let depth = monitor
            .locked_stack_depth
            .map(|d| format!(" (depth {d})"))
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            truncate_to_width(
                &format!("     locked {}@{:x}{}", monitor.class_name, monitor.identity_hash_code, depth),
                width,
            ),
            Style::default().fg(colors.info),
        )));
    }

    lines.push(Line::from(""));
    lines
}

fn draw_message(f: &mut Frame<'_>, area: Rect, message: &str, colors: &ThemeColors) {
    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.muted));
    f.render_widget(paragraph, area);
}

fn draw_footer(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new("j/k:select | a/r/w/t/b:state | /:lock search | y:copy | q/Esc:close")
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.muted));
    f.render_widget(paragraph, area);
}

fn fmt_count(n: i64, locale: &Locale) -> String {
    ValueFormat::number()
        .render(&Value::Int(n), locale)
        .unwrap_or_else(|_| n.to_string())
}

/// Centered rect helper for overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
