//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let text = if app.show_dump_view && app.dump_view.is_searching() {
        format!("/{}", app.dump_view.search())
    } else if app.show_dump_view && !app.dump_view.search().is_empty() {
        let matches = app.dump_view.filtered(app.thread_dump()).len();
        format!("{} threads match '{}'", matches, app.dump_view.search())
    } else {
        app.status.clone()
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
