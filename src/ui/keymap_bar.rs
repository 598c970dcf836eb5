//! Keymap help bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let keymap_text = if app.show_dump_view && app.dump_view.is_searching() {
        "Enter:apply | Esc:clear | Type to filter by lock name"
    } else if app.show_dump_view {
        "jk/↑↓:select | a/r/w/t/b:state filter | /:search | y:copy | R:reload | q/Esc:close"
    } else {
        "q:quit | d/Enter:thread dump | R:reload | T:theme | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.muted).bg(colors.bg));

    f.render_widget(paragraph, area);
}
