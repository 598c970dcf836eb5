//! User interface rendering.

mod keymap_bar;
mod status_bar;
mod summary;
mod theme;

pub use theme::ThemeColors;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    summary::draw_summary(f, app, chunks[0], &colors);
    status_bar::draw_status(f, app, chunks[1], &colors);
    keymap_bar::draw_keymap(f, app, chunks[2], &colors);

    // Overlay
    if app.show_dump_view {
        let len = app.dump_view.filtered(app.thread_dump()).len();
        app.dump_view.clamp_selection(len);
        crate::dump_view::ui::draw_dump_view(
            f,
            &app.dump_view,
            app.dump.as_ref(),
            &app.locale,
            &colors,
        );
    }
}
