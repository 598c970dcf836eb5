//! Color themes for the UI.

use crate::app::Theme;
use crate::dump::ThreadState;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// De-emphasized text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
    /// Selection foreground color.
    pub cursor_fg: Color,
    /// Selection background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Healthy / runnable color.
    pub success: Color,
    /// Informational / waiting color.
    pub info: Color,
    /// Warning / timed-waiting color.
    pub warning: Color,
    /// Error / blocked color.
    pub danger: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                muted: Color::Rgb(146, 131, 116),
                border: Color::Rgb(102, 92, 84),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                success: Color::Rgb(184, 187, 38),
                info: Color::Rgb(131, 165, 152),
                warning: Color::Rgb(250, 189, 47),
                danger: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                muted: Color::Rgb(124, 111, 100),
                border: Color::Rgb(213, 196, 161),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                success: Color::Rgb(121, 116, 14),
                info: Color::Rgb(7, 102, 120),
                warning: Color::Rgb(181, 118, 20),
                danger: Color::Rgb(157, 0, 6),
            },
        }
    }

    /// Badge color for a thread state. Unrecognized states get no badge
    /// color and render with the default text style.
    pub fn state_color(&self, state: &ThreadState) -> Option<Color> {
        match state {
            ThreadState::Runnable => Some(self.success),
            ThreadState::Waiting => Some(self.info),
            ThreadState::TimedWaiting => Some(self.warning),
            ThreadState::Blocked => Some(self.danger),
            ThreadState::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_colors_follow_the_state_severity() {
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        assert_eq!(colors.state_color(&ThreadState::Runnable), Some(colors.success));
        assert_eq!(colors.state_color(&ThreadState::Waiting), Some(colors.info));
        assert_eq!(
            colors.state_color(&ThreadState::TimedWaiting),
            Some(colors.warning)
        );
        assert_eq!(colors.state_color(&ThreadState::Blocked), Some(colors.danger));
        assert_eq!(
            colors.state_color(&ThreadState::Other("NEW".to_string())),
            None
        );
    }
}
