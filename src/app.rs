//! Application state and logic.

use std::path::PathBuf;

use crate::dump::{DumpInfo, DumpReader, ThreadDump};
use crate::dump_view::DumpViewState;
use crate::format::Locale;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Current dump file path.
    pub file_path: Option<PathBuf>,
    /// Loaded dump, if any.
    pub dump: Option<DumpInfo>,
    /// Dump viewer filter/selection state.
    pub dump_view: DumpViewState,
    /// Whether the dump viewer overlay is shown. The viewer itself holds
    /// no open/closed state; this flag is the single source of truth.
    pub show_dump_view: bool,
    /// Current display locale.
    pub locale: Locale,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Error message from the last failed load.
    pub error_message: Option<String>,
}

impl App {
    /// Create a new application instance, loading `file_path` if given.
    pub fn new(file_path: Option<PathBuf>, locale: Locale) -> Self {
        let mut app = Self {
            file_path: None,
            dump: None,
            dump_view: DumpViewState::new(),
            show_dump_view: false,
            locale,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            error_message: None,
        };

        if let Some(path) = file_path {
            app.load_file(path);
        }

        app
    }

    /// The loaded dump's thread data, if any.
    pub fn thread_dump(&self) -> Option<&ThreadDump> {
        self.dump.as_ref().map(|info| &info.dump)
    }

    /// Load a thread dump file. On failure the previous dump (if any)
    /// stays on screen and the error is surfaced in the status line.
    /// Viewer filter state survives loads: a reload is the same
    /// inspection session.
    pub fn load_file(&mut self, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "dump".to_string());

        match DumpReader::read_file(&path) {
            Ok(info) => {
                tracing::info!(
                    threads = info.dump.threads.len(),
                    file = %path.display(),
                    "loaded thread dump"
                );
                self.status = format!("Loaded {} threads from {}", info.dump.threads.len(), name);
                self.dump = Some(info);
                self.error_message = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, file = %path.display(), "failed to load thread dump");
                self.status = format!("Failed to load {}", name);
                self.error_message = Some(err.to_string());
            }
        }

        self.file_path = Some(path);
    }

    /// Re-read the current dump file.
    pub fn reload(&mut self) {
        if let Some(path) = self.file_path.clone() {
            self.load_file(path);
        } else {
            self.status = "No file to reload".to_string();
        }
    }

    /// Show the dump viewer overlay.
    pub fn open_dump_view(&mut self) {
        self.show_dump_view = true;
    }

    /// Hide the dump viewer overlay, keeping its filter state for the
    /// next open. A search being edited is committed as-is.
    pub fn close_dump_view(&mut self) {
        self.dump_view.submit_search();
        self.show_dump_view = false;
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::ThreadState;

    #[test]
    fn missing_file_degrades_to_an_error_message() {
        let app = App::new(
            Some(PathBuf::from("/nonexistent/dump.json")),
            Locale::default(),
        );
        assert!(app.dump.is_none());
        assert!(app.error_message.is_some());
        assert!(app.thread_dump().is_none());
    }

    #[test]
    fn closing_the_viewer_keeps_filter_state() {
        let mut app = App::new(None, Locale::default());
        app.open_dump_view();
        app.dump_view.set_state_filter(Some(ThreadState::Blocked));
        app.dump_view.start_search();
        app.dump_view.search_input('q');

        app.close_dump_view();
        assert!(!app.show_dump_view);
        assert_eq!(app.dump_view.state_filter(), Some(&ThreadState::Blocked));
        assert_eq!(app.dump_view.search(), "q");
        assert!(!app.dump_view.is_searching());
    }
}
