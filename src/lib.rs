//! Threadlens - A fast, terminal-based JVM thread dump viewer.
//!
//! Threadlens provides an interactive terminal interface for inspecting
//! JVM thread dumps with vim-style keyboard navigation: per-state filter
//! badges, lock-name search, stack-trace previews and clipboard export.
//!
//! # Features
//!
//! - Reads the `ThreadMXBean` JSON layout (Spring Boot
//!   `/actuator/threaddump`, `jcmd Thread.dump_to_file -format=json`)
//! - Per-state thread counters with one-key filters
//! - Case-insensitive lock-name search
//! - Locale-aware date and number formatting
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use threadlens::dump::DumpReader;
//! use std::path::Path;
//!
//! // Load a dump
//! let info = DumpReader::read_file(Path::new("threaddump.json"))?;
//! println!("{} threads captured", info.dump.threads.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod dump;
pub mod dump_view;
pub mod error;
pub mod format;
pub mod ui;
pub mod util;

pub use error::{Result, ThreadlensError};
