//! Utility functions for Threadlens.

use arboard::Clipboard;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::dump::ThreadRecord;
use crate::error::Result;

/// Copy a thread's details to the clipboard.
pub fn copy_thread_info(thread: &ThreadRecord) -> Result<()> {
    let mut text = format!("Thread: {} (ID {})\n", thread.thread_name, thread.thread_id);
    text.push_str(&format!("State: {}\n", thread.thread_state.as_str()));
    if thread.daemon {
        text.push_str("Daemon: yes\n");
    }
    if let Some(priority) = thread.priority {
        text.push_str(&format!("Priority: {}\n", priority));
    }

    if let Some(ref lock) = thread.lock_name {
        text.push_str(&format!("Lock: {}\n", lock));
    }
    if let Some(ref owner) = thread.lock_owner_name {
        text.push_str(&format!("Lock owner: {}\n", owner));
    }
    text.push_str(&format!(
        "Blocked: {} ms ({} times)\n",
        thread.blocked_time, thread.blocked_count
    ));
    text.push_str(&format!(
        "Waited: {} ms ({} times)\n",
        thread.waited_time, thread.waited_count
    ));

    if !thread.stack_trace.is_empty() {
        text.push_str("\nStack trace:\n");
        for frame in &thread.stack_trace {
            text.push_str(&format!("  at {}\n", frame.render()));
        }
    }

    copy_to_clipboard(&text)
}

/// Copy text to clipboard.
fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Truncate to `max` display columns, appending an ellipsis when the
/// text does not fit.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exact", 5), "exact");
    }

    #[test]
    fn long_text_gets_an_ellipsis_within_the_limit() {
        let lock = "java.util.concurrent.locks.AbstractQueuedSynchronizer$ConditionObject@1b2c3d";
        let truncated = truncate_to_width(lock, 20);
        assert_eq!(UnicodeWidthStr::width(truncated.as_str()), 20);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn zero_width_yields_empty_text() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
