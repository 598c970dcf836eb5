//! Thread dump viewer overlay - state, counting and filtering.
//!
//! The overlay owns its filter state (selected thread state, lock-name
//! search) for the lifetime of the application; reloading a dump or
//! closing and reopening the overlay does not reset it. Visibility is
//! owned by the host [`App`](crate::app::App).

pub mod ui;

use crate::dump::{ThreadDump, ThreadRecord, ThreadState};

/// Per-state thread counts shown on the filter badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateCounts {
    /// Sum of the four recognized states, not the raw record count.
    pub all: usize,
    /// Threads in `RUNNABLE`.
    pub runnable: usize,
    /// Threads in `WAITING`.
    pub waiting: usize,
    /// Threads in `TIMED_WAITING`.
    pub timed_waiting: usize,
    /// Threads in `BLOCKED`.
    pub blocked: usize,
}

impl StateCounts {
    /// Tally counts in a single pass. Each thread increments at most one
    /// counter; threads in other states (`NEW`, `TERMINATED`, ...) are
    /// counted nowhere, so `all` can be smaller than `threads.len()`.
    pub fn tally(threads: &[ThreadRecord]) -> Self {
        let mut counts = Self::default();
        for thread in threads {
            match thread.thread_state {
                ThreadState::Runnable => counts.runnable += 1,
                ThreadState::Waiting => counts.waiting += 1,
                ThreadState::TimedWaiting => counts.timed_waiting += 1,
                ThreadState::Blocked => counts.blocked += 1,
                ThreadState::Other(_) => {}
            }
        }
        counts.all = counts.runnable + counts.waiting + counts.timed_waiting + counts.blocked;
        counts
    }
}

/// Filter and selection state for the dump viewer overlay.
#[derive(Debug, Clone, Default)]
pub struct DumpViewState {
    state_filter: Option<ThreadState>,
    search: String,
    search_active: bool,
    selected: usize,
}

impl DumpViewState {
    /// Create a new viewer state with no filters active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the state filter. `None` shows every state. No
    /// validation: a filter no thread matches yields an empty list.
    pub fn set_state_filter(&mut self, state: Option<ThreadState>) {
        self.state_filter = state;
        self.selected = 0;
    }

    /// The active state filter.
    pub fn state_filter(&self) -> Option<&ThreadState> {
        self.state_filter.as_ref()
    }

    /// Begin editing the lock-name search.
    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    /// Append a character to the search. The filter applies on every
    /// keystroke; the text is kept verbatim, untrimmed.
    pub fn search_input(&mut self, c: char) {
        self.search.push(c);
        self.selected = 0;
    }

    /// Remove the last character from the search.
    pub fn search_backspace(&mut self) {
        self.search.pop();
        self.selected = 0;
    }

    /// Stop editing, keeping the search text active.
    pub fn submit_search(&mut self) {
        self.search_active = false;
    }

    /// Stop editing and clear the search text.
    pub fn cancel_search(&mut self) {
        self.search_active = false;
        self.search.clear();
        self.selected = 0;
    }

    /// True while the search line is being edited.
    pub fn is_searching(&self) -> bool {
        self.search_active
    }

    /// The current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Counters for the badge row. An absent dump yields all zeroes.
    pub fn counts(&self, dump: Option<&ThreadDump>) -> StateCounts {
        dump.map_or_else(StateCounts::default, |d| StateCounts::tally(&d.threads))
    }

    /// Threads matching the active filters, in dump order.
    ///
    /// The state filter keeps exact matches; the search then keeps
    /// threads whose lock name contains the search text
    /// case-insensitively. Threads without a lock name never match a
    /// non-empty search. An absent dump yields an empty list.
    pub fn filtered<'a>(&self, dump: Option<&'a ThreadDump>) -> Vec<&'a ThreadRecord> {
        let Some(dump) = dump else {
            return Vec::new();
        };
        let needle = self.search.to_lowercase();
        dump.threads
            .iter()
            .filter(|t| {
                self.state_filter
                    .as_ref()
                    .map_or(true, |state| &t.thread_state == state)
            })
            .filter(|t| {
                needle.is_empty()
                    || t.lock_name
                        .as_deref()
                        .map_or(false, |lock| lock.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Index of the selected entry within the filtered list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection up.
    pub fn select_up(&mut self, amount: usize) {
        self.selected = self.selected.saturating_sub(amount);
    }

    /// Move the selection down, clamped to the filtered list.
    pub fn select_down(&mut self, amount: usize, len: usize) {
        self.selected = (self.selected + amount).min(len.saturating_sub(1));
    }

    /// Pull the selection back inside a list that shrank underneath it.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, state: ThreadState, lock: Option<&str>) -> ThreadRecord {
        ThreadRecord {
            thread_id: id,
            thread_name: format!("thread-{id}"),
            thread_state: state,
            lock_name: lock.map(str::to_string),
            lock_owner_name: None,
            blocked_time: -1,
            blocked_count: 0,
            waited_time: -1,
            waited_count: 0,
            daemon: false,
            priority: Some(5),
            stack_trace: Vec::new(),
            locked_monitors: Vec::new(),
            locked_synchronizers: Vec::new(),
        }
    }

    fn sample_dump() -> ThreadDump {
        ThreadDump {
            threads: vec![
                record(1, ThreadState::Runnable, Some("lockA")),
                record(2, ThreadState::Blocked, Some("lockB")),
                record(3, ThreadState::Runnable, None),
            ],
        }
    }

    fn ids(threads: &[&ThreadRecord]) -> Vec<i64> {
        threads.iter().map(|t| t.thread_id).collect()
    }

    #[test]
    fn counts_tally_each_state_once() {
        let dump = sample_dump();
        let counts = StateCounts::tally(&dump.threads);
        assert_eq!(
            counts,
            StateCounts {
                all: 3,
                runnable: 2,
                waiting: 0,
                timed_waiting: 0,
                blocked: 1,
            }
        );
    }

    #[test]
    fn unrecognized_states_count_nowhere() {
        let mut dump = sample_dump();
        dump.threads
            .push(record(4, ThreadState::Other("NEW".to_string()), None));
        dump.threads
            .push(record(5, ThreadState::Other("TERMINATED".to_string()), None));

        let counts = StateCounts::tally(&dump.threads);
        // `all` is the bucket sum, so the two extra threads are invisible
        // to it even though the dump has five records.
        assert_eq!(counts.all, 3);
        assert_eq!(dump.threads.len(), 5);
    }

    #[test]
    fn absent_dump_yields_zero_counts_and_empty_list() {
        let view = DumpViewState::new();
        assert_eq!(view.counts(None), StateCounts::default());
        assert!(view.filtered(None).is_empty());
    }

    #[test]
    fn no_filters_keeps_everything_in_order() {
        let dump = sample_dump();
        let view = DumpViewState::new();
        assert_eq!(ids(&view.filtered(Some(&dump))), vec![1, 2, 3]);
    }

    #[test]
    fn state_filter_keeps_exact_matches_only() {
        let dump = sample_dump();
        let mut view = DumpViewState::new();
        view.set_state_filter(Some(ThreadState::Runnable));
        assert_eq!(ids(&view.filtered(Some(&dump))), vec![1, 3]);

        view.set_state_filter(None);
        assert_eq!(ids(&view.filtered(Some(&dump))), vec![1, 2, 3]);
    }

    #[test]
    fn unmatched_state_filter_yields_empty_list() {
        let dump = sample_dump();
        let mut view = DumpViewState::new();
        view.set_state_filter(Some(ThreadState::Waiting));
        assert!(view.filtered(Some(&dump)).is_empty());

        view.set_state_filter(Some(ThreadState::Other("NEW".to_string())));
        assert!(view.filtered(Some(&dump)).is_empty());
    }

    #[test]
    fn search_matches_lock_names_case_insensitively() {
        let dump = sample_dump();
        let mut view = DumpViewState::new();
        for c in "LOCKB".chars() {
            view.search_input(c);
        }
        assert_eq!(ids(&view.filtered(Some(&dump))), vec![2]);
    }

    #[test]
    fn threads_without_a_lock_never_match_a_search() {
        let dump = sample_dump();
        let mut view = DumpViewState::new();
        for c in "lock".chars() {
            view.search_input(c);
        }
        // Thread 3 is RUNNABLE but has no lock name.
        assert_eq!(ids(&view.filtered(Some(&dump))), vec![1, 2]);
    }

    #[test]
    fn state_and_search_filters_are_conjunctive() {
        let dump = sample_dump();
        let mut view = DumpViewState::new();
        view.set_state_filter(Some(ThreadState::Runnable));
        for c in "locka".chars() {
            view.search_input(c);
        }
        assert_eq!(ids(&view.filtered(Some(&dump))), vec![1]);
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let dump = ThreadDump {
            threads: vec![
                record(10, ThreadState::Blocked, Some("queue")),
                record(7, ThreadState::Runnable, Some("queue")),
                record(22, ThreadState::Blocked, Some("queue-worker")),
                record(3, ThreadState::Blocked, Some("pool")),
            ],
        };
        let mut view = DumpViewState::new();
        view.set_state_filter(Some(ThreadState::Blocked));
        for c in "queue".chars() {
            view.search_input(c);
        }
        assert_eq!(ids(&view.filtered(Some(&dump))), vec![10, 22]);
    }

    #[test]
    fn backspace_relaxes_the_search() {
        let dump = sample_dump();
        let mut view = DumpViewState::new();
        for c in "lockax".chars() {
            view.search_input(c);
        }
        assert!(view.filtered(Some(&dump)).is_empty());
        view.search_backspace();
        assert_eq!(ids(&view.filtered(Some(&dump))), vec![1]);
    }

    #[test]
    fn cancel_clears_the_search_but_submit_keeps_it() {
        let mut view = DumpViewState::new();
        view.start_search();
        view.search_input('x');
        view.submit_search();
        assert!(!view.is_searching());
        assert_eq!(view.search(), "x");

        view.start_search();
        view.cancel_search();
        assert_eq!(view.search(), "");
    }

    #[test]
    fn selection_clamps_to_the_filtered_list() {
        let mut view = DumpViewState::new();
        view.select_down(10, 3);
        assert_eq!(view.selected(), 2);
        view.select_up(1);
        assert_eq!(view.selected(), 1);
        view.clamp_selection(0);
        assert_eq!(view.selected(), 0);
        view.select_down(1, 0);
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn changing_filters_resets_the_selection() {
        let mut view = DumpViewState::new();
        view.select_down(2, 5);
        view.set_state_filter(Some(ThreadState::Blocked));
        assert_eq!(view.selected(), 0);

        view.select_down(2, 5);
        view.search_input('q');
        assert_eq!(view.selected(), 0);
    }
}
