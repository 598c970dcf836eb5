//! Thread dump data model and reading.

mod model;
mod reader;

pub use model::{LockInfo, MonitorInfo, StackFrame, ThreadDump, ThreadRecord, ThreadState};
pub use reader::{DumpInfo, DumpReader};
