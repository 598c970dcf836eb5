//! Thread dump data model.
//!
//! Mirrors the JSON layout produced by the JVM's `ThreadMXBean`, as exposed
//! by Spring Boot's `/actuator/threaddump` endpoint and
//! `jcmd <pid> Thread.dump_to_file -format=json`. Everything beyond the
//! thread's identity is optional so partially populated payloads still load.

use std::fmt;

use serde::Deserialize;

/// Scheduling state of a thread at capture time.
///
/// The four states the viewer filters on are parsed into their own
/// variants; anything else the JVM reports (`NEW`, `TERMINATED`, values
/// from future JVMs) is preserved verbatim in [`ThreadState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ThreadState {
    /// Executing or ready to execute.
    Runnable,
    /// Parked indefinitely on a monitor or condition.
    Waiting,
    /// Parked with a timeout.
    TimedWaiting,
    /// Blocked entering or re-entering a monitor.
    Blocked,
    /// Any state outside the four above, kept as reported.
    Other(String),
}

impl From<String> for ThreadState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "RUNNABLE" => Self::Runnable,
            "WAITING" => Self::Waiting,
            "TIMED_WAITING" => Self::TimedWaiting,
            "BLOCKED" => Self::Blocked,
            _ => Self::Other(raw),
        }
    }
}

impl ThreadState {
    /// The JVM's name for this state.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Runnable => "RUNNABLE",
            Self::Waiting => "WAITING",
            Self::TimedWaiting => "TIMED_WAITING",
            Self::Blocked => "BLOCKED",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ThreadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One frame of a thread's stack trace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    /// Fully qualified class name.
    pub class_name: String,
    /// Method name within the class.
    pub method_name: String,
    /// Source file, when the class was compiled with debug info.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Source line; non-positive when unavailable.
    #[serde(default)]
    pub line_number: i32,
    /// True for native (JNI) frames.
    #[serde(default)]
    pub native_method: bool,
}

impl StackFrame {
    /// Render in the `pkg.Class.method(File.java:42)` shape used by
    /// `Throwable::printStackTrace`.
    pub fn render(&self) -> String {
        let location = if self.native_method {
            "Native Method".to_string()
        } else {
            match &self.file_name {
                Some(file) if self.line_number > 0 => format!("{}:{}", file, self.line_number),
                Some(file) => file.clone(),
                None => "Unknown Source".to_string(),
            }
        };
        format!("{}.{}({})", self.class_name, self.method_name, location)
    }
}

/// A monitor a thread currently holds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorInfo {
    /// Class of the locked object.
    pub class_name: String,
    /// Identity hash code of the locked object.
    #[serde(default)]
    pub identity_hash_code: i64,
    /// Stack depth at which the monitor was taken, when reported.
    #[serde(default)]
    pub locked_stack_depth: Option<i32>,
}

/// An ownable synchronizer (e.g. a `ReentrantLock`) a thread holds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockInfo {
    /// Class of the synchronizer.
    pub class_name: String,
    /// Identity hash code of the synchronizer.
    #[serde(default)]
    pub identity_hash_code: i64,
}

/// One thread in a dump.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadRecord {
    /// Thread id, unique within a dump.
    pub thread_id: i64,
    /// Thread name.
    pub thread_name: String,
    /// Scheduling state at capture time.
    pub thread_state: ThreadState,
    /// Lock the thread is waiting on, if any.
    #[serde(default)]
    pub lock_name: Option<String>,
    /// Name of the thread holding that lock, if known.
    #[serde(default)]
    pub lock_owner_name: Option<String>,
    /// Total milliseconds blocked; -1 when contention monitoring is off.
    #[serde(default)]
    pub blocked_time: i64,
    /// Number of times the thread blocked on a monitor.
    #[serde(default)]
    pub blocked_count: i64,
    /// Total milliseconds waited; -1 when contention monitoring is off.
    #[serde(default)]
    pub waited_time: i64,
    /// Number of times the thread waited for notification.
    #[serde(default)]
    pub waited_count: i64,
    /// True for daemon threads.
    #[serde(default)]
    pub daemon: bool,
    /// Thread priority, when reported.
    #[serde(default)]
    pub priority: Option<i32>,
    /// Stack trace at capture time, outermost frame last.
    #[serde(default)]
    pub stack_trace: Vec<StackFrame>,
    /// Monitors held by the thread.
    #[serde(default)]
    pub locked_monitors: Vec<MonitorInfo>,
    /// Ownable synchronizers held by the thread.
    #[serde(default)]
    pub locked_synchronizers: Vec<LockInfo>,
}

/// A point-in-time capture of a JVM's live threads, in payload order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThreadDump {
    /// The captured threads.
    #[serde(default)]
    pub threads: Vec<ThreadRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_parses_recognized_names() {
        assert_eq!(ThreadState::from("RUNNABLE".to_string()), ThreadState::Runnable);
        assert_eq!(ThreadState::from("WAITING".to_string()), ThreadState::Waiting);
        assert_eq!(
            ThreadState::from("TIMED_WAITING".to_string()),
            ThreadState::TimedWaiting
        );
        assert_eq!(ThreadState::from("BLOCKED".to_string()), ThreadState::Blocked);
    }

    #[test]
    fn state_preserves_unrecognized_names() {
        let state = ThreadState::from("TERMINATED".to_string());
        assert_eq!(state, ThreadState::Other("TERMINATED".to_string()));
        assert_eq!(state.as_str(), "TERMINATED");
    }

    #[test]
    fn record_deserializes_actuator_layout() {
        let raw = r#"{
            "threadName": "http-nio-8080-exec-1",
            "threadId": 42,
            "threadState": "TIMED_WAITING",
            "lockName": "java.util.concurrent.SynchronousQueue$TransferStack@1b2c3d",
            "blockedTime": -1,
            "blockedCount": 7,
            "waitedTime": -1,
            "waitedCount": 132,
            "daemon": true,
            "priority": 5,
            "stackTrace": [
                {
                    "methodName": "park",
                    "fileName": "Unsafe.java",
                    "lineNumber": -1,
                    "className": "jdk.internal.misc.Unsafe",
                    "nativeMethod": true
                }
            ]
        }"#;

        let record: ThreadRecord = serde_json::from_str(raw).expect("valid record");
        assert_eq!(record.thread_id, 42);
        assert_eq!(record.thread_state, ThreadState::TimedWaiting);
        assert!(record.daemon);
        assert_eq!(record.waited_count, 132);
        assert_eq!(record.stack_trace.len(), 1);
        assert!(record.stack_trace[0].native_method);
        assert!(record.locked_monitors.is_empty());
    }

    #[test]
    fn record_tolerates_missing_optional_fields() {
        let raw = r#"{"threadName": "main", "threadId": 1, "threadState": "RUNNABLE"}"#;
        let record: ThreadRecord = serde_json::from_str(raw).expect("valid record");
        assert_eq!(record.lock_name, None);
        assert_eq!(record.blocked_time, 0);
        assert!(!record.daemon);
        assert!(record.stack_trace.is_empty());
    }

    #[test]
    fn frame_renders_like_a_java_stack_trace() {
        let frame = StackFrame {
            class_name: "com.example.Worker".to_string(),
            method_name: "run".to_string(),
            file_name: Some("Worker.java".to_string()),
            line_number: 37,
            native_method: false,
        };
        assert_eq!(frame.render(), "com.example.Worker.run(Worker.java:37)");

        let native = StackFrame {
            class_name: "jdk.internal.misc.Unsafe".to_string(),
            method_name: "park".to_string(),
            file_name: Some("Unsafe.java".to_string()),
            line_number: -1,
            native_method: true,
        };
        assert_eq!(native.render(), "jdk.internal.misc.Unsafe.park(Native Method)");
    }
}
