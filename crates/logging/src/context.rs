//! crates/logging/src/context.rs
//! Shared logging configuration: level, sink, and class visibility sets.

use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use errors::DriverError;

use crate::level::Level;
use crate::sink::{LogSink, stdout_sink};

static GLOBAL: LazyLock<Arc<LoggingContext>> = LazyLock::new(|| Arc::new(LoggingContext::new()));

/// Shared configuration consulted by every [`Logger`](crate::Logger) bound to
/// it: the active severity threshold, the output sink, and the two class
/// visibility sets.
///
/// Exactly one visibility set is authoritative at any time: the explicit
/// filter when non-empty, otherwise the allow-list of every class name seen
/// at logger construction. All state sits behind one mutex; sinks are invoked
/// outside it, so a sink may itself construct loggers or reconfigure the
/// context without deadlocking.
///
/// Most applications use the process-wide [`LoggingContext::global`] instance
/// implicitly through [`Logger::new`](crate::Logger::new); embedders that
/// want isolated configuration (tests, multi-tenant hosts) construct their
/// own and hand it to [`Logger::with_context`](crate::Logger::with_context).
pub struct LoggingContext {
    state: Mutex<State>,
}

struct State {
    level: Level,
    sink: LogSink,
    known_classes: BTreeSet<String>,
    filtered_classes: BTreeSet<String>,
}

impl LoggingContext {
    /// Creates a fresh context: level [`Level::Error`], stdout sink, no
    /// registered or filtered classes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                level: Level::default(),
                sink: stdout_sink(),
                known_classes: BTreeSet::new(),
                filtered_classes: BTreeSet::new(),
            }),
        }
    }

    /// Returns the process-wide default context.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Restores the default level ([`Level::Error`]) and clears the explicit
    /// filter. The sink and the allow-list survive a reset.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.level = Level::default();
        state.filtered_classes.clear();
    }

    /// Returns the active severity threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        self.lock().level
    }

    /// Replaces the severity threshold.
    pub fn set_level(&self, level: Level) {
        self.lock().level = level;
    }

    /// Parses `name` and replaces the severity threshold.
    ///
    /// # Errors
    ///
    /// [`DriverError::InvalidArgument`] when `name` is not one of `error`,
    /// `warn`, `info`, `debug`; the threshold is left untouched.
    pub fn set_level_name(&self, name: &str) -> Result<(), DriverError> {
        let level = name.parse::<Level>()?;
        self.set_level(level);
        Ok(())
    }

    /// Returns a clone of the active sink.
    #[must_use]
    pub fn sink(&self) -> LogSink {
        Arc::clone(&self.lock().sink)
    }

    /// Replaces the active sink. Last writer wins; sinks never stack.
    pub fn set_sink(&self, sink: LogSink) {
        self.lock().sink = sink;
    }

    /// Replaces the explicit class filter with the given names.
    ///
    /// Only `kind == "class"` is understood; any other kind is a silent
    /// no-op, keeping the call best-effort for forward compatibility. An
    /// empty `names` clears the filter, making the allow-list authoritative
    /// again. Duplicate names collapse under set semantics.
    pub fn filter<I, S>(&self, kind: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if kind != "class" {
            return;
        }
        let replacement: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        self.lock().filtered_classes = replacement;
    }

    /// Records `class_name` in the allow-list unless the explicit filter
    /// already names it. Called from logger construction.
    pub(crate) fn register(&self, class_name: &str) {
        let mut state = self.lock();
        if !state.filtered_classes.contains(class_name) {
            state.known_classes.insert(class_name.to_string());
        }
    }

    /// Evaluates both gates for an emission of `severity` from `class_name`.
    ///
    /// Returns the sink to invoke when both gates pass, `None` otherwise. The
    /// sink is cloned out so the caller invokes it after the lock is
    /// released.
    pub(crate) fn sink_for(&self, severity: Level, class_name: &str) -> Option<LogSink> {
        let state = self.lock();
        if !state.level.allows(severity) {
            return None;
        }
        let visible = if state.filtered_classes.is_empty() {
            state.known_classes.contains(class_name)
        } else {
            state.filtered_classes.contains(class_name)
        };
        visible.then(|| Arc::clone(&state.sink))
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_defaults() {
        let context = LoggingContext::new();
        assert_eq!(context.level(), Level::Error);
    }

    #[test]
    fn reset_restores_level_and_clears_filter() {
        let context = LoggingContext::new();
        context.set_level(Level::Debug);
        context.filter("class", ["Connection"]);

        context.reset();

        assert_eq!(context.level(), Level::Error);
        context.register("Server");
        // With the filter cleared the allow-list is authoritative again.
        assert!(context.sink_for(Level::Error, "Server").is_some());
    }

    #[test]
    fn set_level_name_parses_and_applies() {
        let context = LoggingContext::new();
        context.set_level_name("info").unwrap();
        assert_eq!(context.level(), Level::Info);
    }

    #[test]
    fn set_level_name_rejects_unknown_and_keeps_level() {
        let context = LoggingContext::new();
        context.set_level(Level::Warn);
        let err = context.set_level_name("trace").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(context.level(), Level::Warn);
    }

    #[test]
    fn unregistered_class_is_invisible() {
        let context = LoggingContext::new();
        assert!(context.sink_for(Level::Error, "Ghost").is_none());
    }

    #[test]
    fn explicit_filter_overrides_allow_list() {
        let context = LoggingContext::new();
        context.register("A");
        context.register("C");
        context.filter("class", ["A", "B"]);

        assert!(context.sink_for(Level::Error, "A").is_some());
        assert!(context.sink_for(Level::Error, "B").is_some());
        assert!(context.sink_for(Level::Error, "C").is_none());
    }

    #[test]
    fn empty_filter_restores_allow_list() {
        let context = LoggingContext::new();
        context.register("C");
        context.filter("class", ["A"]);
        assert!(context.sink_for(Level::Error, "C").is_none());

        context.filter("class", Vec::<String>::new());
        assert!(context.sink_for(Level::Error, "C").is_some());
    }

    #[test]
    fn unknown_filter_kind_is_a_no_op() {
        let context = LoggingContext::new();
        context.register("A");
        context.filter("collection", ["A"]);
        // No explicit filter was installed, so the allow-list still gates.
        assert!(context.sink_for(Level::Error, "A").is_some());
    }

    #[test]
    fn register_skips_names_in_the_explicit_filter() {
        let context = LoggingContext::new();
        context.filter("class", ["A"]);
        context.register("A");
        context.register("B");

        // After the filter clears, only B made it into the allow-list.
        context.filter("class", Vec::<String>::new());
        assert!(context.sink_for(Level::Error, "A").is_none());
        assert!(context.sink_for(Level::Error, "B").is_some());
    }

    #[test]
    fn severity_gate_consults_level() {
        let context = LoggingContext::new();
        context.register("A");
        assert!(context.sink_for(Level::Debug, "A").is_none());
        context.set_level(Level::Debug);
        assert!(context.sink_for(Level::Debug, "A").is_some());
    }

    #[test]
    fn global_returns_the_same_instance() {
        let first = LoggingContext::global();
        let second = LoggingContext::global();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
