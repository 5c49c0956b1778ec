//! Tracing support for search diagnostics.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros the
//! crate uses and can install a `tracing-subscriber` formatter.  Without it,
//! the same names are no-op replacements so call sites need no `cfg`.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    /// Installs a stderr formatter once per process.  `verbose` lowers the
    /// level from `INFO` to `DEBUG`.  Later calls do nothing.
    pub fn init_tracing(verbose: bool) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = if verbose { Level::DEBUG } else { Level::INFO };
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        });
    }

    // Re-export tracing macros for convenience
    pub use tracing::{debug, debug_span, info};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing(_verbose: bool) {
        // No-op when tracing is disabled
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! __graph_search_noop_event {
        // Shorthand fields still count as reads of the local they name.
        ($($field:ident),+ , $message:literal $(,)?) => {{
            $( let _ = &$field; )+
        }};
        ($($args:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! __graph_search_noop_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub use crate::__graph_search_noop_event as debug;
    pub use crate::__graph_search_noop_event as info;
    pub use crate::__graph_search_noop_span as debug_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[deny(unused_variables, unused_assignments)]
    fn test_counter_read_only_by_event_is_used() {
        let mut draws = 0usize;
        for _ in 0..3 {
            draws += 1;
        }
        debug!(draws, "counted draws");
    }

    #[test]
    fn test_events_inside_span() {
        let value = 7;
        let _span = debug_span!("outer", value).entered();
        debug!(value = value + 1, "key-value field");
        info!("plain message");
        assert_eq!(value, 7);
    }
}
