//! Logging support.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros the crate logs with and can install a `tracing-subscriber`
//! formatter.  Without it, the same names resolve to no-op replacements so
//! call sites stay unconditional.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a formatting subscriber that writes through the test
    /// harness's captured output.  Safe to call any number of times; only
    /// the first call has an effect, and an already-installed global
    /// subscriber is left in place.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }

    // Re-export tracing macros for convenience
    pub use tracing::{debug, info, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __spgraph_noop_event {
        ($($args:tt)*) => {{}};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __spgraph_noop_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub use crate::__spgraph_noop_event as debug;
    pub use crate::__spgraph_noop_event as info;
    pub use crate::__spgraph_noop_event as trace;
    pub use crate::__spgraph_noop_span as info_span;

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
