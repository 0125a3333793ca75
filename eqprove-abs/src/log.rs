/*!

Logging macros. Every other crate in the workspace goes through these instead of calling `tracing` directly, so the
backing implementation can be swapped without touching call sites.

*/

pub use tracing::{debug, error, info, trace, warn};

/// Alias for the most severe level; kept distinct from `error!` so that call sites documenting a fatal,
/// process-ending condition read differently from a recoverable error.
#[macro_export]
macro_rules! critical {
  ($($arg:tt)*) => {
    $crate::tracing::error!(critical = true, $($arg)*)
  };
}

pub use critical;
