// combcheck-cli/src/error.rs
//
// CLI result alias over the core error type. The CLI introduces no error
// kinds of its own; everything it can fail on maps onto CoreError.

use combcheck_core::CoreResult;

/// Type alias for CLI results using the core error type.
pub type CliResult<T> = CoreResult<T>;
