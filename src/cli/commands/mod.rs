//! CLI command implementations
//!
//! Each command returns the process exit code: 0 on normal completion,
//! 1 on configuration or fatal errors.

pub mod init;
pub mod sync;
pub mod validate;

/// Normal completion, including runs with failed batches
pub const EXIT_OK: i32 = 0;

/// Configuration or fatal error
pub const EXIT_FAILURE: i32 = 1;
