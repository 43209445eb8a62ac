//! Stable exit codes for the `paycalc` command.

/// No pay rate in the configuration or on the command line (POSIX `EINVAL`).
pub const EINVAL: i32 = 22;
