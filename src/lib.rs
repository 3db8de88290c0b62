//! Shared logic for the `leafutils` binaries.
//!
//! ## Module map
//! - `strftime.rs` — percent-directive to native-layout translation.
//! - `layout.rs` — fixed layouts and precision variants for `date`.
//! - `checksum.rs` — MD5 digest computation and check-list handling.
//!
//! ## Conventions
//! - Each binary under `src/bin/` stays a thin shell; logic lives here.
//! - Lookup tables are immutable statics, built once.
//! - Per-file failures report and continue; only usage errors are fatal.

pub mod checksum;
pub mod layout;
pub mod strftime;
