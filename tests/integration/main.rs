//! Integration test binary
//!
//! Each command gets its own module; shared fixture and process plumbing
//! lives in `helpers`.

mod helpers;

mod cli_test;
mod create_test;
mod info_test;
mod play_test;
