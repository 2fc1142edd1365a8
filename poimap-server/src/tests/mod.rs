//! Shared test harness modules for the map server.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected server outcomes"
)]

use super::*;

mod helpers;
