//! Library half of the order-signing CLI.
//!
//! Everything the binary does lives here so it can be exercised from tests:
//! [`config`] loads the explicit configuration record, [`flow`] runs the
//! sequential sign-and-submit flow against a live node, and [`error`] maps
//! failures to the process exit code.

pub mod config;
pub mod error;
pub mod flow;
