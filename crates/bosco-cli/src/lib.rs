//! Bosco Gate CLI
//!
//! The command line plays the part of the simulator page: it collects the
//! five inputs, enforces the control ranges, calls the evaluator once and
//! renders the success or failure message.
//!
//! # Commands
//!
//! - `open`: evaluate one request from flags and/or a request file
//! - `validate`: check a request file without evaluating it
//! - `defaults`: print the default request
//!
//! Handlers live in [`commands`] so they can be tested without spawning the
//! binary.

pub mod commands;

pub use commands::{
    cmd_defaults, cmd_open, cmd_validate, render_report, OpenArgs, OpenReport, OutputFormat,
};
