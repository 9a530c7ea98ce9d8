//! Library components of the `livr-num` command-line tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod report;
