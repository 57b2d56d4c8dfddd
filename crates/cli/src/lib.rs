//! Command-line front end for the cron field codec.

pub mod cli;
