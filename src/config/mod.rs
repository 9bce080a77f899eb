//! Configuration files for the command-line tools.

pub mod locate;
