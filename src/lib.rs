// Library crate exposing modules for the binary and integration tests

pub mod command;
pub mod model;
pub mod report;
pub mod repository;
pub mod stats;
pub mod util;
