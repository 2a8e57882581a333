pub mod config;
pub mod digest;
pub mod error;
pub mod input;
pub mod report;
