pub mod avalanche;
pub mod collision;
pub mod digest;
pub mod sweep;
pub mod truncate;
