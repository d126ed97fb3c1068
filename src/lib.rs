#[macro_use]
pub mod macros;

pub mod api;
pub mod collector;
pub mod config;
pub mod parser;
pub mod schema;
