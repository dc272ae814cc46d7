//! Durable storage of finished battles.

pub mod results;

pub use results::{default_results_path, ResultStore};
