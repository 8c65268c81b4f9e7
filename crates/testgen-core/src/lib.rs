pub mod artifact;
pub mod config;
pub mod error;
pub mod instruction;
pub mod io;
pub mod paths;
pub mod planner;
pub mod presence;
pub mod scan;
pub mod types;

pub use error::{Result, TestgenError};
