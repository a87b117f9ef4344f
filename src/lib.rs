pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod names;
pub mod output;
pub mod utils;

pub use config::{FilterConfig, InputSource, PartialConfig};
pub use error::FilterError;
pub use filter::{run, Outcome, RunReport};
