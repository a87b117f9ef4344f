pub mod pipeline;
pub mod stages;

pub use pipeline::{run, Outcome, RunReport};
pub use stages::{match_addresses, match_names, prefix_matches};

pub const OWNER_NAME: &str = "OWNER NAME";
pub const OWNER_ADDRESS: &str = "OWNER ADDRESS";
pub const SITUS_ADDRESS: &str = "SITUS ADDRESS";
