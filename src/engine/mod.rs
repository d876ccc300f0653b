pub mod config;
pub mod error;
pub mod hyphen;
pub mod pipeline;
pub mod stats;
pub mod transform;

pub use config::Config;
pub use error::{OsErrorDisplay, StatsError};
pub use hyphen::join_hyphenated;
pub use pipeline::{run_pipeline, transform_token};
pub use stats::{median_length, median_token, Statistics};
pub use transform::{
    reverse_if_multiple_of_four, truncate_if_multiple_of_five, uppercase_if_mostly_upper,
};
