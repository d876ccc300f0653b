pub mod app;
pub mod error;
pub mod event;
pub mod report;

pub use app::App;
pub use error::AppError;
pub use event::{AppEvent, NextStep};
pub use report::RunReport;
