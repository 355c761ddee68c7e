pub mod app;
pub mod calc;
pub mod portfolio;
pub mod report;
pub mod ui;
pub mod utils;

pub use app::{App, Field};
pub use portfolio::{ImportOutcome, Portfolio};
