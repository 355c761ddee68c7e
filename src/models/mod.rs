pub mod line_item;
pub mod metrics;
pub mod summary;

pub use line_item::{LineItem, LineItemId, MarginMode, WithholdingClass};
pub use metrics::{Evaluation, LineItemMetrics, Margin, PortfolioTotals};
pub use summary::{DisplayRow, DisplayTotals, Summary, SummaryDisplay};
