pub mod overview;
pub mod summary;

pub use overview::QuickOverview;
pub use summary::SummaryCards;
