pub mod models;
pub mod listing;

pub use models::{CaptionInterval, CaptionTimeline};
pub use listing::CaptionListing;
