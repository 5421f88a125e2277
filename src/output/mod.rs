//! Everything the tool shows or writes: console summary, progress,
//! error reports and the SVG card.

mod error_output;
mod progress;
pub mod svg;
mod table;

pub use error_output::ErrorOutput;
pub use progress::FetchProgress;
pub use table::format_summary;
