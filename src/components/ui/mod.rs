//! Small presentational building blocks.

mod tooltip;

pub use tooltip::Tooltip;
