// File: crates/viz-core/src/lib.rs
// Summary: Core library entry point; exports public API for scales, layouts, colors and SVG output.

pub mod chord;
pub mod color;
pub mod dataset;
pub mod error;
pub mod force;
pub mod frame;
pub mod geo;
pub mod hexbin;
pub mod kde;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod ticks;
pub mod treemap;

pub use color::{Ramp, Rgb, SequentialScale};
pub use error::VizError;
pub use frame::{Frame, Margin};
pub use scale::{BandScale, LinearScale, LogScale};
pub use svg::{fmt_num, Element};
pub use theme::Theme;
