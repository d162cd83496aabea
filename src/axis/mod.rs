pub mod chart;
pub mod format;
pub mod mapper;
pub mod range;
pub mod ticks;
pub mod variant;

pub use chart::{Chart, Redraw};
pub use format::format_si;
pub use mapper::{CoordinateMapper, PlotGeometry};
pub use range::{AxisRange, compute_range};
pub use ticks::{Tick, generate_ticks};
pub use variant::{CAPACITANCE, INDUCTANCE, MAGNITUDE, TickStep, Variant, VariantDescriptor};
