mod adapter;

pub use adapter::AxisSeries;
