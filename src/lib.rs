//! session_chart crate: intraday percentage-change charts on a session-compressed time axis

pub mod chart;
pub mod data_types;
pub mod gaps;
pub mod geometry;
pub mod path;
pub mod presentation;
pub mod rendering;
pub mod scales;
pub mod session;
pub mod store;
pub mod theme;
pub mod transform;
pub mod utils;

pub use chart::IntradayChart;
pub use data_types::{Canvas, ChartConfig, Margins, Sample, TrendSeries};
pub use geometry::{build, GeometryBuilder, PlotGeometry, ValueRange};
pub use presentation::{format_pct, present, ChartBody, DisplayModel, Presenter, Trend};
pub use session::{minutes_of, SessionClock, SessionMinute, TradingSession};
pub use store::{load_series, MemoryStore, SampleStore};
