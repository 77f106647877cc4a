//! Small SVG charts for the reports page. Geometry is computed by plain
//! functions so scaling stays testable without a DOM.

pub mod bar_chart;
pub mod donut_chart;
pub mod line_chart;

pub use bar_chart::BarChart;
pub use donut_chart::DonutChart;
pub use line_chart::LineChart;
