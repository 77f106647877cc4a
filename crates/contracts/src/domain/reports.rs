use serde::{Deserialize, Serialize};

// ============================================================================
// Series data
// ============================================================================

/// One day of the weekly sales series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub day: String,
    pub sales_pence: i64,
    pub items: u32,
}

/// Sales share of one category, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub percent: u8,
    /// Segment colour (hex), as rendered by the donut chart
    pub color: String,
}

/// Monthly stock turnover rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoverPoint {
    pub month: String,
    pub rate: f64,
}

// ============================================================================
// Metrics & rankings
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// CSS modifier
    pub fn code(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// How to format a metric's numeric value on the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricFormat {
    /// Pence, rendered as pounds
    Money,
    /// Plain count with thousands grouping
    Count,
    /// Turnover-style multiplier, e.g. "5.3x"
    Multiplier,
}

/// One performance summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub label: String,
    pub value: f64,
    pub format: MetricFormat,
    /// Pre-formatted period-over-period change, e.g. "+12.5%"
    pub change: String,
    pub trend: Trend,
    pub icon: String,
}

/// Top-seller list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub units_sold: u32,
    pub revenue_pence: i64,
    pub trend: Trend,
}

// ============================================================================
// Supplier performance
// ============================================================================

/// Traffic-light band for supplier percentage scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    /// 95+ is good, 90+ fair, below that poor.
    pub fn classify(percent: u8) -> Self {
        if percent >= 95 {
            ScoreBand::Good
        } else if percent >= 90 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    /// CSS modifier
    pub fn code(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}

/// One row of the supplier performance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierScore {
    pub name: String,
    pub deliveries: u32,
    pub on_time_pct: u8,
    pub quality_pct: u8,
}

// ============================================================================
// Report builder
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl ReportPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "daily",
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "Daily",
            ReportPeriod::Weekly => "Weekly",
            ReportPeriod::Monthly => "Monthly",
        }
    }

    pub fn all() -> Vec<ReportPeriod> {
        vec![ReportPeriod::Daily, ReportPeriod::Weekly, ReportPeriod::Monthly]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "daily" => Some(ReportPeriod::Daily),
            "weekly" => Some(ReportPeriod::Weekly),
            "monthly" => Some(ReportPeriod::Monthly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    SalesAnalysis,
    StockMovement,
    WastageReport,
    StaffActivity,
    SupplierComparison,
}

impl ReportKind {
    pub fn code(&self) -> &'static str {
        match self {
            ReportKind::SalesAnalysis => "sales-analysis",
            ReportKind::StockMovement => "stock-movement",
            ReportKind::WastageReport => "wastage-report",
            ReportKind::StaffActivity => "staff-activity",
            ReportKind::SupplierComparison => "supplier-comparison",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::SalesAnalysis => "Sales Analysis",
            ReportKind::StockMovement => "Stock Movement",
            ReportKind::WastageReport => "Wastage Report",
            ReportKind::StaffActivity => "Staff Activity",
            ReportKind::SupplierComparison => "Supplier Comparison",
        }
    }

    pub fn all() -> Vec<ReportKind> {
        vec![
            ReportKind::SalesAnalysis,
            ReportKind::StockMovement,
            ReportKind::WastageReport,
            ReportKind::StaffActivity,
            ReportKind::SupplierComparison,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sales-analysis" => Some(ReportKind::SalesAnalysis),
            "stock-movement" => Some(ReportKind::StockMovement),
            "wastage-report" => Some(ReportKind::WastageReport),
            "staff-activity" => Some(ReportKind::StaffActivity),
            "supplier-comparison" => Some(ReportKind::SupplierComparison),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    Last7Days,
    Last30Days,
    Last3Months,
    Last6Months,
    CustomRange,
}

impl TimeWindow {
    pub fn code(&self) -> &'static str {
        match self {
            TimeWindow::Last7Days => "last-7-days",
            TimeWindow::Last30Days => "last-30-days",
            TimeWindow::Last3Months => "last-3-months",
            TimeWindow::Last6Months => "last-6-months",
            TimeWindow::CustomRange => "custom-range",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Last7Days => "Last 7 days",
            TimeWindow::Last30Days => "Last 30 days",
            TimeWindow::Last3Months => "Last 3 months",
            TimeWindow::Last6Months => "Last 6 months",
            TimeWindow::CustomRange => "Custom Range",
        }
    }

    pub fn all() -> Vec<TimeWindow> {
        vec![
            TimeWindow::Last7Days,
            TimeWindow::Last30Days,
            TimeWindow::Last3Months,
            TimeWindow::Last6Months,
            TimeWindow::CustomRange,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "last-7-days" => Some(TimeWindow::Last7Days),
            "last-30-days" => Some(TimeWindow::Last30Days),
            "last-3-months" => Some(TimeWindow::Last3Months),
            "last-6-months" => Some(TimeWindow::Last6Months),
            "custom-range" => Some(TimeWindow::CustomRange),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ExportFormat {
    pub fn code(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Excel => "Excel",
            ExportFormat::Csv => "CSV",
        }
    }

    pub fn all() -> Vec<ExportFormat> {
        vec![ExportFormat::Pdf, ExportFormat::Excel, ExportFormat::Csv]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pdf" => Some(ExportFormat::Pdf),
            "excel" => Some(ExportFormat::Excel),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Submitted by the custom report builder form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub kind: ReportKind,
    pub window: TimeWindow,
    pub format: ExportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::classify(100), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(95), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(94), ScoreBand::Fair);
        assert_eq!(ScoreBand::classify(90), ScoreBand::Fair);
        assert_eq!(ScoreBand::classify(88), ScoreBand::Poor);
    }

    #[test]
    fn report_enums_round_trip() {
        for kind in ReportKind::all() {
            assert_eq!(ReportKind::from_code(kind.code()), Some(kind));
        }
        for window in TimeWindow::all() {
            assert_eq!(TimeWindow::from_code(window.code()), Some(window));
        }
        for format in ExportFormat::all() {
            assert_eq!(ExportFormat::from_code(format.code()), Some(format));
        }
    }

    #[test]
    fn report_request_serializes() {
        let request = ReportRequest {
            kind: ReportKind::SalesAnalysis,
            window: TimeWindow::Last7Days,
            format: ExportFormat::Csv,
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: ReportRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
