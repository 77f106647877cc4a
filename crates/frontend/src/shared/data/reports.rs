use crate::shared::export::CsvExportable;
use contracts::domain::reports::{
    CategoryShare, DailySales, MetricFormat, PerformanceMetric, SupplierScore, TopProduct, Trend,
    TurnoverPoint,
};

fn sales(day: &str, sales_pence: i64, items: u32) -> DailySales {
    DailySales {
        day: day.to_string(),
        sales_pence,
        items,
    }
}

/// This week's daily sales, Monday first.
pub fn weekly_sales() -> Vec<DailySales> {
    vec![
        sales("Mon", 420_000, 342),
        sales("Tue", 380_000, 298),
        sales("Wed", 510_000, 425),
        sales("Thu", 460_000, 381),
        sales("Fri", 620_000, 512),
        sales("Sat", 780_000, 658),
        sales("Sun", 590_000, 489),
    ]
}

/// Sales share per category for the donut chart.
pub fn category_shares() -> Vec<CategoryShare> {
    let entries = [
        ("Dairy", 28, "#3b82f6"),
        ("Bakery", 22, "#10b981"),
        ("Beverages", 18, "#f59e0b"),
        ("Produce", 15, "#ef4444"),
        ("Meat", 12, "#8b5cf6"),
        ("Other", 5, "#6b7280"),
    ];
    entries
        .iter()
        .map(|(name, percent, color)| CategoryShare {
            name: name.to_string(),
            percent: *percent,
            color: color.to_string(),
        })
        .collect()
}

/// Stock turnover rate over the last six months.
pub fn turnover_series() -> Vec<TurnoverPoint> {
    let entries = [
        ("Jul", 4.2),
        ("Aug", 4.5),
        ("Sep", 3.8),
        ("Oct", 4.7),
        ("Nov", 5.1),
        ("Dec", 5.3),
    ];
    entries
        .iter()
        .map(|(month, rate)| TurnoverPoint {
            month: month.to_string(),
            rate: *rate,
        })
        .collect()
}

/// Top sellers this week.
pub fn top_products() -> Vec<TopProduct> {
    let entries = [
        ("Whole Milk 2L", 456, 68_400, Trend::Up),
        ("White Bread", 389, 46_700, Trend::Up),
        ("Coca Cola 2L", 342, 51_200, Trend::Down),
        ("Fresh Eggs (12)", 298, 59_600, Trend::Up),
        ("Chicken Breast", 267, 106_800, Trend::Up),
    ];
    entries
        .iter()
        .map(|(name, units_sold, revenue_pence, trend)| TopProduct {
            name: name.to_string(),
            units_sold: *units_sold,
            revenue_pence: *revenue_pence,
            trend: *trend,
        })
        .collect()
}

/// Summary cards across the top of the reports page.
pub fn performance_metrics() -> Vec<PerformanceMetric> {
    vec![
        PerformanceMetric {
            label: "Total Sales".to_string(),
            value: 3_860_000.0,
            format: MetricFormat::Money,
            change: "+12.5%".to_string(),
            trend: Trend::Up,
            icon: "pound-sterling".to_string(),
        },
        PerformanceMetric {
            label: "Items Sold".to_string(),
            value: 3105.0,
            format: MetricFormat::Count,
            change: "+8.3%".to_string(),
            trend: Trend::Up,
            icon: "package".to_string(),
        },
        PerformanceMetric {
            label: "Wastage".to_string(),
            value: 42_000.0,
            format: MetricFormat::Money,
            change: "-5.2%".to_string(),
            trend: Trend::Down,
            icon: "alert-triangle".to_string(),
        },
        PerformanceMetric {
            label: "Stock Turnover".to_string(),
            value: 5.3,
            format: MetricFormat::Multiplier,
            change: "+0.4x".to_string(),
            trend: Trend::Up,
            icon: "trending-up".to_string(),
        },
    ]
}

/// Supplier performance table rows.
pub fn supplier_scores() -> Vec<SupplierScore> {
    let entries = [
        ("Fresh Farms Ltd", 24, 96, 98),
        ("Daily Dairy Co", 18, 94, 97),
        ("Bakery Express", 22, 91, 95),
        ("Quality Meats", 15, 100, 99),
        ("Drinks Direct", 12, 88, 92),
    ];
    entries
        .iter()
        .map(|(name, deliveries, on_time_pct, quality_pct)| SupplierScore {
            name: name.to_string(),
            deliveries: *deliveries,
            on_time_pct: *on_time_pct,
            quality_pct: *quality_pct,
        })
        .collect()
}

impl CsvExportable for DailySales {
    fn headers() -> Vec<&'static str> {
        vec!["Day", "Sales (£)", "Items"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.day.clone(),
            (self.sales_pence / 100).to_string(),
            self.items.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    #[test]
    fn weekly_items_match_summary_metric() {
        let items: u32 = weekly_sales().iter().map(|s| s.items).sum();
        assert_eq!(items, 3105);
    }

    #[test]
    fn category_shares_sum_to_whole() {
        let total: u32 = category_shares().iter().map(|c| c.percent as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn turnover_ends_at_current_rate() {
        let series = turnover_series();
        assert_eq!(series.len(), 6);
        assert_eq!(series[5].month, "Dec");
        assert!((series[5].rate - 5.3).abs() < f64::EPSILON);
    }

    #[test]
    fn sales_rows_export_as_csv() {
        let csv = build_csv(&weekly_sales());
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Day,Sales (£),Items"));
        assert_eq!(lines.next(), Some("Mon,4200,342"));
        assert_eq!(csv.lines().count(), 8);
    }
}
