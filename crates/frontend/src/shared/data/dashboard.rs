use chrono::{DateTime, Duration, NaiveTime, Utc};
use contracts::domain::dashboard::{
    AlertKind, DeliveryStatus, InboundDelivery, OutboundKind, OutboundLine, StockAlert,
    StockOverview,
};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

/// Store-wide stock counts for the overview cards.
pub fn stock_overview() -> StockOverview {
    StockOverview {
        low: 24,
        out: 8,
        overstocked: 12,
        optimal: 456,
    }
}

/// Alert feed, newest first. Timestamps are offsets from `now`.
pub fn stock_alerts(now: DateTime<Utc>) -> Vec<StockAlert> {
    vec![
        StockAlert {
            id: 1,
            kind: AlertKind::Warning,
            message: "15 products expiring within 3 days".to_string(),
            icon: "alert-triangle".to_string(),
            raised_at: now - Duration::minutes(10),
        },
        StockAlert {
            id: 2,
            kind: AlertKind::Danger,
            message: "Milk (SKU-1234) out of stock".to_string(),
            icon: "package".to_string(),
            raised_at: now - Duration::minutes(25),
        },
        StockAlert {
            id: 3,
            kind: AlertKind::Info,
            message: "Price change pending for 8 items".to_string(),
            icon: "trending-up".to_string(),
            raised_at: now - Duration::hours(1),
        },
        StockAlert {
            id: 4,
            kind: AlertKind::Warning,
            message: "Delivery from Supplier A delayed".to_string(),
            icon: "truck".to_string(),
            raised_at: now - Duration::hours(2),
        },
    ]
}

/// Deliveries expected today.
pub fn inbound_deliveries() -> Vec<InboundDelivery> {
    vec![
        InboundDelivery {
            supplier: "Fresh Farms Ltd".to_string(),
            items: 45,
            expected_at: time(9, 30),
            status: DeliveryStatus::Arriving,
        },
        InboundDelivery {
            supplier: "Daily Dairy Co".to_string(),
            items: 28,
            expected_at: time(11, 0),
            status: DeliveryStatus::Scheduled,
        },
        InboundDelivery {
            supplier: "Bakery Express".to_string(),
            items: 35,
            expected_at: time(14, 0),
            status: DeliveryStatus::Scheduled,
        },
    ]
}

/// Today's outbound summary lines.
pub fn outbound_lines() -> Vec<OutboundLine> {
    vec![
        OutboundLine {
            kind: OutboundKind::Sales,
            count: 342,
            value_pence: 458_000,
        },
        OutboundLine {
            kind: OutboundKind::Returns,
            count: 12,
            value_pence: 15_600,
        },
        OutboundLine {
            kind: OutboundKind::Transfers,
            count: 8,
            value_pence: 24_500,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_counts_five_hundred_products() {
        assert_eq!(stock_overview().total(), 500);
    }

    #[test]
    fn inbound_items_sum() {
        let total: u32 = inbound_deliveries().iter().map(|d| d.items).sum();
        assert_eq!(total, 108);
    }

    #[test]
    fn outbound_totals() {
        let lines = outbound_lines();
        let items: u32 = lines.iter().map(|l| l.count).sum();
        let value: i64 = lines.iter().map(|l| l.value_pence).sum();
        assert_eq!(items, 362);
        assert_eq!(value, 498_100);
    }

    #[test]
    fn alerts_are_newest_first() {
        let now = Utc::now();
        let alerts = stock_alerts(now);
        assert_eq!(alerts.len(), 4);
        for pair in alerts.windows(2) {
            assert!(pair[0].raised_at > pair[1].raised_at);
        }
    }
}
