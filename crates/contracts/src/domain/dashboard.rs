use crate::domain::product::StockStatus;
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Stock overview
// ============================================================================

/// Store-wide product counts per stock band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockOverview {
    pub low: u32,
    pub out: u32,
    pub overstocked: u32,
    pub optimal: u32,
}

impl StockOverview {
    pub fn total(&self) -> u32 {
        self.low + self.out + self.overstocked + self.optimal
    }

    /// Counts in the order the overview cards render.
    pub fn entries(&self) -> Vec<(StockStatus, u32)> {
        vec![
            (StockStatus::Low, self.low),
            (StockStatus::Out, self.out),
            (StockStatus::Overstocked, self.overstocked),
            (StockStatus::Optimal, self.optimal),
        ]
    }
}

// ============================================================================
// Alerts
// ============================================================================

/// Severity of an alert feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Warning,
    Danger,
    Info,
}

impl AlertKind {
    /// CSS modifier
    pub fn code(&self) -> &'static str {
        match self {
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
            AlertKind::Info => "info",
        }
    }
}

/// One entry in the dashboard alert feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub id: u32,
    pub kind: AlertKind,
    pub message: String,
    pub icon: String,
    pub raised_at: DateTime<Utc>,
}

// ============================================================================
// Inbound / outbound
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Arriving,
    Scheduled,
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Arriving => "Arriving",
            DeliveryStatus::Scheduled => "Scheduled",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DeliveryStatus::Arriving => "arriving",
            DeliveryStatus::Scheduled => "scheduled",
        }
    }
}

/// A delivery expected today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundDelivery {
    pub supplier: String,
    pub items: u32,
    pub expected_at: NaiveTime,
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboundKind {
    Sales,
    Returns,
    Transfers,
}

impl OutboundKind {
    pub fn label(&self) -> &'static str {
        match self {
            OutboundKind::Sales => "Sales",
            OutboundKind::Returns => "Returns",
            OutboundKind::Transfers => "Transfers",
        }
    }
}

/// One line of today's outbound summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundLine {
    pub kind: OutboundKind,
    pub count: u32,
    pub value_pence: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_totals() {
        let overview = StockOverview {
            low: 24,
            out: 8,
            overstocked: 12,
            optimal: 456,
        };
        assert_eq!(overview.total(), 500);
        assert_eq!(overview.entries()[0], (StockStatus::Low, 24));
        assert_eq!(overview.entries().len(), 4);
    }
}
