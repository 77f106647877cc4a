use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Channels & messages
// ============================================================================

/// A staff chat channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChannel {
    /// Stable key used for selection ("team", "stockroom", ...)
    pub key: String,
    pub name: String,
    pub unread: u32,
    pub online: u32,
}

/// One message in a channel thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub is_own: bool,
    pub attachment: Option<String>,
}

impl ChatMessage {
    /// A message typed by the current user just now.
    pub fn own(body: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: "You".to_string(),
            body: body.into(),
            sent_at,
            is_own: true,
            attachment: None,
        }
    }
}

// ============================================================================
// Dispatch feed
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchKind {
    Delivery,
    Task,
    Delay,
    Scheduled,
}

impl DispatchKind {
    /// CSS modifier
    pub fn code(&self) -> &'static str {
        match self {
            DispatchKind::Delivery => "delivery",
            DispatchKind::Task => "task",
            DispatchKind::Delay => "delay",
            DispatchKind::Scheduled => "scheduled",
        }
    }
}

/// One card in the dispatch updates feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchUpdate {
    pub kind: DispatchKind,
    pub title: String,
    pub detail: String,
    pub icon: String,
    pub posted_at: DateTime<Utc>,
}

// ============================================================================
// Contacts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Online,
    Busy,
    Offline,
}

impl Presence {
    pub fn code(&self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Busy => "busy",
            Presence::Offline => "offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Presence::Online => "Online",
            Presence::Busy => "Busy",
            Presence::Offline => "Offline",
        }
    }
}

/// Quick-contact list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub presence: Presence,
}

impl Contact {
    /// Avatar initials, one letter per name word.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

// ============================================================================
// Broadcasts
// ============================================================================

/// Who a store broadcast goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroadcastAudience {
    AllStaff,
    StockroomOnly,
    CheckoutOnly,
    ManagersOnly,
}

impl BroadcastAudience {
    pub fn code(&self) -> &'static str {
        match self {
            BroadcastAudience::AllStaff => "all-staff",
            BroadcastAudience::StockroomOnly => "stockroom",
            BroadcastAudience::CheckoutOnly => "checkout",
            BroadcastAudience::ManagersOnly => "managers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BroadcastAudience::AllStaff => "All Staff",
            BroadcastAudience::StockroomOnly => "Stockroom Only",
            BroadcastAudience::CheckoutOnly => "Checkout Only",
            BroadcastAudience::ManagersOnly => "Managers Only",
        }
    }

    pub fn all() -> Vec<BroadcastAudience> {
        vec![
            BroadcastAudience::AllStaff,
            BroadcastAudience::StockroomOnly,
            BroadcastAudience::CheckoutOnly,
            BroadcastAudience::ManagersOnly,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all-staff" => Some(BroadcastAudience::AllStaff),
            "stockroom" => Some(BroadcastAudience::StockroomOnly),
            "checkout" => Some(BroadcastAudience::CheckoutOnly),
            "managers" => Some(BroadcastAudience::ManagersOnly),
            _ => None,
        }
    }
}

/// A broadcast that already went out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastNote {
    pub message: String,
    pub audience: BroadcastAudience,
    pub sent_at: DateTime<Utc>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Submitted by the store broadcast form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastRequest {
    pub audience: BroadcastAudience,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_initials() {
        let contact = Contact {
            name: "Store Manager".to_string(),
            presence: Presence::Online,
        };
        assert_eq!(contact.initials(), "SM");

        let single = Contact {
            name: "Dispatch".to_string(),
            presence: Presence::Busy,
        };
        assert_eq!(single.initials(), "D");
    }

    #[test]
    fn audience_round_trip() {
        for audience in BroadcastAudience::all() {
            assert_eq!(BroadcastAudience::from_code(audience.code()), Some(audience));
        }
    }
}
