use chrono::{DateTime, Duration, NaiveTime, Utc};
use contracts::domain::communication::{
    BroadcastAudience, BroadcastNote, ChatChannel, ChatMessage, Contact, DispatchKind,
    DispatchUpdate, Presence,
};
use uuid::Uuid;

fn today_at(now: DateTime<Utc>, h: u32, m: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
    now.date_naive().and_time(time).and_utc()
}

fn channel(key: &str, name: &str, unread: u32, online: u32) -> ChatChannel {
    ChatChannel {
        key: key.to_string(),
        name: name.to_string(),
        unread,
        online,
    }
}

/// Staff chat channels, selection order.
pub fn channels() -> Vec<ChatChannel> {
    vec![
        channel("team", "Store Team", 3, 8),
        channel("stockroom", "Stockroom Staff", 1, 4),
        channel("managers", "Managers", 0, 2),
        channel("checkout", "Checkout Team", 0, 6),
    ]
}

/// This morning's thread, oldest first.
pub fn initial_messages(now: DateTime<Utc>) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: Uuid::new_v4(),
            sender: "John Smith".to_string(),
            body: "Morning delivery arrived early. Need help unloading at bay 2.".to_string(),
            sent_at: today_at(now, 8, 15),
            is_own: false,
            attachment: None,
        },
        ChatMessage {
            id: Uuid::new_v4(),
            sender: "You".to_string(),
            body: "On my way. Be there in 5 minutes.".to_string(),
            sent_at: today_at(now, 8, 16),
            is_own: true,
            attachment: None,
        },
        ChatMessage {
            id: Uuid::new_v4(),
            sender: "Sarah Martinez".to_string(),
            body: "Can someone check dairy section? Customer reported low milk stock.".to_string(),
            sent_at: today_at(now, 8, 45),
            is_own: false,
            attachment: None,
        },
        ChatMessage {
            id: Uuid::new_v4(),
            sender: "You".to_string(),
            body: "I'll handle it. Moving stock from storage now.".to_string(),
            sent_at: today_at(now, 8, 47),
            is_own: true,
            attachment: None,
        },
        ChatMessage {
            id: Uuid::new_v4(),
            sender: "Mike Johnson".to_string(),
            body: "Price labels for aisle 3 are ready. Attaching the list.".to_string(),
            sent_at: today_at(now, 9, 12),
            is_own: false,
            attachment: Some("price_labels_A3.pdf".to_string()),
        },
    ]
}

/// Dispatch feed cards, newest first.
pub fn dispatch_updates(now: DateTime<Utc>) -> Vec<DispatchUpdate> {
    vec![
        DispatchUpdate {
            kind: DispatchKind::Delivery,
            title: "Fresh Farms Ltd - Delivery Arrived".to_string(),
            detail: "Bay 2 • 45 items".to_string(),
            icon: "truck".to_string(),
            posted_at: now - Duration::minutes(10),
        },
        DispatchUpdate {
            kind: DispatchKind::Task,
            title: "Urgent Stock Check Required".to_string(),
            detail: "Dairy Section • Assigned to: Sarah M.".to_string(),
            icon: "package".to_string(),
            posted_at: now - Duration::minutes(25),
        },
        DispatchUpdate {
            kind: DispatchKind::Delay,
            title: "Delivery Delayed".to_string(),
            detail: "Bakery Express • Expected: 2:30 PM".to_string(),
            icon: "alert-circle".to_string(),
            posted_at: now - Duration::hours(1),
        },
        DispatchUpdate {
            kind: DispatchKind::Scheduled,
            title: "Upcoming Delivery".to_string(),
            detail: "Daily Dairy Co • Scheduled: 11:00 AM".to_string(),
            icon: "clock".to_string(),
            posted_at: now - Duration::hours(2),
        },
    ]
}

/// Quick-contact sidebar entries.
pub fn quick_contacts() -> Vec<Contact> {
    vec![
        Contact {
            name: "Store Manager".to_string(),
            presence: Presence::Online,
        },
        Contact {
            name: "Warehouse Lead".to_string(),
            presence: Presence::Online,
        },
        Contact {
            name: "Shift Supervisor".to_string(),
            presence: Presence::Busy,
        },
        Contact {
            name: "Delivery Coordinator".to_string(),
            presence: Presence::Offline,
        },
    ]
}

/// Broadcasts that already went out, newest first.
pub fn recent_broadcasts(now: DateTime<Utc>) -> Vec<BroadcastNote> {
    vec![
        BroadcastNote {
            message: "Delivery arriving in 10 minutes - Bay 2".to_string(),
            audience: BroadcastAudience::AllStaff,
            sent_at: now - Duration::hours(2),
        },
        BroadcastNote {
            message: "Team meeting at 3 PM - Break room".to_string(),
            audience: BroadcastAudience::AllStaff,
            sent_at: now - Duration::hours(4),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_is_oldest_first() {
        let now = Utc::now();
        let messages = initial_messages(now);
        assert_eq!(messages.len(), 5);
        for pair in messages.windows(2) {
            assert!(pair[0].sent_at < pair[1].sent_at);
        }
    }

    #[test]
    fn only_last_message_has_attachment() {
        let messages = initial_messages(Utc::now());
        let with_attachment: Vec<_> =
            messages.iter().filter(|m| m.attachment.is_some()).collect();
        assert_eq!(with_attachment.len(), 1);
        assert_eq!(with_attachment[0].sender, "Mike Johnson");
    }

    #[test]
    fn default_channel_is_first() {
        let channels = channels();
        assert_eq!(channels[0].key, "team");
        assert_eq!(channels[0].online, 8);
    }
}
