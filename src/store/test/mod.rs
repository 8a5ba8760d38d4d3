use chrono::{TimeZone, Utc};

use crate::store::{GiveawayRecord, GiveawayStore};


/// Builds a record with fixed, second-precision fields so round trips through
/// either backend compare equal.
fn sample_record(message_id: &str) -> GiveawayRecord {
    GiveawayRecord {
        message_id: message_id.to_string(),
        channel_id: "200".to_string(),
        prize: "Gift Card".to_string(),
        winners: 2,
        ends_at: Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap(),
        host_id: "300".to_string(),
    }
}
