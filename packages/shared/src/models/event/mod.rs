pub mod errors;
pub mod requests;
pub mod responses;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A client-reported gameplay event type.
///
/// Each action maps to exactly one collection in the store and a fixed set of
/// record fields projected out of the request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Play,
    Collect,
    Swap,
    WatchAd,
    JoinChannel,
    JoinCommunityTask,
    OpenTasks,
    OpenAddTask,
    OpenSwap,
    Back,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::Play,
        Action::Collect,
        Action::Swap,
        Action::WatchAd,
        Action::JoinChannel,
        Action::JoinCommunityTask,
        Action::OpenTasks,
        Action::OpenAddTask,
        Action::OpenSwap,
        Action::Back,
    ];

    /// Looks up an action by the name the client sends, e.g. "watchAd".
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Play => "play",
            Action::Collect => "collect",
            Action::Swap => "swap",
            Action::WatchAd => "watchAd",
            Action::JoinChannel => "joinChannel",
            Action::JoinCommunityTask => "joinCommunityTask",
            Action::OpenTasks => "openTasks",
            Action::OpenAddTask => "openAddTask",
            Action::OpenSwap => "openSwap",
            Action::Back => "back",
        }
    }

    /// The store collection (table) that receives records for this action.
    pub fn collection(&self) -> &'static str {
        match self {
            Action::Play => "plays",
            Action::Collect => "collects",
            Action::Swap => "swaps",
            Action::WatchAd => "ads",
            Action::JoinChannel => "joins",
            Action::JoinCommunityTask => "community_tasks_joins",
            Action::OpenTasks | Action::OpenAddTask | Action::OpenSwap | Action::Back => {
                "actions_log"
            }
        }
    }

    /// Pairs of (payload key, record field) copied from the request.
    fn payload_fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Action::Collect => &[("emoji", "emoji"), ("totalScore", "total_score")],
            Action::Swap => &[("amount", "amount_score")],
            Action::WatchAd => &[("ticketLeft", "ticket_left"), ("adsLeft", "ads_left")],
            Action::JoinChannel => &[("ticketLeft", "ticket_left")],
            Action::JoinCommunityTask => &[("taskName", "task_name")],
            _ => &[],
        }
    }

    /// Builds the action-specific record fields from the request payload.
    ///
    /// Payload keys that are absent are left out of the record entirely;
    /// present keys are copied verbatim, `null` included.
    pub fn project(&self, payload: &Map<String, Value>) -> Map<String, Value> {
        let mut fields = Map::new();
        for (source, target) in self.payload_fields() {
            if let Some(value) = payload.get(*source) {
                fields.insert(target.to_string(), value.clone());
            }
        }

        match self {
            Action::JoinChannel => {
                fields.insert("type".to_string(), Value::from("channel"));
            }
            Action::OpenTasks | Action::OpenAddTask | Action::OpenSwap | Action::Back => {
                fields.insert("action".to_string(), Value::from(self.name()));
            }
            _ => {}
        }

        fields
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The row written to the store for a single event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundRecord {
    pub user_id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub ts: DateTime<Utc>,
}

impl OutboundRecord {
    pub fn new(
        action: Action,
        user_id: &str,
        payload: &Map<String, Value>,
        ts: DateTime<Utc>,
    ) -> Self {
        OutboundRecord {
            user_id: user_id.to_string(),
            fields: action.project(payload),
            ts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use test_case::test_case;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    #[test_case("play", "plays")]
    #[test_case("collect", "collects")]
    #[test_case("swap", "swaps")]
    #[test_case("watchAd", "ads")]
    #[test_case("joinChannel", "joins")]
    #[test_case("joinCommunityTask", "community_tasks_joins")]
    #[test_case("openTasks", "actions_log")]
    #[test_case("openAddTask", "actions_log")]
    #[test_case("openSwap", "actions_log")]
    #[test_case("back", "actions_log")]
    fn test_action_collection(name: &str, collection: &str) {
        let action = Action::from_name(name).unwrap();
        assert_eq!(action.collection(), collection);
        assert_eq!(action.name(), name);
    }

    #[test]
    fn test_unknown_action_name() {
        assert_eq!(Action::from_name("dance"), None);
        assert_eq!(Action::from_name(""), None);
        assert_eq!(Action::from_name("Play"), None);
    }

    #[test]
    fn test_play_projects_nothing() {
        let fields = Action::Play.project(&payload(json!({"emoji": "x", "amount": 3})));
        assert!(fields.is_empty());
    }

    #[test]
    fn test_collect_projection() {
        let fields =
            Action::Collect.project(&payload(json!({"emoji": "🍎", "totalScore": 42, "extra": 1})));
        assert_eq!(Value::Object(fields), json!({"emoji": "🍎", "total_score": 42}));
    }

    #[test]
    fn test_swap_projection_renames_amount() {
        let fields = Action::Swap.project(&payload(json!({"amount": 10})));
        assert_eq!(Value::Object(fields), json!({"amount_score": 10}));
    }

    #[test]
    fn test_watch_ad_projection() {
        let fields = Action::WatchAd.project(&payload(json!({"ticketLeft": 2, "adsLeft": 5})));
        assert_eq!(Value::Object(fields), json!({"ticket_left": 2, "ads_left": 5}));
    }

    #[test]
    fn test_join_channel_tags_type() {
        let fields = Action::JoinChannel.project(&payload(json!({"ticketLeft": 1})));
        assert_eq!(
            Value::Object(fields),
            json!({"ticket_left": 1, "type": "channel"})
        );
    }

    #[test]
    fn test_join_community_task_projection() {
        let fields =
            Action::JoinCommunityTask.project(&payload(json!({"taskName": "follow-twitter"})));
        assert_eq!(Value::Object(fields), json!({"task_name": "follow-twitter"}));
    }

    #[test_case(Action::OpenTasks)]
    #[test_case(Action::OpenAddTask)]
    #[test_case(Action::OpenSwap)]
    #[test_case(Action::Back)]
    fn test_navigation_actions_log_their_name(action: Action) {
        let fields = action.project(&Map::new());
        assert_eq!(Value::Object(fields), json!({"action": action.name()}));
    }

    #[test]
    fn test_absent_fields_are_omitted_and_null_is_kept() {
        let fields = Action::WatchAd.project(&payload(json!({"adsLeft": null})));
        assert_eq!(Value::Object(fields), json!({"ads_left": null}));
    }

    #[test]
    fn test_outbound_record_serialization() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let record = OutboundRecord::new(
            Action::Collect,
            "u1",
            &payload(json!({"action": "collect", "userId": "u1", "emoji": "🍎", "totalScore": 42})),
            ts,
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "user_id": "u1",
                "emoji": "🍎",
                "total_score": 42,
                "ts": "2024-05-01T12:30:00Z"
            })
        );
    }

    #[test]
    fn test_outbound_record_does_not_leak_envelope_fields() {
        let record = OutboundRecord::new(
            Action::Swap,
            "u1",
            &payload(json!({"action": "swap", "userId": "u1", "amount": 10})),
            Utc::now(),
        );

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["user_id"], json!("u1"));
        assert_eq!(object["amount_score"], json!(10));
        assert!(object["ts"].as_str().unwrap().parse::<DateTime<Utc>>().is_ok());
    }
}
