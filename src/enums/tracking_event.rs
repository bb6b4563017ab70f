use serde::{Deserialize, Serialize};
use crate::structs::change_record::ChangeRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackingEvent {
    ChangeCreated { record: ChangeRecord },
    ChangeAccepted { record: ChangeRecord },
    ChangeRejected { record: ChangeRecord },
    ChangeActivated { change_id: String, record: ChangeRecord },
}

impl TrackingEvent {
    pub fn change_id(&self) -> &str {
        match self {
            TrackingEvent::ChangeCreated { record }
            | TrackingEvent::ChangeAccepted { record }
            | TrackingEvent::ChangeRejected { record } => &record.id,
            TrackingEvent::ChangeActivated { change_id, .. } => change_id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrackingEvent::ChangeCreated { .. } => "change_created",
            TrackingEvent::ChangeAccepted { .. } => "change_accepted",
            TrackingEvent::ChangeRejected { .. } => "change_rejected",
            TrackingEvent::ChangeActivated { .. } => "change_activated",
        }
    }
}
