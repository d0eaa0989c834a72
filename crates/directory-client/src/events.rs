use directory_shared::{Profile, ProfileId};
use serde::Serialize;
use tokio::sync::broadcast;

pub const EVENT_PROFILE_CREATED: &str = "profile-created";
pub const EVENT_PROFILE_UPDATED: &str = "profile-updated";
pub const EVENT_PROFILE_DELETED: &str = "profile-deleted";
pub const EVENT_LOADING_CHANGED: &str = "loading-changed";

/// Buffered events per subscriber before slow receivers start lagging.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum DirectoryEvent {
    ProfileCreated(Profile),
    ProfileUpdated(Profile),
    ProfileDeleted { id: ProfileId },
    LoadingChanged { loading: bool },
}

impl DirectoryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ProfileCreated(_) => EVENT_PROFILE_CREATED,
            Self::ProfileUpdated(_) => EVENT_PROFILE_UPDATED,
            Self::ProfileDeleted { .. } => EVENT_PROFILE_DELETED,
            Self::LoadingChanged { .. } => EVENT_LOADING_CHANGED,
        }
    }
}

pub fn emit_event(tx: &broadcast::Sender<DirectoryEvent>, event: DirectoryEvent) {
    let name = event.name();
    // Sending only fails when nobody is listening.
    if tx.send(event).is_err() {
        tracing::trace!(event = name, "No subscribers for event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_format() {
        let json = serde_json::to_value(DirectoryEvent::ProfileDeleted { id: ProfileId(4) }).unwrap();
        assert_eq!(json["event"], EVENT_PROFILE_DELETED);
        assert_eq!(json["payload"]["id"], 4);

        let json = serde_json::to_value(DirectoryEvent::LoadingChanged { loading: true }).unwrap();
        assert_eq!(json["event"], EVENT_LOADING_CHANGED);
        assert_eq!(json["payload"]["loading"], true);
    }

    #[test]
    fn test_emit_without_subscribers_is_silent() {
        let (tx, rx) = broadcast::channel(4);
        drop(rx);
        emit_event(&tx, DirectoryEvent::LoadingChanged { loading: false });
    }

    #[test]
    fn test_emit_reaches_subscriber() {
        let (tx, mut rx) = broadcast::channel(4);
        emit_event(&tx, DirectoryEvent::LoadingChanged { loading: true });
        assert_eq!(
            rx.try_recv().unwrap(),
            DirectoryEvent::LoadingChanged { loading: true }
        );
    }
}
