use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{MediaSource, Me, Producer, ProducerId, RoomInfo, ToolAreaInfo},
    error::StateError,
};

/// Read surface of the client store as seen by the sidebar and tool area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub me: Me,
    pub room: RoomInfo,
    pub toolarea: ToolAreaInfo,
    pub producers: BTreeMap<ProducerId, Producer>,
}

impl StoreSnapshot {
    pub fn from_json(raw: &str) -> Result<Self, StateError> {
        let snapshot: Self = serde_json::from_str(raw)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json_pretty(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Producers are keyed by their own id, and the session layer keeps at
    /// most one producer per source.
    pub fn validate(&self) -> Result<(), StateError> {
        let mut seen: BTreeMap<MediaSource, &ProducerId> = BTreeMap::new();
        for (key, producer) in &self.producers {
            if *key != producer.id {
                return Err(StateError::ProducerKeyMismatch {
                    key: key.to_string(),
                    id: producer.id.to_string(),
                });
            }
            if let Some(existing) = seen.insert(producer.source, &producer.id) {
                return Err(StateError::DuplicateProducer {
                    media: producer.source,
                    existing: existing.to_string(),
                    incoming: producer.id.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn producer_for(&self, source: MediaSource) -> Option<&Producer> {
        self.producers
            .values()
            .find(|producer| producer.source == source)
    }

    pub fn mic_producer(&self) -> Option<&Producer> {
        self.producer_for(MediaSource::Mic)
    }

    pub fn webcam_producer(&self) -> Option<&Producer> {
        self.producer_for(MediaSource::Webcam)
    }

    pub fn screen_producer(&self) -> Option<&Producer> {
        self.producer_for(MediaSource::Screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_yields_default_snapshot() {
        let snapshot = StoreSnapshot::from_json("{}").expect("snapshot");
        assert_eq!(snapshot, StoreSnapshot::default());
        assert!(snapshot.room.toolbars_visible);
        assert!(snapshot.mic_producer().is_none());
    }

    #[test]
    fn finds_producer_by_source() {
        let raw = r#"{
            "me": { "can_send_mic": true },
            "producers": {
                "p-1": { "id": "p-1", "source": "webcam" },
                "p-2": { "id": "p-2", "source": "mic", "locally_paused": true }
            }
        }"#;
        let snapshot = StoreSnapshot::from_json(raw).expect("snapshot");

        let mic = snapshot.mic_producer().expect("mic producer");
        assert_eq!(mic.id.as_str(), "p-2");
        assert!(mic.locally_paused);
        assert!(!mic.remotely_paused);
        assert_eq!(snapshot.webcam_producer().expect("webcam").id.as_str(), "p-1");
        assert!(snapshot.screen_producer().is_none());
    }

    #[test]
    fn rejects_two_producers_for_the_same_source() {
        let raw = r#"{
            "producers": {
                "a": { "id": "a", "source": "screen" },
                "b": { "id": "b", "source": "screen" }
            }
        }"#;
        let err = StoreSnapshot::from_json(raw).expect_err("duplicate should fail");
        assert!(matches!(
            err,
            StateError::DuplicateProducer {
                media: MediaSource::Screen,
                ..
            }
        ));
    }

    #[test]
    fn rejects_producer_keyed_under_another_id() {
        let raw = r#"{ "producers": { "a": { "id": "b", "source": "mic" } } }"#;
        let err = StoreSnapshot::from_json(raw).expect_err("mismatched key should fail");
        match err {
            StateError::ProducerKeyMismatch { key, id } => {
                assert_eq!(key, "a");
                assert_eq!(id, "b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unknown_media_source() {
        let raw = r#"{ "producers": { "a": { "id": "a", "source": "hologram" } } }"#;
        assert!(matches!(
            StoreSnapshot::from_json(raw),
            Err(StateError::MalformedSnapshot(_))
        ));
    }
}
