#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Event publishing abstractions for pipeline runs.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::broadcast};
use uuid::Uuid;

/// Event record emitted by pipeline stages, encoded as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineEvent {
    /// Unique identifier.
    pub id: Uuid,
    /// Component producing the event (e.g. `snl-cli`).
    pub source: String,
    /// Event kind (e.g. `submission.processed`).
    pub kind: String,
    /// ISO timestamp.
    pub timestamp: String,
    /// Arbitrary JSON payload.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl PipelineEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(source: impl Into<String>, kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            kind: kind.into(),
            timestamp: Utc::now().to_rfc3339(),
            payload,
        }
    }
}

/// Event publisher interface.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes an event to the sink.
    async fn publish(&self, event: PipelineEvent) -> Result<()>;
}

/// In-memory broadcast bus retaining a bounded backlog (for tests and demos).
#[derive(Debug, Clone)]
pub struct MemoryEventBus {
    sender: broadcast::Sender<PipelineEvent>,
    backlog: Arc<Mutex<VecDeque<PipelineEvent>>>,
    capacity: usize,
}

impl MemoryEventBus {
    /// Creates a new bus with the given backlog capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            backlog: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Subscribes to live events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PipelineEvent> {
        self.sender.subscribe()
    }

    /// Snapshot of recent events retained in memory.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PipelineEvent> {
        self.backlog.lock().iter().cloned().collect()
    }
}

#[async_trait]
impl EventPublisher for MemoryEventBus {
    async fn publish(&self, event: PipelineEvent) -> Result<()> {
        {
            let mut backlog = self.backlog.lock();
            backlog.push_back(event.clone());
            while backlog.len() > self.capacity {
                backlog.pop_front();
            }
        }
        let _ = self.sender.send(event);
        Ok(())
    }
}

/// File-backed publisher appending JSON lines, for durable run histories.
#[derive(Debug, Clone)]
pub struct FileEventPublisher {
    path: PathBuf,
}

impl FileEventPublisher {
    /// Creates a publisher that appends to the given path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }
}

#[async_trait]
impl EventPublisher for FileEventPublisher {
    async fn publish(&self, event: PipelineEvent) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        let data = serde_json::to_vec(&event)?;
        file.write_all(&data).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio::runtime::Runtime;

    fn sample_event() -> PipelineEvent {
        PipelineEvent::new(
            "tester",
            "submission.processed",
            serde_json::json!({"accuracy": 0.8}),
        )
    }

    #[test]
    fn broadcasts_and_retains_backlog() {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let bus = MemoryEventBus::new(8);
            let mut rx = bus.subscribe();
            bus.publish(sample_event()).await.unwrap();
            let event = rx.recv().await.unwrap();
            assert_eq!(event.kind, "submission.processed");
            assert_eq!(bus.snapshot().len(), 1);
        });
    }

    #[test]
    fn backlog_is_bounded() {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let bus = MemoryEventBus::new(2);
            for _ in 0..5 {
                bus.publish(sample_event()).await.unwrap();
            }
            assert_eq!(bus.snapshot().len(), 2);
        });
    }

    #[test]
    fn file_publisher_appends_events() {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let dir = tempdir().unwrap();
            let path = dir.path().join("events.jsonl");
            let publisher = FileEventPublisher::new(&path).unwrap();
            publisher.publish(sample_event()).await.unwrap();
            publisher.publish(sample_event()).await.unwrap();
            let content = std::fs::read_to_string(path).unwrap();
            assert_eq!(content.lines().count(), 2);
        });
    }
}
