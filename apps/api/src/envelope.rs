use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Wraps a computed result with an id and timestamp so callers can persist it.
/// The result's own fields are serialised alongside `id` and `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    pub fn new(body: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            body,
        }
    }
}
