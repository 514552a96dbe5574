//! Counter record type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single named counter.
///
/// `my_id` is the caller-supplied logical identifier and the store's key;
/// exactly one live record exists per `my_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Caller-supplied logical identifier
    pub my_id: String,
    /// Current count
    pub value: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Counter {
    /// Create a fresh counter starting at zero
    pub fn new(my_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            my_id: my_id.into(),
            value: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
