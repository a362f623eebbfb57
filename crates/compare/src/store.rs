// In-memory comparison cache with time-based expiry.
//
// The store is explicitly constructed and handed to request handlers, never
// a global. Entries are immutable after put; concurrent readers share them
// via Arc without holding the store lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use sheetdelta_engine::Workbook;
use uuid::Uuid;

/// How long a comparison stays reachable.
const TTL_MINUTES: i64 = 30;

/// Both workbooks of one comparison plus its lifetime bounds.
/// Owned exclusively by the store; callers get shared read-only handles.
#[derive(Debug)]
pub struct CachedComparison {
    pub id: String,
    pub workbook1: Workbook,
    pub workbook2: Workbook,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ComparisonStore {
    entries: Mutex<HashMap<String, Arc<CachedComparison>>>,
    ttl: Duration,
}

impl Default for ComparisonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::minutes(TTL_MINUTES))
    }

    /// Store with a custom TTL. Production uses `new`; tests shrink the TTL
    /// to exercise expiry without waiting.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Insert a comparison, returning its fresh id. Expired entries are
    /// swept out as a side effect of every put.
    pub fn put(&self, workbook1: Workbook, workbook2: Workbook) -> String {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let entry = Arc::new(CachedComparison {
            id: id.clone(),
            workbook1,
            workbook2,
            created_at: now,
            expires_at: now + self.ttl,
        });

        let mut entries = self.entries.lock().unwrap();
        entries.retain(|_, e| now <= e.expires_at);
        entries.insert(id.clone(), entry);
        id
    }

    /// Fetch a live entry. Expiry is lazy: an expired entry is deleted here
    /// and reported as absent, never handed out.
    pub fn get(&self, id: &str) -> Option<Arc<CachedComparison>> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(id) {
            Some(entry) if Utc::now() <= entry.expires_at => Some(Arc::clone(entry)),
            Some(_) => {
                entries.remove(id);
                None
            }
            None => None,
        }
    }

    /// Explicit removal (resource hygiene; not reachable from the public
    /// API surface today).
    pub fn invalidate(&self, id: &str) {
        self.entries.lock().unwrap().remove(id);
    }

    pub fn invalidate_all(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Count of non-expired entries.
    pub fn len(&self) -> usize {
        let now = Utc::now();
        self.entries
            .lock()
            .unwrap()
            .values()
            .filter(|e| now <= e.expires_at)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
