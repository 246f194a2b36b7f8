//! Teacher-created assignments, kept newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Maximum length for assignment titles.
pub const MAX_TITLE_LENGTH: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub due: DateTime<Utc>,
}

impl Assignment {
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due < now
    }
}

/// Ordered assignment list. Index 0 is the most recently created entry.
///
/// Serializes transparently as a JSON array so it can be stored under the
/// `assignments` key as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentBook {
    items: Vec<Assignment>,
}

impl AssignmentBook {
    pub fn items(&self) -> &[Assignment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Assignment> {
        self.items.get(index)
    }

    /// Create an assignment and put it at the front of the list.
    pub fn create(
        &mut self,
        title: &str,
        due: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<&Assignment, DashboardError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DashboardError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(DashboardError::TitleTooLong {
                max: MAX_TITLE_LENGTH,
            });
        }

        let id = self.next_id(now);
        self.items.insert(
            0,
            Assignment {
                id,
                title: title.to_string(),
                due,
            },
        );
        Ok(&self.items[0])
    }

    /// Remove the assignment with `id`. Returns false when nothing matched.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.items.iter().position(|a| a.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Ids are derived from the creation instant; collisions get a suffix.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let base = format!("a{}", now.timestamp_millis());
        if !self.contains(&base) {
            return base;
        }
        (1..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or(base)
    }

    fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|a| a.id == id)
    }
}
