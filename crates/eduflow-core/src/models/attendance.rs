use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Presence flags keyed by student id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attendance {
    marks: BTreeMap<String, bool>,
}

impl Attendance {
    /// Whether the student is marked present. Unmarked students are absent.
    pub fn is_present(&self, student_id: &str) -> bool {
        self.marks.get(student_id).copied().unwrap_or(false)
    }

    /// Flip the presence flag for `student_id` and return the new value.
    pub fn mark(&mut self, student_id: &str) -> bool {
        let flag = self.marks.entry(student_id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// How many of `student_ids` are marked present. Marks for ids outside
    /// the list are not counted.
    pub fn present_count<'a>(&self, student_ids: impl IntoIterator<Item = &'a str>) -> usize {
        student_ids
            .into_iter()
            .filter(|id| self.is_present(id))
            .count()
    }
}
