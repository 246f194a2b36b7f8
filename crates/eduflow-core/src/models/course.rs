use serde::{Deserialize, Serialize};

/// A catalog course. Static and read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub lesson_count: u32,
}

impl Course {
    pub fn display_lessons(&self) -> String {
        match self.lesson_count {
            1 => "1 lesson".to_string(),
            n => format!("{} lessons", n),
        }
    }
}
