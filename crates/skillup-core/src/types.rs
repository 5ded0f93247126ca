use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog records
// =============================================================================

/// A course offered on the platform.
///
/// `name` is the display key; it is unique within a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    /// Short symbol shown next to the name.
    pub icon: String,
    #[serde(alias = "desc")]
    pub description: String,
}

impl Course {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
        }
    }

    /// First whitespace-separated token of the name, lowercased.
    pub fn name_head(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// A career path: trigger keywords mapped to an ordered list of courses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerGoalPlan {
    /// Lowercase match triggers.
    pub keywords: Vec<String>,
    /// Display name of the career path.
    pub title: String,
    /// Course names in recommended order.
    pub courses: Vec<String>,
}

impl CareerGoalPlan {
    pub fn new(keywords: &[&str], title: impl Into<String>, courses: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            title: title.into(),
            courses: courses.iter().map(|c| c.to_string()).collect(),
        }
    }
}
