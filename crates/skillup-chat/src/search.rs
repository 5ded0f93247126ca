//! Free-text course search.
//!
//! Two entry points share the same catalog: [`CourseSearch::search`] answers
//! chat questions with a short list, [`CourseSearch::filter`] backs the header
//! search box and returns every hit.

use serde::{Deserialize, Serialize};
use skillup_core::config::SearchConfig;
use skillup_core::types::Course;

use crate::types::{Action, Response, ResponseKind};

const EXAMPLE_TOPICS: &[&str] = &[
    "Web Geliştirme",
    "UI/UX",
    "Veri Bilimi",
    "AI",
    "Mobil",
    "Siber Güvenlik",
];

/// A course rendered for a result list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseHit {
    pub name: String,
    pub icon: String,
    pub snippet: String,
}

/// Cut a description to `max_chars` characters and append `...`.
///
/// The ellipsis is appended even when nothing was cut.
pub fn snippet(description: &str, max_chars: usize) -> String {
    let head: String = description.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Substring search over the course catalog, in catalog order.
pub struct CourseSearch {
    courses: Vec<Course>,
    max_matches: usize,
    snippet_chars: usize,
}

impl CourseSearch {
    pub fn new(courses: Vec<Course>, config: &SearchConfig) -> Self {
        Self {
            courses,
            max_matches: config.max_matches,
            snippet_chars: config.snippet_chars,
        }
    }

    /// Courses related to a chat query, in catalog order.
    ///
    /// Containment is tested in both directions so that abbreviated queries
    /// ("web kursu") and queries quoting a full name both hit.
    pub fn matches(&self, query: &str) -> Vec<&Course> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let query_head = query.split_whitespace().next().unwrap_or_default();

        self.courses
            .iter()
            .filter(|course| {
                let name = course.name.to_lowercase();
                let description = course.description.to_lowercase();
                let name_head = course.name_head();

                name.contains(&query)
                    || description.contains(&query)
                    || query.contains(&name)
                    || name.contains(query_head)
                    || (!name_head.is_empty() && query.contains(&name_head))
            })
            .collect()
    }

    /// Answer a chat query with up to `max_matches` courses.
    pub fn search(&self, query: &str) -> Response {
        let shown: Vec<&Course> = self
            .matches(query)
            .into_iter()
            .take(self.max_matches)
            .collect();
        if shown.is_empty() {
            return not_found();
        }

        let mut lines = vec!["Şu kursları buldum:".to_string()];
        lines.extend(shown.iter().map(|c| {
            format!(
                "{} {}: {}",
                c.icon,
                c.name,
                snippet(&c.description, self.snippet_chars)
            )
        }));

        Response::new(ResponseKind::CourseMatches, lines.join("\n")).with_actions(
            shown.iter().map(|c| Action::OpenCourse {
                name: c.name.clone(),
            }),
        )
    }

    /// Header search box: every course whose name or description contains
    /// the term.
    pub fn filter(&self, term: &str) -> Vec<CourseHit> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.courses
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term) || c.description.to_lowercase().contains(&term)
            })
            .map(|c| self.hit(c))
            .collect()
    }

    fn hit(&self, course: &Course) -> CourseHit {
        CourseHit {
            name: course.name.clone(),
            icon: course.icon.clone(),
            snippet: snippet(&course.description, self.snippet_chars),
        }
    }
}

fn not_found() -> Response {
    let examples = EXAMPLE_TOPICS
        .iter()
        .map(|t| format!("\"{}\"", t))
        .collect::<Vec<_>>()
        .join(", ");
    Response::new(
        ResponseKind::InformationalAnswer,
        format!("Hangi alanda kurs arıyorsunuz? 💡\nÖrnekler: {}", examples),
    )
}
