use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Response
// =============================================================================

/// Category of an assistant answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Clarification,
    Recommendation,
    CourseMatches,
    NavigationHint,
    InformationalAnswer,
    Fallback,
}

/// A named page section or dialog the renderer knows how to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewTarget {
    Login,
    Signup,
    Profile,
    Pricing,
    Contact,
    Faq,
    About,
    Features,
    Home,
    Careers,
}

/// Follow-up operation attached to a response, bound to UI by the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Show the detail view of a course.
    OpenCourse { name: String },
    /// Begin the first lesson of a course.
    StartCourse { name: String },
    /// Open a page section or dialog.
    OpenView { target: ViewTarget },
}

/// Structured assistant answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub kind: ResponseKind,
    /// Display text. Action labels are not embedded here.
    pub text: String,
    /// Career path title for recommendations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl Response {
    pub fn new(kind: ResponseKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            title: None,
            actions: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Names of all courses this response links to, in order.
    pub fn course_names(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::OpenCourse { name } | Action::StartCourse { name } => Some(name.as_str()),
                Action::OpenView { .. } => None,
            })
            .collect()
    }

    /// First view this response links to, if any.
    pub fn view_target(&self) -> Option<ViewTarget> {
        self.actions.iter().find_map(|a| match a {
            Action::OpenView { target } => Some(*target),
            _ => None,
        })
    }
}

// =============================================================================
// Chat history
// =============================================================================

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the in-memory chat history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    /// Response kind for assistant messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResponseKind>,
    /// Epoch seconds.
    pub created_at: i64,
}
