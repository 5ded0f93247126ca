//! Conversational assistant for SkillUp.
//!
//! Rule-based intent routing over the course catalog: career goal
//! recommendations, course search, navigation hints and a fallback menu.

pub mod access;
pub mod error;
pub mod goal;
pub mod matcher;
pub mod orchestrator;
pub mod router;
pub mod search;
pub mod types;

pub use access::{course_access, Access, CourseAccess};
pub use error::ChatError;
pub use goal::GoalEngine;
pub use matcher::TermSet;
pub use orchestrator::ChatOrchestrator;
pub use router::{Classifier, IntentRouter, Stage, DETECTION_ORDER};
pub use search::{snippet, CourseHit, CourseSearch};
pub use types::{Action, ChatMessage, Response, ResponseKind, Role, ViewTarget};
