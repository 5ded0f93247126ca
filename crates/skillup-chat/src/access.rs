//! Course detail access decision.

use serde::{Deserialize, Serialize};
use skillup_core::Catalog;
use tracing::warn;

use crate::types::{Action, ViewTarget};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Granted,
    LoginRequired,
}

/// What the course detail view should show for one visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAccess {
    pub course: String,
    /// Catalog icon, `None` for names missing from the catalog.
    pub course_icon: Option<String>,
    pub access: Access,
    /// Status badge shown on the detail view.
    pub badge: String,
    pub message: String,
    pub button: String,
    /// Bound to the detail view's button.
    pub action: Action,
}

pub fn course_access(catalog: &Catalog, name: &str, is_authenticated: bool) -> CourseAccess {
    let course_icon = catalog.course(name).map(|c| c.icon.clone());
    if course_icon.is_none() {
        warn!(course = name, "Course detail requested for a name missing from the catalog");
    }

    if is_authenticated {
        CourseAccess {
            course: name.to_string(),
            course_icon,
            access: Access::Granted,
            badge: "✅".to_string(),
            message: "Tebrikler! Giriş yaptığınız için bu kursa hemen başlayabilirsiniz. İlk derse gitmek için butona tıklayın.".to_string(),
            button: "Derse Başla ▶".to_string(),
            action: Action::StartCourse {
                name: name.to_string(),
            },
        }
    } else {
        CourseAccess {
            course: name.to_string(),
            course_icon,
            access: Access::LoginRequired,
            badge: "🔒".to_string(),
            message: "Bu kursun içeriğine erişmek ve sertifika programına katılmak için lütfen önce giriş yapın.".to_string(),
            button: "Giriş Yap ve Abone Ol".to_string(),
            action: Action::OpenView {
                target: ViewTarget::Login,
            },
        }
    }
}
