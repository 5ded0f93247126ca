//! Intent router.
//!
//! Classifies one chat message into exactly one [`Response`]. Detectors run in
//! the fixed order given by [`DETECTION_ORDER`] and the first one that answers
//! wins; when none answers the fallback menu is returned.

use skillup_core::config::SkillUpConfig;
use skillup_core::Catalog;
use tracing::debug;

use crate::error::ChatError;
use crate::goal::GoalEngine;
use crate::matcher::TermSet;
use crate::search::CourseSearch;
use crate::types::{Action, Response, ResponseKind, ViewTarget};

/// Anything that turns a chat message into a response.
pub trait Classifier {
    fn classify(&self, query: &str, is_authenticated: bool) -> Response;
}

/// One step of the detection cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Career goal recommendation.
    Goal,
    /// Course search, entered when the message names a course synonym.
    CourseSearch,
    /// Single-topic navigation and information answers.
    Topic,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Goal => "goal",
            Stage::CourseSearch => "course_search",
            Stage::Topic => "topic",
        }
    }
}

/// Detector precedence. Goal phrasing often also contains course words, and
/// career guidance must win over a plain search.
pub const DETECTION_ORDER: [Stage; 3] = [Stage::Goal, Stage::CourseSearch, Stage::Topic];

/// Tokens that route a message to course search.
pub const COURSE_SYNONYMS: &[&str] = &["kurs", "eğitim", "ders", "course", "class", "lesson"];

// =============================================================================
// Topic table
// =============================================================================

struct TopicSpec {
    name: &'static str,
    triggers: &'static [&'static str],
    respond: fn(bool) -> Response,
}

/// Evaluated top to bottom; the first trigger hit wins.
const TOPICS: &[TopicSpec] = &[
    TopicSpec {
        name: "login",
        triggers: &["giriş", "login", "oturum"],
        respond: login,
    },
    TopicSpec {
        name: "signup",
        triggers: &["kayıt", "signup", "üye ol"],
        respond: signup,
    },
    TopicSpec {
        name: "profile",
        triggers: &["profil", "hesap"],
        respond: profile,
    },
    TopicSpec {
        name: "pricing",
        triggers: &["abonelik", "fiyat", "ücret", "plan", "premium"],
        respond: pricing,
    },
    TopicSpec {
        name: "certificate",
        triggers: &["sertifika"],
        respond: certificate,
    },
    TopicSpec {
        name: "contact",
        triggers: &["iletişim", "destek", "yardım", "mail", "e-posta"],
        respond: contact,
    },
    TopicSpec {
        name: "faq",
        triggers: &["sss", "sıkça", "sorular"],
        respond: faq,
    },
    TopicSpec {
        name: "about",
        triggers: &["hakkında", "hakkımızda", "vizyonunuz"],
        respond: about,
    },
    TopicSpec {
        name: "features",
        triggers: &["özellik", "ne sunuyorsunuz"],
        respond: features,
    },
    TopicSpec {
        name: "home",
        triggers: &["anasayfa", "ana sayfa", "başa dön"],
        respond: home,
    },
    TopicSpec {
        name: "careers",
        triggers: &["kariyer", "iş", "çalış"],
        respond: careers,
    },
];

fn hint(text: &str, target: ViewTarget) -> Response {
    Response::new(ResponseKind::NavigationHint, text).with_action(Action::OpenView { target })
}

fn login(_: bool) -> Response {
    hint("Giriş yapmak için buraya tıklayın 🔐", ViewTarget::Login)
}

fn signup(_: bool) -> Response {
    hint("Kayıt olmak için buraya tıklayın ✨", ViewTarget::Signup)
}

fn profile(is_authenticated: bool) -> Response {
    if is_authenticated {
        hint("Profilinizi görmek için buraya tıklayın 👤", ViewTarget::Profile)
    } else {
        hint("Önce giriş yapmanız gerekiyor. Giriş Yap 🔐", ViewTarget::Login)
    }
}

fn pricing(_: bool) -> Response {
    hint(
        "💰 Üyelik planlarımızı görmek için Fiyatlandırma bölümüne bakabilirsiniz.",
        ViewTarget::Pricing,
    )
}

fn certificate(_: bool) -> Response {
    Response::new(
        ResponseKind::InformationalAnswer,
        "🎓 Kursları tamamlayanlara blockchain doğrulamalı sertifika veriyoruz. LinkedIn'de paylaşabilir, QR kod ile doğrulayabilirsiniz!",
    )
}

fn contact(_: bool) -> Response {
    hint(
        "📧 Bizimle iletişime geçmek için İletişim sayfasına göz atın.",
        ViewTarget::Contact,
    )
}

fn faq(_: bool) -> Response {
    hint(
        "❓ Sık sorulan sorular için SSS bölümünü inceleyin.",
        ViewTarget::Faq,
    )
}

fn about(_: bool) -> Response {
    hint(
        "ℹ️ SkillUp hakkında bilgi almak için Hakkımızda sayfasını ziyaret edin.",
        ViewTarget::About,
    )
}

fn features(_: bool) -> Response {
    hint(
        "✨ Platform özelliklerimizi görmek için sayfayı aşağı kaydırın veya Özellikler bölümüne göz atın.",
        ViewTarget::Features,
    )
}

fn home(_: bool) -> Response {
    hint("🏠 Anasayfaya dönmek için buraya tıklayın.", ViewTarget::Home)
}

fn careers(_: bool) -> Response {
    hint(
        "💼 Kariyer fırsatları için Kariyer sayfamızı ziyaret edin.",
        ViewTarget::Careers,
    )
}

fn fallback() -> Response {
    Response::new(
        ResponseKind::Fallback,
        [
            "🤔 Size şu konularda yardımcı olabilirim:",
            "• Kurs arama (örn: \"Web geliştirme kursu\")",
            "• Kariyer hedefi (örn: \"Frontend developer olmak istiyorum\")",
            "• Giriş/Kayıt",
            "• Abonelik ve fiyatlar",
            "• Sertifika bilgisi",
            "• İletişim ve destek",
            "",
            "Bir soru sorun veya yardım isteyin! 😊",
        ]
        .join("\n"),
    )
}

struct Topic {
    name: &'static str,
    triggers: TermSet,
    respond: fn(bool) -> Response,
}

// =============================================================================
// IntentRouter
// =============================================================================

/// Rule-based intent router over an immutable catalog.
pub struct IntentRouter {
    goals: GoalEngine,
    synonyms: TermSet,
    search: CourseSearch,
    topics: Vec<Topic>,
}

impl IntentRouter {
    /// Build a router from a catalog and the assistant settings.
    ///
    /// The catalog is taken as given; run [`Catalog::checked`] first.
    pub fn new(catalog: &Catalog, config: &SkillUpConfig) -> Result<Self, ChatError> {
        let mode = config.assistant.match_mode;
        let topics = TOPICS
            .iter()
            .map(|spec| {
                Ok(Topic {
                    name: spec.name,
                    triggers: TermSet::new(spec.triggers, mode)?,
                    respond: spec.respond,
                })
            })
            .collect::<Result<Vec<_>, ChatError>>()?;

        Ok(Self {
            goals: GoalEngine::new(&catalog.goal_plans, mode)?,
            synonyms: TermSet::new(COURSE_SYNONYMS, mode)?,
            search: CourseSearch::new(catalog.courses.clone(), &config.search),
            topics,
        })
    }

    /// Router over the built-in catalog with default settings.
    pub fn with_defaults() -> Result<Self, ChatError> {
        Self::new(&Catalog::builtin(), &SkillUpConfig::default())
    }

    /// Stage names in evaluation order.
    pub fn detector_names(&self) -> Vec<&'static str> {
        DETECTION_ORDER.iter().map(|s| s.name()).collect()
    }

    /// Goal recommendation on its own. `query` is normalized first.
    pub fn recommend_goal(&self, query: &str) -> Option<Response> {
        self.goals.recommend(&normalize(query))
    }

    /// Course search on its own.
    pub fn search_courses(&self, query: &str) -> Response {
        self.search.search(query)
    }

    pub fn course_search(&self) -> &CourseSearch {
        &self.search
    }

    /// Name of the topic a normalized query would hit, if any.
    pub fn topic_for(&self, query: &str) -> Option<&'static str> {
        self.topics
            .iter()
            .find(|t| t.triggers.matches(query))
            .map(|t| t.name)
    }

    fn run_stage(&self, stage: Stage, query: &str, is_authenticated: bool) -> Option<Response> {
        match stage {
            Stage::Goal => self.goals.recommend(query),
            Stage::CourseSearch => {
                if self.synonyms.matches(query) {
                    Some(self.search.search(query))
                } else {
                    None
                }
            }
            Stage::Topic => self
                .topics
                .iter()
                .find(|t| t.triggers.matches(query))
                .map(|t| (t.respond)(is_authenticated)),
        }
    }
}

impl Classifier for IntentRouter {
    fn classify(&self, query: &str, is_authenticated: bool) -> Response {
        let query = normalize(query);
        for stage in DETECTION_ORDER {
            if let Some(response) = self.run_stage(stage, &query, is_authenticated) {
                debug!(stage = stage.name(), kind = ?response.kind, "Intent matched");
                return response;
            }
        }
        debug!("No detector matched, answering with fallback menu");
        fallback()
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
