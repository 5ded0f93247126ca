//! Course catalog and career goal plans.
//!
//! The catalog is loaded once at startup, checked for consistency, and never
//! mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SkillUpError};
use crate::types::{CareerGoalPlan, Course};

/// Immutable set of courses and goal plans.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub goal_plans: Vec<CareerGoalPlan>,
}

/// A consistency problem found by [`Catalog::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogIssue {
    /// A goal plan references a course name missing from the catalog.
    UnknownCourse { plan: String, course: String },
    /// Two courses share a display name.
    DuplicateCourse { name: String },
    /// A goal plan has no trigger keywords and can never match.
    EmptyKeywords { plan: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::UnknownCourse { plan, course } => {
                write!(f, "goal plan '{}' references unknown course '{}'", plan, course)
            }
            CatalogIssue::DuplicateCourse { name } => {
                write!(f, "course '{}' is declared more than once", name)
            }
            CatalogIssue::EmptyKeywords { plan } => {
                write!(f, "goal plan '{}' has no keywords", plan)
            }
        }
    }
}

impl Catalog {
    pub fn new(courses: Vec<Course>, goal_plans: Vec<CareerGoalPlan>) -> Self {
        Self {
            courses,
            goal_plans,
        }
    }

    /// The SkillUp landing page catalog.
    pub fn builtin() -> Self {
        let courses = vec![
            Course::new(
                "Web Geliştirme Masterclass",
                "💻",
                "HTML, CSS, JavaScript ve modern framework'lerle profesyonel web siteleri geliştirin.",
            ),
            Course::new(
                "UI/UX Tasarım Temelleri",
                "🎨",
                "Kullanıcı deneyimi odaklı modern arayüzler tasarlamayı öğrenin.",
            ),
            Course::new(
                "Veri Bilimi & Analitik",
                "📊",
                "Python ile veri analizi, görselleştirme ve makine öğrenimi tekniklerini keşfedin.",
            ),
            Course::new(
                "Mobil Uygulama Geliştirme",
                "📱",
                "React Native ile iOS ve Android için cross-platform uygulamalar oluşturun.",
            ),
            Course::new(
                "Yapay Zeka ve Deep Learning",
                "🤖",
                "TensorFlow ve PyTorch ile yapay zeka modelleri geliştirmeyi öğrenin.",
            ),
            Course::new(
                "Siber Güvenlik Temelleri",
                "🔒",
                "Ağ güvenliği, ethical hacking ve güvenlik testleri konularında uzmanlaşın.",
            ),
        ];

        // Declaration order is match priority.
        let goal_plans = vec![
            CareerGoalPlan::new(
                &["frontend", "front-end", "front end", "ön yüz"],
                "Frontend Developer",
                &[
                    "Web Geliştirme Masterclass",
                    "UI/UX Tasarım Temelleri",
                    "Mobil Uygulama Geliştirme",
                ],
            ),
            CareerGoalPlan::new(
                &["fullstack", "full stack", "full-stack", "tam yığın"],
                "Full-Stack Developer",
                &[
                    "Web Geliştirme Masterclass",
                    "Veri Bilimi & Analitik",
                    "Siber Güvenlik Temelleri",
                ],
            ),
            CareerGoalPlan::new(
                &["veri bilimi", "data science", "veri analisti", "data analyst"],
                "Veri Bilimci",
                &["Veri Bilimi & Analitik", "Yapay Zeka ve Deep Learning"],
            ),
            CareerGoalPlan::new(
                &["ai", "yapay zeka", "machine learning", "ml", "deep learning"],
                "AI/ML Geliştirici",
                &["Yapay Zeka ve Deep Learning", "Veri Bilimi & Analitik"],
            ),
            CareerGoalPlan::new(
                &["mobil", "mobile", "react native", "android", "ios"],
                "Mobil Geliştirici",
                &[
                    "Mobil Uygulama Geliştirme",
                    "Web Geliştirme Masterclass",
                    "UI/UX Tasarım Temelleri",
                ],
            ),
            CareerGoalPlan::new(
                &["siber", "güvenlik", "cyber", "security", "hacker"],
                "Siber Güvenlik Uzmanı",
                &["Siber Güvenlik Temelleri", "Web Geliştirme Masterclass"],
            ),
            CareerGoalPlan::new(
                &["ui", "ux", "tasarım", "designer", "tasarımcı"],
                "UI/UX Tasarımcı",
                &["UI/UX Tasarım Temelleri", "Web Geliştirme Masterclass"],
            ),
        ];

        Self::new(courses, goal_plans)
    }

    /// Parse a catalog from TOML (`[[courses]]` and `[[goal_plans]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SkillUpError::Catalog(e.to_string()))
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            courses = catalog.courses.len(),
            goal_plans = catalog.goal_plans.len(),
            "Catalog loaded from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Look up a course by its exact display name.
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    /// Collect every consistency problem in declaration order.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for course in &self.courses {
            if !seen.insert(course.name.as_str()) {
                issues.push(CatalogIssue::DuplicateCourse {
                    name: course.name.clone(),
                });
            }
        }

        for plan in &self.goal_plans {
            if plan.keywords.iter().all(|k| k.trim().is_empty()) {
                issues.push(CatalogIssue::EmptyKeywords {
                    plan: plan.title.clone(),
                });
            }
            for name in &plan.courses {
                if !seen.contains(name.as_str()) {
                    issues.push(CatalogIssue::UnknownCourse {
                        plan: plan.title.clone(),
                        course: name.clone(),
                    });
                }
            }
        }

        issues
    }

    /// Validate and hand the catalog back.
    ///
    /// In strict mode the first issue becomes an error. Otherwise every issue
    /// is logged and the catalog is returned unchanged.
    pub fn checked(self, strict: bool) -> Result<Self> {
        let issues = self.validate();
        if let Some(first) = issues.first() {
            if strict {
                return Err(SkillUpError::Catalog(first.to_string()));
            }
            for issue in &issues {
                warn!(%issue, "Catalog inconsistency");
            }
        }
        Ok(self)
    }
}
