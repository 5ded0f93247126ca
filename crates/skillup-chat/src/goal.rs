//! Career goal recommendation.
//!
//! Maps career-goal phrasing to a learning path. Keyword tests are plain
//! containment by default, so a short keyword such as `ai` also fires inside
//! longer words (`mail`). Use [`MatchMode::WordBoundary`] to tighten this.

use skillup_core::config::MatchMode;
use skillup_core::types::CareerGoalPlan;

use crate::error::ChatError;
use crate::matcher::TermSet;
use crate::types::{Action, Response, ResponseKind};

/// Phrases that signal a career question even without a known path.
pub const GOAL_TRIGGERS: &[&str] = &[
    "hedef",
    "kariyer",
    "olmak istiyorum",
    "olmak",
    "plan",
    "yol haritası",
    "goal",
    "career",
    "want to become",
    "roadmap",
];

const GOAL_EXAMPLES: &[&str] = &[
    "Frontend developer olmak istiyorum",
    "Veri bilimci olmak istiyorum",
    "AI/ML alanında çalışmak istiyorum",
    "Mobil geliştirici olmak istiyorum",
    "UI/UX tasarımcı olmak istiyorum",
];

struct PlanMatcher {
    plan: CareerGoalPlan,
    keywords: TermSet,
}

/// Goal plans compiled for matching, in declared order.
pub struct GoalEngine {
    triggers: TermSet,
    plans: Vec<PlanMatcher>,
}

impl GoalEngine {
    pub fn new(plans: &[CareerGoalPlan], mode: MatchMode) -> Result<Self, ChatError> {
        let triggers = TermSet::new(GOAL_TRIGGERS, mode)?;
        let plans = plans
            .iter()
            .map(|plan| {
                Ok(PlanMatcher {
                    keywords: TermSet::new(&plan.keywords, mode)?,
                    plan: plan.clone(),
                })
            })
            .collect::<Result<Vec<_>, ChatError>>()?;
        Ok(Self { triggers, plans })
    }

    /// Whether the query asks for career guidance in general.
    pub fn is_goal_intent(&self, query: &str) -> bool {
        self.triggers.matches(query)
    }

    /// First plan, in declared order, with a keyword contained in the query.
    pub fn matching_plan(&self, query: &str) -> Option<&CareerGoalPlan> {
        self.plans
            .iter()
            .find(|p| p.keywords.matches(query))
            .map(|p| &p.plan)
    }

    /// Recommend a learning path, ask for a goal, or pass (`None`).
    ///
    /// `query` is expected trimmed and lowercased.
    pub fn recommend(&self, query: &str) -> Option<Response> {
        if let Some(plan) = self.matching_plan(query) {
            return Some(recommendation(plan));
        }
        if self.is_goal_intent(query) {
            return Some(clarification());
        }
        None
    }
}

fn recommendation(plan: &CareerGoalPlan) -> Response {
    let steps = plan
        .courses
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n");

    let text = format!(
        "🎯 {} hedefi için önerilen öğrenme yolu:\n\n{}\n\n💡 Bu kursları sırasıyla tamamlamanızı öneriyorum. Başarılar! 🚀",
        plan.title, steps
    );

    Response::new(ResponseKind::Recommendation, text)
        .with_title(plan.title.clone())
        .with_actions(
            plan.courses
                .iter()
                .map(|name| Action::OpenCourse { name: name.clone() }),
        )
}

fn clarification() -> Response {
    let mut lines = vec![
        "🎯 Hangi kariyer hedefine yönelik yardım istiyorsunuz?".to_string(),
        String::new(),
        "Örnek hedefler:".to_string(),
    ];
    lines.extend(GOAL_EXAMPLES.iter().map(|e| format!("• \"{}\"", e)));
    Response::new(ResponseKind::Clarification, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillup_core::Catalog;

    fn engine() -> GoalEngine {
        GoalEngine::new(&Catalog::builtin().goal_plans, MatchMode::Substring).unwrap()
    }

    #[test]
    fn test_frontend_plan() {
        let response = engine().recommend("frontend developer olmak istiyorum").unwrap();
        assert_eq!(response.kind, ResponseKind::Recommendation);
        assert_eq!(response.title.as_deref(), Some("Frontend Developer"));
        assert_eq!(
            response.course_names(),
            vec![
                "Web Geliştirme Masterclass",
                "UI/UX Tasarım Temelleri",
                "Mobil Uygulama Geliştirme",
            ]
        );
        assert!(response.text.contains("1. Web Geliştirme Masterclass"));
        assert!(response.text.contains("3. Mobil Uygulama Geliştirme"));
    }

    #[test]
    fn test_keyword_without_trigger_still_recommends() {
        let response = engine().recommend("data science").unwrap();
        assert_eq!(response.title.as_deref(), Some("Veri Bilimci"));
    }

    #[test]
    fn test_first_declared_plan_wins() {
        // "frontend" (plan 1) and "fullstack" (plan 2) both present.
        let response = engine().recommend("fullstack mı frontend mi").unwrap();
        assert_eq!(response.title.as_deref(), Some("Frontend Developer"));
    }

    #[test]
    fn test_declared_order_decides_not_keyword_position() {
        let plans = vec![
            CareerGoalPlan::new(&["beta"], "B Path", &["X"]),
            CareerGoalPlan::new(&["alpha"], "A Path", &["Y"]),
        ];
        let engine = GoalEngine::new(&plans, MatchMode::Substring).unwrap();
        let response = engine.recommend("alpha and beta").unwrap();
        assert_eq!(response.title.as_deref(), Some("B Path"));
    }

    #[test]
    fn test_goal_trigger_without_plan_asks_for_goal() {
        let response = engine().recommend("bir hedef belirlemek istiyorum").unwrap();
        assert_eq!(response.kind, ResponseKind::Clarification);
        assert!(response.text.contains("Frontend developer olmak istiyorum"));
        assert!(response.actions.is_empty());
    }

    #[test]
    fn test_no_trigger_no_plan_passes() {
        assert!(engine().recommend("merhaba").is_none());
        assert!(engine().recommend("giriş yapmak istiyorum").is_none());
    }

    #[test]
    fn test_short_keyword_matches_inside_word() {
        // Known coarse behaviour: "ai" hides in "mail".
        let response = engine().recommend("mail").unwrap();
        assert_eq!(response.title.as_deref(), Some("AI/ML Geliştirici"));
    }

    #[test]
    fn test_word_boundary_mode_avoids_inner_match() {
        let engine =
            GoalEngine::new(&Catalog::builtin().goal_plans, MatchMode::WordBoundary).unwrap();
        assert!(engine.recommend("mail").is_none());
        let response = engine.recommend("ai mühendisi olmak").unwrap();
        assert_eq!(response.title.as_deref(), Some("AI/ML Geliştirici"));
    }

    #[test]
    fn test_plan_course_names_render_even_if_unknown() {
        let plans = vec![CareerGoalPlan::new(&["devops"], "DevOps", &["Kubernetes Temelleri"])];
        let engine = GoalEngine::new(&plans, MatchMode::Substring).unwrap();
        let response = engine.recommend("devops").unwrap();
        assert_eq!(response.course_names(), vec!["Kubernetes Temelleri"]);
    }
}
