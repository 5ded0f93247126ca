//! End-to-end conversations against the built-in catalog.
//!
//! Each test builds its own router and orchestrator.

use skillup_chat::{
    ChatError, ChatOrchestrator, Classifier, IntentRouter, ResponseKind, ViewTarget,
};
use skillup_core::config::{AssistantConfig, SkillUpConfig};
use skillup_core::types::CareerGoalPlan;
use skillup_core::{Catalog, SkillUpError};

// =============================================================================
// Helpers
// =============================================================================

fn router() -> IntentRouter {
    IntentRouter::with_defaults().unwrap()
}

fn orchestrator() -> ChatOrchestrator {
    ChatOrchestrator::new(router(), AssistantConfig::default())
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_frontend_goal_recommends_three_courses_in_order() {
    let response = orchestrator()
        .handle_message("frontend developer olmak istiyorum", false)
        .unwrap();

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
}

#[test]
fn test_course_word_without_hit_answers_not_found() {
    let response = orchestrator().handle_message("kurs öneri", false).unwrap();
    assert_eq!(response.kind, ResponseKind::InformationalAnswer);
    assert!(response.text.contains("Hangi alanda kurs arıyorsunuz?"));
    assert!(response.actions.is_empty());
}

#[test]
fn test_login_request_is_not_intercepted_by_goal_or_search() {
    let response = orchestrator()
        .handle_message("giriş yapmak istiyorum", false)
        .unwrap();
    assert_eq!(response.kind, ResponseKind::NavigationHint);
    assert_eq!(response.view_target(), Some(ViewTarget::Login));
}

#[test]
fn test_blank_input_is_rejected_before_routing() {
    let o = orchestrator();
    assert!(matches!(o.handle_message("   ", false), Err(ChatError::EmptyMessage)));
    assert!(o.history().unwrap().is_empty());
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_goal_trigger_without_keyword_always_clarifies() {
    let r = router();
    for query in [
        "hedefim belli değil",
        "kariyer planı",
        "bir yol haritası lazım",
        "kurs seçmek için hedef",
        "ne olmak istiyorum bilmiyorum",
    ] {
        let response = r.classify(query, false);
        assert_eq!(response.kind, ResponseKind::Clarification, "query: {query}");
    }
}

#[test]
fn test_overlapping_plans_resolve_to_first_declared() {
    let r = router();
    // "frontend" belongs to the first plan, "security" to a later one.
    let response = r.classify("security ve frontend kariyeri", false);
    assert_eq!(response.title.as_deref(), Some("Frontend Developer"));

    // "data science" (plan 3) and "ml" (plan 4).
    let response = r.classify("data science ve ml", false);
    assert_eq!(response.title.as_deref(), Some("Veri Bilimci"));
}

#[test]
fn test_course_search_ignores_case() {
    let r = router();
    let upper = r.classify("WEB KURSU", false);
    let lower = r.classify("web kursu", false);
    assert_eq!(upper.course_names(), lower.course_names());
    assert_eq!(upper.kind, ResponseKind::CourseMatches);
}

#[test]
fn test_search_snippets_keep_ellipsis_on_short_descriptions() {
    let mut catalog = Catalog::builtin();
    catalog.courses[0].description = "Kısa.".to_string();
    let r = IntentRouter::new(&catalog, &SkillUpConfig::default()).unwrap();
    let response = r.classify("web kursu", false);
    assert!(response.text.contains("Web Geliştirme Masterclass: Kısa...."));
}

#[test]
fn test_profile_answer_depends_on_login_state() {
    let o = orchestrator();
    let member = o.handle_message("hesap bilgilerim", true).unwrap();
    let guest = o.handle_message("hesap bilgilerim", false).unwrap();
    assert_eq!(member.view_target(), Some(ViewTarget::Profile));
    assert_eq!(guest.view_target(), Some(ViewTarget::Login));
}

#[test]
fn test_inconsistent_catalog_is_caught_at_startup() {
    let mut catalog = Catalog::builtin();
    catalog.goal_plans.push(CareerGoalPlan::new(
        &["devops"],
        "DevOps Mühendisi",
        &["Kubernetes Temelleri"],
    ));

    let err = catalog.clone().checked(true).unwrap_err();
    assert!(matches!(err, SkillUpError::Catalog(_)));

    // Lenient startup keeps going and the plan renders the name as given.
    let catalog = catalog.checked(false).unwrap();
    let r = IntentRouter::new(&catalog, &SkillUpConfig::default()).unwrap();
    let response = r.classify("devops olmak istiyorum", false);
    assert_eq!(response.course_names(), vec!["Kubernetes Temelleri"]);
}

#[test]
fn test_response_serializes_for_renderer() {
    let response = router().classify("frontend", false);
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["kind"], "recommendation");
    assert_eq!(value["title"], "Frontend Developer");
    assert_eq!(value["actions"][0]["type"], "open_course");
    assert_eq!(value["actions"][0]["name"], "Web Geliştirme Masterclass");
}
