//! Rule-engine core: runs the registry against a structured context with full
//! per-rule fault isolation, then aggregates scores and explanations.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::analysis::insights::{extract_skills, SkillsInsight};
use crate::parsing::schema::JdContext;
use crate::parsing::utils::round2;
use crate::rules::{RuleDef, REGISTRY};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub skills: SkillsInsight,
}

/// Response payload of an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Capped sum of rule contributions, in [0, 1], rounded to two decimals.
    pub rule_score: f64,
    /// Non-empty explanations in rule-registration order.
    pub reasons: Vec<String>,
    pub insights: Insights,
}

impl AnalysisReport {
    /// Distinguished response when no analyzable content was provided at all.
    pub fn invalid_input() -> Self {
        AnalysisReport {
            rule_score: 0.0,
            reasons: vec!["Invalid analysis input: no job text or page markup provided".to_string()],
            insights: Insights::default(),
        }
    }
}

/// Runs every registered rule plus the skills insight over the context.
pub fn run_all_rules(ctx: &JdContext) -> AnalysisReport {
    let (rule_score, reasons) = evaluate(REGISTRY, ctx);

    // Insight failures degrade to an empty result; never to a failed request.
    let skills = catch_unwind(AssertUnwindSafe(|| extract_skills(&skill_basis(ctx))))
        .unwrap_or_else(|_| {
            tracing::warn!("skill extraction panicked; returning empty insight");
            SkillsInsight::default()
        });

    AnalysisReport {
        rule_score,
        reasons,
        insights: Insights { skills },
    }
}

/// Executes `rules` in order. Every rule always runs: a failure or panic in
/// one contributes zero and is invisible to the rest.
pub(crate) fn evaluate(rules: &[RuleDef], ctx: &JdContext) -> (f64, Vec<String>) {
    let mut total = 0.0;
    let mut reasons: Vec<String> = Vec::new();

    for rule in rules {
        match catch_unwind(AssertUnwindSafe(|| (rule.run)(ctx))) {
            Ok(Ok(signal)) => {
                total += signal.score.clamp(0.0, 1.0);
                if let Some(reason) = signal.reason {
                    if !reason.is_empty() {
                        reasons.push(reason);
                    }
                }
            }
            Ok(Err(failure)) => {
                tracing::warn!(
                    rule = rule.name,
                    theme = ?rule.theme,
                    error = %failure,
                    "rule failed; contributing zero"
                );
            }
            Err(_) => {
                tracing::warn!(
                    rule = rule.name,
                    theme = ?rule.theme,
                    "rule panicked; contributing zero"
                );
            }
        }
    }

    (round2(total.min(1.0)), reasons)
}

/// Skills are matched against raw text plus the structured requirement and
/// responsibility bullets.
fn skill_basis(ctx: &JdContext) -> String {
    let mut basis = ctx.raw_text.clone();
    for bullet in ctx.requirements.iter().chain(ctx.responsibilities.iter()) {
        basis.push(' ');
        basis.push_str(bullet);
    }
    basis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parser::parse_jd;
    use crate::rules::{RuleFailure, RuleResult, RuleSignal, RuleTheme};

    const SCAMMY_JD: &str = "Urgent hiring! Join immediately. Earn ₹80,000 per month. \
        No experience required. Contact us at randomcompany@gmail.com";

    const LEGIT_JD: &str = "Senior Software Engineer, 7+ years experience required. \
        Salary ₹120,000/month. Apply via official portal, interview process includes \
        technical and HR rounds. Contact hr@acmecorp.com.";

    fn flagging_rule(_ctx: &JdContext) -> RuleResult {
        Ok(RuleSignal::flag(0.3, "flagged"))
    }

    fn clean_rule(_ctx: &JdContext) -> RuleResult {
        Ok(RuleSignal::clean())
    }

    fn failing_rule(_ctx: &JdContext) -> RuleResult {
        Err(RuleFailure::UnusableInput("broken"))
    }

    fn panicking_rule(_ctx: &JdContext) -> RuleResult {
        panic!("rule exploded");
    }

    fn def(name: &'static str, run: crate::rules::RuleFn) -> RuleDef {
        RuleDef {
            name,
            theme: RuleTheme::Structural,
            run,
        }
    }

    #[test]
    fn test_scores_sum_and_round() {
        let rules = vec![def("a", flagging_rule), def("b", flagging_rule)];
        let (score, reasons) = evaluate(&rules, &JdContext::default());
        assert_eq!(score, 0.6);
        assert_eq!(reasons, vec!["flagged", "flagged"]);
    }

    #[test]
    fn test_score_capped_at_one() {
        let rules: Vec<RuleDef> = (0..5).map(|_| def("x", flagging_rule)).collect();
        let (score, _) = evaluate(&rules, &JdContext::default());
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_failing_rule_is_invisible_to_others() {
        let with_failure = vec![
            def("a", flagging_rule),
            def("bad", failing_rule),
            def("b", flagging_rule),
        ];
        let without = vec![def("a", flagging_rule), def("b", flagging_rule)];

        let ctx = JdContext::default();
        assert_eq!(evaluate(&with_failure, &ctx), evaluate(&without, &ctx));
    }

    #[test]
    fn test_panicking_rule_is_invisible_to_others() {
        let with_panic = vec![
            def("a", flagging_rule),
            def("boom", panicking_rule),
            def("b", flagging_rule),
        ];
        let without = vec![def("a", flagging_rule), def("b", flagging_rule)];

        let ctx = JdContext::default();
        assert_eq!(evaluate(&with_panic, &ctx), evaluate(&without, &ctx));
    }

    #[test]
    fn test_clean_rules_produce_no_reasons() {
        let rules = vec![def("a", clean_rule), def("b", clean_rule)];
        let (score, reasons) = evaluate(&rules, &JdContext::default());
        assert_eq!(score, 0.0);
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_scammy_posting_maxes_out() {
        let ctx = parse_jd(SCAMMY_JD);
        let report = run_all_rules(&ctx);
        assert_eq!(report.rule_score, 1.0);
        assert!(
            report.reasons.len() >= 3,
            "expected several reasons, got {:?}",
            report.reasons
        );
        let joined = report.reasons.join(" | ").to_lowercase();
        assert!(joined.contains("email"), "contact reason missing: {joined}");
        assert!(joined.contains("salary"), "salary reason missing: {joined}");
        assert!(joined.contains("urgent"), "urgency reason missing: {joined}");
    }

    #[test]
    fn test_legitimate_posting_scores_zero() {
        let ctx = parse_jd(LEGIT_JD);
        let report = run_all_rules(&ctx);
        assert_eq!(
            report.rule_score, 0.0,
            "unexpected reasons: {:?}",
            report.reasons
        );
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn test_report_score_always_bounded() {
        for text in [SCAMMY_JD, LEGIT_JD, "", "short", "a b c d e f g"] {
            let report = run_all_rules(&parse_jd(text));
            assert!((0.0..=1.0).contains(&report.rule_score), "text: {text}");
        }
    }

    #[test]
    fn test_skills_insight_included() {
        let ctx = parse_jd(
            "Backend developer needed with React, Kubernetes and PostgreSQL experience, 3+ years, apply via portal after interview",
        );
        let report = run_all_rules(&ctx);
        assert_eq!(report.insights.skills.skill_count, 3);
        assert_eq!(
            report.insights.skills.skills_found,
            vec!["kubernetes", "postgresql", "react"]
        );
    }

    #[test]
    fn test_invalid_input_report_shape() {
        let report = AnalysisReport::invalid_input();
        assert_eq!(report.rule_score, 0.0);
        assert_eq!(report.reasons.len(), 1);
        assert!(report.reasons[0].contains("Invalid analysis input"));
        assert_eq!(report.insights.skills.skill_count, 0);
    }

    #[test]
    fn test_response_serialization_contract() {
        let report = run_all_rules(&parse_jd(SCAMMY_JD));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["rule_score"].is_number());
        assert!(json["reasons"].is_array());
        assert!(json["insights"]["skills"]["skills_found"].is_array());
        assert!(json["insights"]["skills"]["skill_count"].is_u64());
    }
}
