//! Application-flow rule: payment demands, document harvesting, and informal
//! application channels.

use crate::parsing::schema::JdContext;
use crate::rules::{RuleResult, RuleSignal};

const PAYMENT_TERMS: &[&str] = &[
    "pay to apply",
    "application fee",
    "processing fee",
    "registration fee",
    "security deposit",
    "training fee",
    "refundable fee",
    "pay before interview",
    "pay before joining",
];

const DOCUMENT_TERMS: &[&str] = &[
    "aadhaar",
    "pan card",
    "id proof",
    "documents before interview",
];

const INFORMAL_CHANNELS: &[&str] = &["whatsapp", "telegram", "forms.gle", "google form", "dm us"];

pub fn suspicious_application_flow_rule(ctx: &JdContext) -> RuleResult {
    let lower = ctx.raw_text.to_lowercase();

    if PAYMENT_TERMS.iter().any(|t| lower.contains(t)) {
        return Ok(RuleSignal::flag(
            0.9,
            "Application requires payment or financial commitment",
        ));
    }

    if DOCUMENT_TERMS.iter().any(|t| lower.contains(t)) {
        return Ok(RuleSignal::flag(
            0.8,
            "Job post asks for sensitive documents before any interview",
        ));
    }

    let channel_hits = INFORMAL_CHANNELS.iter().filter(|t| lower.contains(*t)).count();
    if channel_hits >= 2 {
        return Ok(RuleSignal::flag(
            0.7,
            "Multiple suspicious non-standard application channels detected",
        ));
    }
    if channel_hits == 1 {
        return Ok(RuleSignal::flag(
            0.5,
            "Suspicious application channel detected",
        ));
    }

    Ok(RuleSignal::clean())
}
