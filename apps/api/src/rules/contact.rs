//! Contact-trust rule. Tiers are mutually exclusive, checked in descending
//! severity: free-provider emails, messaging-only, phone-only, company/domain
//! mismatch, no contact at all.

use crate::parsing::schema::JdContext;
use crate::parsing::utils::GENERIC_EMAIL_DOMAINS;
use crate::rules::{RuleResult, RuleSignal};

/// Company names shorter than this are too generic to compare against a
/// domain; the mismatch tier is skipped for them.
const MIN_COMPARABLE_COMPANY_LEN: usize = 4;

pub fn poor_contact_info_rule(ctx: &JdContext) -> RuleResult {
    let lower = ctx.raw_text.to_lowercase();
    let mentions_messaging = lower.contains("whatsapp") || lower.contains("telegram");

    let generic_hits = ctx
        .emails
        .iter()
        .filter(|e| email_domain(e).is_some_and(|d| GENERIC_EMAIL_DOMAINS.contains(&d)))
        .count();

    if generic_hits >= 2 {
        return Ok(RuleSignal::flag(
            0.85,
            "Multiple generic free-email contacts used instead of a company domain",
        ));
    }
    if generic_hits == 1 {
        return Ok(RuleSignal::flag(
            0.7,
            "Generic email contact used instead of company domain",
        ));
    }

    if ctx.emails.is_empty() {
        if mentions_messaging {
            return Ok(RuleSignal::flag(
                0.75,
                "Contact offered only through informal messaging channels",
            ));
        }
        if !ctx.phone_numbers.is_empty() {
            return Ok(RuleSignal::flag(
                0.55,
                "Phone-only contact with no email address provided",
            ));
        }
        return Ok(RuleSignal::flag(
            0.4,
            "No contact channel found in the job post",
        ));
    }

    // Corporate addresses from here on.
    if let Some(company) = ctx.company.name.as_deref() {
        let compact: String = company
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        if compact.len() >= MIN_COMPARABLE_COMPANY_LEN {
            let any_related = ctx.emails.iter().any(|e| {
                email_domain(e)
                    .and_then(|d| d.split('.').next())
                    .is_some_and(|base| base.contains(&compact) || compact.contains(base))
            });
            if !any_related {
                return Ok(RuleSignal::flag(
                    0.5,
                    "Contact email domain does not appear related to the stated company name",
                ));
            }
        }
    }

    Ok(RuleSignal::clean())
}

fn email_domain(email: &str) -> Option<&str> {
    email.split('@').nth(1)
}
