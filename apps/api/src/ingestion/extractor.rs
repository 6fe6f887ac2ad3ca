//! Markup → readable text. Strips chrome and hidden noise, harvests
//! title/meta lines as tagged metadata, tries portal-specific content regions
//! first and falls back to the largest plausible text block. Fails explicitly
//! instead of returning garbage.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

use crate::ingestion::IngestError;

/// Combined output below this is treated as an extraction failure.
const MIN_EXTRACTED_LEN: usize = 250;
/// A portal content region must individually clear this.
const MIN_PORTAL_SECTION_LEN: usize = 200;
/// Fallback blocks must clear this to be candidates at all.
const MIN_FALLBACK_BLOCK_LEN: usize = 120;
const MIN_FALLBACK_ACCEPT_LEN: usize = 200;

const NOISE_KEYWORDS: &[&str] = &[
    "cookie",
    "consent",
    "banner",
    "modal",
    "popup",
    "subscribe",
    "newsletter",
    "tracking",
    "advert",
    "promo",
];

const SKIP_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "noscript", "svg", "template",
];

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector"));

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("meta selector"));

static BLOCK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p, div, section").expect("block selector"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PortalSource {
    LinkedIn,
    Indeed,
    Naukri,
    Wellfound,
    Generic,
}

fn portal_selectors(source: PortalSource) -> &'static [Selector] {
    static LINKEDIN: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_selectors(&[
            ".jobs-description",
            ".jobs-box__html-content",
            ".show-more-less-html__markup",
        ])
    });
    static INDEED: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_selectors(&["#jobDescriptionText", ".jobsearch-jobDescriptionText"])
    });
    static NAUKRI: LazyLock<Vec<Selector>> =
        LazyLock::new(|| parse_selectors(&[".job-desc", ".jd-container", ".description"]));
    static WELLFOUND: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        parse_selectors(&[".job-description", r#"[class*="styles__Description"]"#])
    });

    match source {
        PortalSource::LinkedIn => LINKEDIN.as_slice(),
        PortalSource::Indeed => INDEED.as_slice(),
        PortalSource::Naukri => NAUKRI.as_slice(),
        PortalSource::Wellfound => WELLFOUND.as_slice(),
        PortalSource::Generic => &[],
    }
}

fn parse_selectors(css: &[&str]) -> Vec<Selector> {
    css.iter()
        .map(|s| Selector::parse(s).expect("portal selector"))
        .collect()
}

fn is_noise_element(el: &ElementRef) -> bool {
    if el.value().attr("aria-hidden") == Some("true") {
        return true;
    }
    if let Some(style) = el.value().attr("style") {
        if style.replace(' ', "").contains("display:none") {
            return true;
        }
    }

    let classes = el
        .value()
        .classes()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let id = el.value().attr("id").unwrap_or("").to_lowercase();

    NOISE_KEYWORDS
        .iter()
        .any(|k| classes.contains(k) || id.contains(k))
}

fn in_skipped_subtree(el: ElementRef) -> bool {
    el.ancestors().filter_map(ElementRef::wrap).any(|ancestor| {
        SKIP_TAGS.contains(&ancestor.value().name()) || is_noise_element(&ancestor)
    })
}

/// Text of an element's visible descendants, skipping chrome tags and noise
/// subtrees. The DOM is immutable here, so noise is skipped during the walk
/// rather than removed up front.
fn visible_text(el: ElementRef, sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    collect_text(el, &mut parts);
    parts.join(sep)
}

fn collect_text(el: ElementRef, parts: &mut Vec<String>) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    if SKIP_TAGS.contains(&child_el.value().name()) || is_noise_element(&child_el) {
                        continue;
                    }
                    collect_text(child_el, parts);
                }
            }
            _ => {}
        }
    }
}

/// Best-effort portal detection from page text; steers the selector strategy.
fn detect_source(page_text_lower: &str) -> PortalSource {
    if page_text_lower.contains("linkedin") || page_text_lower.contains("jobs-details") {
        PortalSource::LinkedIn
    } else if page_text_lower.contains("indeed") || page_text_lower.contains("jobdescriptiontext") {
        PortalSource::Indeed
    } else if page_text_lower.contains("naukri") {
        PortalSource::Naukri
    } else if page_text_lower.contains("wellfound") || page_text_lower.contains("angel.co") {
        PortalSource::Wellfound
    } else {
        PortalSource::Generic
    }
}

fn extract_from_portal(doc: &Html, source: PortalSource) -> Option<String> {
    let mut collected: Vec<String> = Vec::new();

    for selector in portal_selectors(source) {
        if let Some(section) = doc.select(selector).next() {
            let text = visible_text(section, "\n");
            if text.chars().count() > MIN_PORTAL_SECTION_LEN {
                collected.push(text);
            }
        }
    }

    if collected.is_empty() {
        return None;
    }
    let combined = collected.join("\n");
    (combined.chars().count() > MIN_EXTRACTED_LEN).then_some(combined)
}

/// Fallback: the single largest text block that looks like prose.
fn fallback_largest_block(doc: &Html) -> Option<String> {
    let largest = doc
        .select(&BLOCK_SELECTOR)
        .filter(|el| !is_noise_element(el) && !in_skipped_subtree(*el))
        .map(|el| visible_text(el, "\n"))
        .filter(|text| text.chars().count() > MIN_FALLBACK_BLOCK_LEN && text.contains(' '))
        .max_by_key(|text| text.chars().count())?;

    (largest.chars().count() > MIN_FALLBACK_ACCEPT_LEN).then_some(largest)
}

/// Extracts readable job-description text from page markup.
pub fn extract_job_description(html: &str) -> Result<String, IngestError> {
    if html.trim().is_empty() {
        return Err(IngestError::ExtractionFailed);
    }

    let doc = Html::parse_document(html);
    let mut lines: Vec<String> = Vec::new();

    // Page title and meta descriptions are high-signal; tag them so the
    // parser can tell metadata from body prose.
    if let Some(title) = doc.select(&TITLE_SELECTOR).next() {
        let text = title.text().collect::<String>();
        let text = text.trim();
        if !text.is_empty() {
            lines.push(format!("[TITLE] {text}"));
        }
    }

    for meta in doc.select(&META_SELECTOR) {
        let name = meta
            .value()
            .attr("name")
            .or_else(|| meta.value().attr("property"))
            .unwrap_or("");
        if !matches!(name, "description" | "og:title" | "og:description") {
            continue;
        }
        if let Some(content) = meta.value().attr("content") {
            let content = content.trim();
            if !content.is_empty() {
                lines.push(format!("[META] {content}"));
            }
        }
    }

    let page_text = visible_text(doc.root_element(), " ").to_lowercase();
    let source = detect_source(&page_text);

    let content = extract_from_portal(&doc, source).or_else(|| fallback_largest_block(&doc));
    if let Some(content) = content {
        lines.push(content);
    }

    let combined = dedup_lines(&lines.join("\n"));
    if combined.chars().count() < MIN_EXTRACTED_LEN {
        return Err(IngestError::ExtractionFailed);
    }
    Ok(combined)
}

/// Drops repeated lines, keeping first-seen order. Portals repeat the same
/// summary block several times per page.
fn dedup_lines(text: &str) -> String {
    let mut seen: HashSet<&str> = HashSet::new();
    text.lines()
        .filter(|line| {
            let key = line.trim();
            key.is_empty() || seen.insert(key)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
