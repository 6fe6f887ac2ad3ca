//! Skill-keyword insight. A product-value extra on top of the risk score;
//! it never contributes to scoring and degrades to an empty result on any
//! internal failure.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical skill name → match aliases.
const SKILL_ALIASES: &[(&str, &[&str])] = &[
    // languages
    ("python", &["python"]),
    ("java", &["java"]),
    ("javascript", &["javascript"]),
    ("typescript", &["typescript"]),
    ("c++", &["c++", "cpp"]),
    ("c#", &["c#", "csharp"]),
    ("go", &["golang"]),
    ("rust", &["rust"]),
    // frameworks / libs
    ("react", &["react", "reactjs", "react.js"]),
    ("angular", &["angular", "angularjs"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("spring", &["spring"]),
    ("spring boot", &["spring boot", "springboot"]),
    ("django", &["django"]),
    ("flask", &["flask"]),
    ("node", &["node", "nodejs", "node.js"]),
    ("express", &["express", "expressjs"]),
    // data / backend
    ("sql", &["sql"]),
    ("postgresql", &["postgresql", "postgres"]),
    ("mysql", &["mysql"]),
    ("mongodb", &["mongodb", "mongo"]),
    ("redis", &["redis"]),
    ("kafka", &["kafka"]),
    // cloud / devops
    ("aws", &["aws"]),
    ("azure", &["azure"]),
    ("gcp", &["gcp", "google cloud"]),
    ("docker", &["docker"]),
    ("kubernetes", &["kubernetes", "k8s"]),
    ("ci/cd", &["ci/cd", "cicd"]),
    ("jenkins", &["jenkins"]),
    // testing / tools
    ("selenium", &["selenium"]),
    ("jmeter", &["jmeter"]),
    ("pytest", &["pytest"]),
    ("junit", &["junit"]),
    // misc
    ("rest", &["rest", "restful"]),
    ("microservices", &["microservices", "microservice"]),
    ("linux", &["linux"]),
    ("git", &["git"]),
];

// Whole-token matching with `+`, `#`, `.` and `/` treated as part of a token,
// so "c++" and "ci/cd" match as written and "java" does not match
// "javascript".
static SKILL_MATCHERS: LazyLock<Vec<(&'static str, Vec<Regex>)>> = LazyLock::new(|| {
    SKILL_ALIASES
        .iter()
        .map(|(skill, aliases)| {
            let matchers = aliases
                .iter()
                .map(|alias| {
                    let pattern = format!(
                        r"(?i)(?:^|[^a-z0-9+#./]){}(?:$|[^a-z0-9+#./])",
                        regex::escape(alias)
                    );
                    Regex::new(&pattern).expect("skill pattern")
                })
                .collect();
            (*skill, matchers)
        })
        .collect()
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsInsight {
    pub skills_found: Vec<String>,
    pub skill_count: usize,
}

/// Matches the skill table against the text. A skill counts once no matter
/// how many aliases hit.
pub fn extract_skills(text: &str) -> SkillsInsight {
    let found: BTreeSet<&str> = SKILL_MATCHERS
        .iter()
        .filter(|(_, matchers)| matchers.iter().any(|re| re.is_match(text)))
        .map(|(skill, _)| *skill)
        .collect();

    SkillsInsight {
        skill_count: found.len(),
        skills_found: found.into_iter().map(String::from).collect(),
    }
}
