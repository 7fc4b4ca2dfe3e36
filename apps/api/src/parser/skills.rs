//! Skill tagging against a fixed, ordered catalog.

use once_cell::sync::Lazy;
use regex::Regex;

/// One catalog entry: a canonical label and the synonyms that detect it.
pub struct SkillPattern {
    pub label: &'static str,
    pattern: Regex,
    /// Extra synonym that only counts when the text right after it does not
    /// match the guard.
    guarded: Option<(Regex, Regex)>,
}

impl SkillPattern {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            pattern: Regex::new(&format!("(?i){pattern}")).expect("valid skill regex"),
            guarded: None,
        }
    }

    fn or_unless_followed_by(mut self, pattern: &str, guard: &str) -> Self {
        let pattern = Regex::new(&format!("(?i){pattern}")).expect("valid skill regex");
        let guard =
            Regex::new(&format!("(?i)^(?:{guard})")).expect("valid skill guard regex");
        self.guarded = Some((pattern, guard));
        self
    }

    pub fn is_match(&self, text: &str) -> bool {
        if self.pattern.is_match(text) {
            return true;
        }
        match &self.guarded {
            None => false,
            Some((pattern, guard)) => pattern
                .find_iter(text)
                .any(|m| !guard.is_match(&text[m.end()..])),
        }
    }
}

/// Output order is declaration order here, not the order matches appear in.
pub static SKILL_CATALOG: Lazy<Vec<SkillPattern>> = Lazy::new(|| {
    vec![
        // Languages
        SkillPattern::new("C++", r"\bc\+\+"),
        SkillPattern::new("Python", r"\bpython\b"),
        SkillPattern::new("JavaScript", r"\bjavascript\b|\bjs\b"),
        SkillPattern::new("TypeScript", r"\btypescript\b|\bts\b"),
        // "go to", "go together" are prose, not the language
        SkillPattern::new("Go", r"\bgolang\b").or_unless_followed_by(r"\bgo\b", r"\s+to"),
        SkillPattern::new("Rust", r"\brust\b"),
        SkillPattern::new("Java", r"\bjava\b"),
        SkillPattern::new("C#", r"\bc#|\.net\b"),
        SkillPattern::new("Ruby", r"\bruby\b"),
        SkillPattern::new("PHP", r"\bphp\b"),
        SkillPattern::new("Swift", r"\bswift\b"),
        SkillPattern::new("Kotlin", r"\bkotlin\b"),
        SkillPattern::new("Scala", r"\bscala\b"),
        // Infrastructure
        SkillPattern::new("AWS", r"\baws\b|amazon web services"),
        SkillPattern::new("Azure", r"\bazure\b"),
        SkillPattern::new("GCP", r"\bgcp\b|google cloud"),
        SkillPattern::new("Docker", r"\bdocker\b"),
        SkillPattern::new("Kubernetes", r"\bkubernetes\b|\bk8s\b"),
        SkillPattern::new("Terraform", r"\bterraform\b"),
        SkillPattern::new("Linux", r"\blinux\b"),
        // Databases
        SkillPattern::new("PostgreSQL", r"\bpostgres(?:ql)?\b"),
        SkillPattern::new("MySQL", r"\bmysql\b"),
        SkillPattern::new("MongoDB", r"\bmongodb\b|\bmongo\b"),
        SkillPattern::new("Redis", r"\bredis\b"),
        SkillPattern::new("Elasticsearch", r"\belasticsearch\b|\belastic\b"),
        // Frameworks
        SkillPattern::new("React", r"\breact(?:\.?js)?\b"),
        SkillPattern::new("Node.js", r"\bnode\.?js\b|\bnode\b"),
        SkillPattern::new("Django", r"\bdjango\b"),
        SkillPattern::new("Flask", r"\bflask\b"),
        SkillPattern::new("Spring", r"\bspring\b"),
        SkillPattern::new("FastAPI", r"\bfastapi\b"),
        // Security
        SkillPattern::new("Security", r"\bsecurity\b|\bcybersecurity\b"),
        SkillPattern::new("Cryptography", r"\bcrypto(?:graphy)?\b"),
        SkillPattern::new("Penetration Testing", r"\bpentest(?:ing)?\b|\bpenetration\b"),
        SkillPattern::new("SIEM", r"\bsiem\b"),
        SkillPattern::new("SOC", r"\bsoc\b"),
        // Process and practices
        SkillPattern::new("Git", r"\bgit\b"),
        SkillPattern::new("CI/CD", r"\bci/?cd\b"),
        SkillPattern::new("Agile", r"\bagile\b|\bscrum\b"),
        SkillPattern::new("REST", r"\brest(?:ful)?\s*api\b|\brest\b"),
        SkillPattern::new("GraphQL", r"\bgraphql\b"),
        SkillPattern::new("Microservices", r"\bmicroservices?\b"),
        SkillPattern::new("Machine Learning", r"\bmachine learning\b|\bml\b"),
        SkillPattern::new("AI", r"\bartificial intelligence\b|\bai\b"),
    ]
});

/// Returns every catalog label whose pattern appears in `text`, in catalog order.
pub fn parse_skills(text: &str) -> Vec<String> {
    SKILL_CATALOG
        .iter()
        .filter(|skill| skill.is_match(text))
        .map(|skill| skill.label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_not_text_order() {
        let skills = parse_skills("we use aws heavily, and python everywhere");
        assert_eq!(skills, vec!["Python".to_string(), "AWS".to_string()]);
    }

    #[test]
    fn test_synonyms_collapse_to_one_label() {
        let skills = parse_skills("kubernetes (k8s) and more k8s");
        assert_eq!(skills, vec!["Kubernetes".to_string()]);
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let skills = parse_skills("strong javascript skills");
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(!skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_go_guard() {
        assert!(!parse_skills("you will go to conferences").contains(&"Go".to_string()));
        assert!(parse_skills("services in go and rust").contains(&"Go".to_string()));
        assert!(parse_skills("we go to market with golang").contains(&"Go".to_string()));
        assert!(parse_skills("go to the office; we write go").contains(&"Go".to_string()));
    }

    #[test]
    fn test_golang_is_never_guarded() {
        assert!(parse_skills("experience with golang tooling").contains(&"Go".to_string()));
        assert_eq!(
            parse_skills("we moved from golang to rust"),
            vec!["Go".to_string(), "Rust".to_string()]
        );
    }

    #[test]
    fn test_symbol_languages() {
        let skills = parse_skills("modern c++ and c# experience");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"C#".to_string()));

        assert!(parse_skills("asp.net core").contains(&"C#".to_string()));
    }

    #[test]
    fn test_ai_not_matched_inside_words() {
        assert!(!parse_skills("email us at jobs@example.com").contains(&"AI".to_string()));
        assert!(parse_skills("applied ai team").contains(&"AI".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        let skills = parse_skills("PostgreSQL, Redis and GraphQL");
        assert_eq!(
            skills,
            vec![
                "PostgreSQL".to_string(),
                "Redis".to_string(),
                "GraphQL".to_string()
            ]
        );
    }

    #[test]
    fn test_empty_text_has_no_skills() {
        assert!(parse_skills("").is_empty());
    }
}
