use regex::Regex;

use crate::models::CategoryRule;

/// Picks a category for a new record from its name. User rules are tried by
/// descending priority; the first match wins.
#[derive(Debug, Default)]
pub(crate) struct Categorizer {
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
struct CompiledRule {
    matcher: Matcher,
    category: String,
}

#[derive(Debug)]
enum Matcher {
    Contains(String),
    Pattern(Regex),
}

impl Categorizer {
    /// Compile `rules`. Regex rules that fail to compile are skipped and
    /// their patterns returned so the caller can report them.
    pub(crate) fn new(rules: &[CategoryRule]) -> (Self, Vec<String>) {
        let mut ordered: Vec<&CategoryRule> = rules.iter().collect();
        ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut bad_patterns = Vec::new();
        let mut compiled = Vec::with_capacity(ordered.len());
        for rule in ordered {
            let matcher = if rule.is_regex {
                match Regex::new(&rule.pattern) {
                    Ok(re) => Matcher::Pattern(re),
                    Err(_) => {
                        bad_patterns.push(rule.pattern.clone());
                        continue;
                    }
                }
            } else {
                Matcher::Contains(rule.pattern.to_lowercase())
            };
            compiled.push(CompiledRule {
                matcher,
                category: rule.category.clone(),
            });
        }

        (Self { rules: compiled }, bad_patterns)
    }

    /// User rules followed by the built-in defaults.
    pub(crate) fn with_user_rules(user_rules: &[CategoryRule]) -> (Self, Vec<String>) {
        let mut all: Vec<CategoryRule> = user_rules.to_vec();
        all.extend(default_rules().into_iter().map(|mut r| {
            r.priority = i32::MIN;
            r
        }));
        Self::new(&all)
    }

    pub(crate) fn categorize(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| match &rule.matcher {
                Matcher::Contains(pattern) => name_lower.contains(pattern.as_str()),
                Matcher::Pattern(re) => re.is_match(name),
            })
            .map(|rule| rule.category.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }
}

/// Built-in rules covering the usual household bills.
pub(crate) fn default_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new_contains("alquiler", "Fijo"),
        CategoryRule::new_contains("hipoteca", "Fijo"),
        CategoryRule::new_contains("netflix", "Ocio"),
        CategoryRule::new_contains("spotify", "Ocio"),
        CategoryRule::new_regex(r"(?i)\b(factura|luz|agua|gas|internet)\b", "Servicios"),
        CategoryRule::new_regex(r"(?i)\b(salario|n[oó]mina)\b", "Salario"),
    ]
}

/// Suggest a contains-pattern for a record name: its first word or two,
/// lowercased, with digits and punctuation dropped.
pub(crate) fn suggest_pattern(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_alphabetic() || c.is_whitespace() { c } else { ' ' })
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().take(2).collect();
    if words.is_empty() {
        name.trim().to_lowercase()
    } else {
        words.join(" ").to_lowercase()
    }
}
