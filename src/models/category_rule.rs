#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub id: Option<i64>,
    pub pattern: String,
    pub category: String,
    pub is_regex: bool,
    pub priority: i32,
}

impl CategoryRule {
    pub fn new_contains(pattern: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: None,
            pattern: pattern.into(),
            category: category.into(),
            is_regex: false,
            priority: 0,
        }
    }

    pub fn new_regex(pattern: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            is_regex: true,
            ..Self::new_contains(pattern, category)
        }
    }
}

impl std::fmt::Display for CategoryRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_regex { "regex" } else { "contains" };
        write!(f, "{} '{}' -> {}", kind, self.pattern, self.category)
    }
}
