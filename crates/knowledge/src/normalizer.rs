use regex::Regex;

/// Turns free-text entity names into stable ids: lowercase, punctuation
/// stripped, words joined with underscores. Keeping this in the stage instead
/// of trusting the model's normalization makes node ids deterministic.
pub struct EntitySlugger {
    strip: Regex,
    join: Regex,
}

impl EntitySlugger {
    pub fn new() -> Self {
        Self {
            strip: Regex::new(r"[^a-z0-9\s_-]").unwrap(),
            join: Regex::new(r"[\s-]+").unwrap(),
        }
    }

    pub fn slug(&self, name: &str) -> String {
        let lowered = name.to_lowercase();
        let stripped = self.strip.replace_all(&lowered, "");
        let joined = self.join.replace_all(stripped.trim(), "_");
        joined.trim_matches('_').to_string()
    }
}

impl Default for EntitySlugger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_person_names() {
        let slugger = EntitySlugger::new();

        assert_eq!(slugger.slug("John Doe"), "john_doe");
        assert_eq!(slugger.slug("  Jane  Smith "), "jane_smith");
        assert_eq!(slugger.slug("O'Brien"), "obrien");
        assert_eq!(slugger.slug("Anne-Marie"), "anne_marie");
    }

    #[test]
    fn same_name_same_slug() {
        let slugger = EntitySlugger::new();
        assert_eq!(slugger.slug("John Doe"), slugger.slug("john doe"));
    }

    #[test]
    fn punctuation_only_names_slug_to_empty() {
        let slugger = EntitySlugger::new();
        assert_eq!(slugger.slug("!!!"), "");
    }
}
