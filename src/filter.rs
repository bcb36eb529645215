//! Filter compilation for label and annotation criteria

use std::collections::HashMap;

use regex::Regex;

/// A compiled filter criterion.
///
/// Deliberately exposes only a yes/no match capability so the evaluator
/// stays decoupled from the pattern engine.
#[derive(Debug, Clone)]
pub struct Matcher(Regex);

impl Matcher {
    /// Test a property value against the compiled pattern
    pub fn matches(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// A set of compiled name→pattern criteria for one property map
/// (labels or annotations).
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: HashMap<String, Matcher>,
}

impl FilterSet {
    /// Compile a criteria map into a filter set.
    ///
    /// Compilation is atomic: the first pattern that fails to compile
    /// aborts with [`FilterError::InvalidPattern`] and no partial set is
    /// produced.
    pub fn compile(criteria: &HashMap<String, String>) -> Result<Self, FilterError> {
        let mut filters = HashMap::with_capacity(criteria.len());

        for (name, pattern) in criteria {
            tracing::debug!(name = %name, pattern = %pattern, "Compiling filter");
            let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            filters.insert(name.clone(), Matcher(regex));
        }

        Ok(Self { filters })
    }

    /// Whether the set carries no criteria (the gate is vacuously satisfied)
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Number of compiled criteria
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Test every criterion against a property map.
    ///
    /// A property absent from the map is tested against the empty string,
    /// so a pattern matching `""` accepts alerts lacking that property.
    /// Returns the name of the first failing criterion, or `None` when all
    /// criteria match.
    pub fn unmatched<'a>(&'a self, properties: &HashMap<String, String>) -> Option<&'a str> {
        for (name, matcher) in &self.filters {
            let value = properties.get(name).map(String::as_str).unwrap_or("");
            if !matcher.matches(value) {
                return Some(name);
            }
        }
        None
    }

    /// Whether every criterion matches the given property map
    pub fn matches(&self, properties: &HashMap<String, String>) -> bool {
        self.unmatched(properties).is_none()
    }
}

/// Filter compilation errors
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("failed to compile pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn props(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        criteria(pairs)
    }

    #[test]
    fn test_compile_empty_criteria() {
        let set = FilterSet::compile(&HashMap::new()).unwrap();
        assert!(set.is_empty());
        assert!(set.matches(&props(&[("anything", "at all")])));
    }

    #[test]
    fn test_compile_invalid_pattern_is_atomic() {
        let input = criteria(&[("good", ".*"), ("bad", "(unclosed")]);
        let err = FilterSet::compile(&input).unwrap_err();
        match err {
            FilterError::InvalidPattern { pattern, .. } => {
                assert_eq!(pattern, "(unclosed");
            }
        }
    }

    #[test]
    fn test_match_present_property() {
        let set = FilterSet::compile(&criteria(&[("severity", "page")])).unwrap();
        assert!(set.matches(&props(&[("severity", "page")])));
        assert!(!set.matches(&props(&[("severity", "warn")])));
    }

    #[test]
    fn test_absent_property_tested_against_empty_string() {
        let set = FilterSet::compile(&criteria(&[("team", "(infra|^$)")])).unwrap();
        // No "team" property: the empty-string branch matches.
        assert!(set.matches(&props(&[])));
        assert!(set.matches(&props(&[("team", "infra")])));
        assert!(!set.matches(&props(&[("team", "web")])));

        // A pattern that cannot match "" excludes alerts lacking the property.
        let strict = FilterSet::compile(&criteria(&[("team", "infra")])).unwrap();
        assert!(!strict.matches(&props(&[])));
    }

    #[test]
    fn test_conjunctive_across_criteria() {
        let set = FilterSet::compile(&criteria(&[("severity", "page"), ("env", "prod")])).unwrap();
        assert!(set.matches(&props(&[("severity", "page"), ("env", "prod")])));
        assert!(!set.matches(&props(&[("severity", "page"), ("env", "staging")])));
    }

    #[test]
    fn test_unmatched_names_failing_criterion() {
        let set = FilterSet::compile(&criteria(&[("severity", "page")])).unwrap();
        assert_eq!(
            set.unmatched(&props(&[("severity", "warn")])),
            Some("severity")
        );
        assert_eq!(set.unmatched(&props(&[("severity", "page")])), None);
    }

    #[test]
    fn test_compile_is_idempotent() {
        let input = criteria(&[("name", "(Alert1|Alert2|^$)")]);
        let first = FilterSet::compile(&input).unwrap();
        let second = FilterSet::compile(&input).unwrap();

        let corpus = ["Alert1", "Alert2", "Alert3", "", "alert1", "xAlert1x"];
        for value in corpus {
            let properties = props(&[("name", value)]);
            assert_eq!(first.matches(&properties), second.matches(&properties));
        }
    }
}
