use email_address::EmailAddress;

use crate::password::policy;

/// A single validation rule. Every rule is a pure predicate over the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be empty
    Required,
    /// Value must contain alphabetic characters only
    Alpha,
    /// Value must have at least this many characters
    Min(usize),
    /// Value must have at most this many characters
    Max(usize),
    /// Value must be a valid email address
    Email,
    /// Value must satisfy the password strength policy
    Strong,
}

impl Rule {
    /// Check the value against this rule.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Alpha => value.chars().all(char::is_alphabetic),
            Rule::Min(min) => value.chars().count() >= *min,
            Rule::Max(max) => value.chars().count() <= *max,
            Rule::Email => EmailAddress::is_valid(value),
            Rule::Strong => policy::is_strong(value),
        }
    }

    /// Stable tag identifying the rule in a violation.
    pub fn tag(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Alpha => "alpha",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Email => "email",
            Rule::Strong => "strong",
        }
    }

    /// Rule parameter, if the rule takes one.
    pub fn param(&self) -> Option<String> {
        match self {
            Rule::Min(n) | Rule::Max(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Ordered rules for one named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: &'static str, rules: impl Into<Vec<Rule>>) -> Self {
        Self {
            field,
            rules: rules.into(),
        }
    }

    /// Return the first rule the value violates.
    pub fn check(&self, value: &str) -> Option<FieldViolation> {
        self.rules
            .iter()
            .find(|rule| !rule.check(value))
            .map(|rule| FieldViolation {
                field: self.field.to_string(),
                rule: rule.tag().to_string(),
                param: rule.param(),
            })
    }
}

/// A structured field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub param: Option<String>,
}

/// Validate values against their field rules.
///
/// # Arguments
/// * `fields` - Field rules paired with the value to check, in declaration order
///
/// # Returns
/// At most one violation per field, in the order fields were given
pub fn validate(fields: &[(&FieldRules, &str)]) -> Vec<FieldViolation> {
    fields
        .iter()
        .filter_map(|(rules, value)| rules.check(value))
        .collect()
}
