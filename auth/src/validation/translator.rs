use super::rules::FieldViolation;

/// Translate validation failures into human-readable messages.
///
/// One sentence per violation, in the order given. Violations with an
/// unrecognized rule tag produce no message.
pub fn translate(violations: &[FieldViolation]) -> Vec<String> {
    violations.iter().filter_map(message).collect()
}

fn message(violation: &FieldViolation) -> Option<String> {
    let field = &violation.field;
    let param = violation.param.as_deref().unwrap_or_default();

    let message = match violation.rule.as_str() {
        "required" => format!("{field} is a required field"),
        "alpha" => format!("{field} can only contain non numeric strings"),
        "min" => format!("{field} requires a min length of {param}"),
        "max" => format!("{field} exceeds the maximum length of {param}"),
        "email" => format!("{field} is not a valid email address"),
        "strong" => format!("{field} is not strong enough"),
        _ => return None,
    };

    Some(message)
}
