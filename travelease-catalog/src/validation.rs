use travelease_core::ValidationErrors;

/// Field-level issues from a failed `validate()`. `fields` pairs struct field
/// names with the JSON paths reported to clients, in reporting order.
pub(crate) fn field_issues(
    errors: &validator::ValidationErrors,
    fields: &[(&str, &str)],
) -> ValidationErrors {
    let by_field = errors.field_errors();
    let mut issues = ValidationErrors::new();

    for (field, path) in fields {
        let Some(failures) = by_field.get(*field) else {
            continue;
        };
        for failure in failures.iter() {
            let message = match &failure.message {
                Some(message) => message.to_string(),
                None => failure.code.to_string(),
            };
            issues.push(*path, message);
        }
    }

    issues
}
