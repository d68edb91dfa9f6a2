//! Flattening of `validator` results into plain messages.

use validator::ValidationErrors;

/// Collect one message per violated field constraint.
///
/// Fields are visited in name order so the first message is stable
/// between runs. Constraints declared without a message fall back to
/// `"<field> is invalid (<code>)"`.
pub fn violation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid ({})", error.code),
            })
        })
        .collect()
}
