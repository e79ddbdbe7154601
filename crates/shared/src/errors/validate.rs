use validator::{ValidationError, ValidationErrors};

/// Codes that mean "the field was not filled in". They outrank every other rule.
const PRESENCE_CODES: [&str; 2] = ["required", "blank"];

/// Fixed field ranking used to pick the single message reported to clients.
pub trait ValidationOrder {
    fn field_order() -> &'static [&'static str];
}

/// Picks the one violation to surface: missing/blank fields first, then format
/// and length rules, each tier walked in `order`.
pub fn first_validation_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    let mut ranked: Vec<(usize, usize, String)> = Vec::new();

    for (field, errs) in &field_errors {
        let position = order
            .iter()
            .position(|name| normalize(name) == normalize(field))
            .unwrap_or(order.len());

        for err in errs.iter() {
            let code: &str = &err.code;
            let tier = if PRESENCE_CODES.contains(&code) {
                0
            } else {
                1
            };
            ranked.push((tier, position, message_of(err)));
        }
    }

    ranked
        .into_iter()
        .min_by_key(|(tier, position, _)| (*tier, *position))
        .map(|(_, _, message)| message)
        .unwrap_or_else(|| "Validation failed".to_string())
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn message_of(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match err.code.as_ref() {
            "length" => "invalid length".to_string(),
            "range" => "value out of range".to_string(),
            "required" => "required".to_string(),
            "custom" => "custom validation failed".to_string(),
            _ => "invalid value".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn error(code: &'static str, message: &'static str) -> ValidationError {
        ValidationError::new(code).with_message(Cow::Borrowed(message))
    }

    #[test]
    fn presence_outranks_length_regardless_of_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add("qdt_parcelas", error("length", "too long"));
        errors.add("juros", error("required", "juros blank"));

        let msg = first_validation_message(&errors, &["cnpj", "valor", "qdtParcelas", "juros"]);

        assert_eq!(msg, "juros blank");
    }

    #[test]
    fn same_tier_follows_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add("juros", error("length", "juros long"));
        errors.add("valor", error("length", "valor long"));

        let msg = first_validation_message(&errors, &["cnpj", "valor", "qdtParcelas", "juros"]);

        assert_eq!(msg, "valor long");
    }

    #[test]
    fn empty_errors_fall_back_to_generic_text() {
        let errors = ValidationErrors::new();

        assert_eq!(first_validation_message(&errors, &[]), "Validation failed");
    }
}
