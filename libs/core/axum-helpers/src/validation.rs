//! Struct validation on top of the `validator` crate.
//!
//! Validation never mutates its input and holds no state, so it is safe to
//! call from any number of in-flight requests.

use serde_json::{Map, Value, json};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::errors::AppError;

/// Check `value` against its declared constraints.
pub fn validate_struct<T: Validate>(value: &T) -> Result<(), AppError> {
    value.validate().map_err(AppError::from)
}

/// Custom rule for `#[validate(custom(function = "not_blank"))]`: rejects
/// strings that are empty or whitespace only.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Convert validator errors to `{ "<field>": [{code, message, params}] }`.
///
/// Nested struct and list errors are flattened with dotted / indexed keys
/// (`address.city`, `items[2].sku`).
pub fn field_errors(errors: &ValidationErrors) -> Value {
    let mut out = Map::new();
    collect(errors, None, &mut out);
    Value::Object(out)
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Map<String, Value>) {
    for (field, kind) in errors.errors() {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                let entries: Vec<Value> = list
                    .iter()
                    .map(|err| {
                        json!({
                            "code": err.code,
                            "message": err.message,
                            "params": err.params,
                        })
                    })
                    .collect();
                out.insert(key, Value::Array(entries));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&key), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{}[{}]", key, index)), out);
                }
            }
        }
    }
}
