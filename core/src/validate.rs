//! Payload validation for the todo resource.
//!
//! # Design
//! Pure functions from a raw JSON value to a normalized field set or a
//! rejection reason; no side effects. The payload is kept as untyped
//! `serde_json::Value` because the service's field rules are not plain
//! type checks: create and full-replace gate required fields on
//! *truthiness*, so an empty-string `title` or an explicit
//! `completed: false` is rejected the same way as an absent field. That
//! behavior is load-bearing for API compatibility and is pinned by the
//! test vectors under `test-vectors/`.

use serde_json::Value;

use crate::error::TodoError;

/// Fields of a create request after validation and defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Fields of a full-replace request after validation. `description` is
/// `Some` only when the body carried a usable value; `None` means the
/// stored description is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceTodo {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Fields of a partial-update request. `None` means the key was absent
/// from the body; whether a present value takes effect is decided by the
/// handler's truthy merge, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Parse a raw request body into JSON. All write operations share this
/// entry point so an unparsable body is rejected uniformly.
pub fn parse_body(body: &str) -> Result<Value, TodoError> {
    serde_json::from_str(body).map_err(|_| TodoError::MalformedPayload)
}

/// Truthiness as used by the field rules and the merge policy: `null`,
/// `false`, numeric zero and the empty string are falsy; everything else
/// (including arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Create rules: `title` required truthy string, `description` optional
/// string defaulting to `""`, `completed` absent or exactly `false`.
pub fn validate_create(body: &Value) -> Result<NewTodo, TodoError> {
    let title = match body.get("title") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(TodoError::Validation("Title of type string is required.")),
    };
    let description = match body.get("description") {
        Some(Value::String(s)) => s.clone(),
        Some(v) if is_truthy(v) => {
            return Err(TodoError::Validation("Description must be a string"))
        }
        // A falsy non-string normalizes to "no description".
        _ => String::new(),
    };
    match body.get("completed") {
        None | Some(Value::Bool(false)) => {}
        Some(_) => return Err(TodoError::Validation("You cannot insert a completed todo!")),
    }
    Ok(NewTodo {
        title,
        description,
        completed: false,
    })
}

/// Full-replace rules: `title` and `completed` are gated on truthiness
/// before their types are checked, so `completed: false` is rejected
/// identically to an absent `completed`.
pub fn validate_replace(body: &Value) -> Result<ReplaceTodo, TodoError> {
    let title = body.get("title").unwrap_or(&Value::Null);
    let completed = body.get("completed").unwrap_or(&Value::Null);
    if !is_truthy(title) || !is_truthy(completed) {
        return Err(TodoError::Validation(
            "title and completed are required for put",
        ));
    }
    let title = match title {
        Value::String(s) => s.clone(),
        _ => return Err(TodoError::Validation("Title of type string is required.")),
    };
    let description = match body.get("description") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(v) if is_truthy(v) => {
            return Err(TodoError::Validation("Description must be a string"))
        }
        // Absent or falsy: the stored description is retained.
        _ => None,
    };
    let completed = match completed {
        Value::Bool(b) => *b,
        _ => return Err(TodoError::Validation("You cannot insert a completed todo!")),
    };
    Ok(ReplaceTodo {
        title,
        description,
        completed,
    })
}

/// Partial-update rules: every field optional, but a present field must be
/// well-typed. Falsy well-typed values (`""`, `false`) pass validation and
/// are later ignored by the handler's truthy merge.
pub fn validate_patch(body: &Value) -> Result<PatchTodo, TodoError> {
    let title = match body.get("title") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(TodoError::Validation("Title must be string..")),
    };
    let description = match body.get("description") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(TodoError::Validation("Description must be a string")),
    };
    let completed = match body.get("completed") {
        None => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => return Err(TodoError::Validation("Completed must be a boolean!")),
    };
    Ok(PatchTodo {
        title,
        description,
        completed,
    })
}
