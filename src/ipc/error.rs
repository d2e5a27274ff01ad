use serde_json::json;

use crate::roster::RosterError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Roster failures keep their fixed localized message; the code tells the
/// front-end whether a retry can possibly help.
pub fn domain_err(id: &str, e: &RosterError) -> serde_json::Value {
    let code = if e.is_not_found() {
        "not_found"
    } else {
        "store_error"
    };
    err(
        id,
        code,
        e.message,
        Some(json!({ "cause": e.source.to_string() })),
    )
}
