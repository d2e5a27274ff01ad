use serde_json::json;

use crate::ipc::error::{domain_err, err, ok};
use crate::ipc::helpers::{require_object, store_of};
use crate::ipc::types::{AppState, Request};
use crate::model::SchoolIdentity;
use crate::roster;

fn handle_identity_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };

    match roster::get_school_identity(store) {
        // The template is the blank-form seed; a never-created identity
        // still reads as null.
        Ok(identity) => ok(
            &req.id,
            json!({
                "identity": identity,
                "template": state.defaults.school_identity()
            }),
        ),
        Err(e) => domain_err(&req.id, &e),
    }
}

fn handle_identity_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };

    let identity = match require_object(&req.params, "identity") {
        Ok(obj) => obj,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let identity: SchoolIdentity =
        match serde_json::from_value(serde_json::Value::Object(identity.clone())) {
            Ok(v) => v,
            Err(e) => return err(&req.id, "bad_params", e.to_string(), None),
        };

    match roster::update_school_identity(store, &identity) {
        Ok(()) => ok(&req.id, json!({ "ok": true })),
        Err(e) => domain_err(&req.id, &e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "identity.get" => Some(handle_identity_get(state, req)),
        "identity.update" => Some(handle_identity_update(state, req)),
        _ => None,
    }
}
