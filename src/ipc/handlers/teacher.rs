use serde_json::json;

use crate::ipc::error::{domain_err, err, ok};
use crate::ipc::helpers::{require_object, store_of, year_class};
use crate::ipc::types::{AppState, Request};
use crate::roster;

fn handle_profile_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let (year, class) = match year_class(&req.params) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };

    match roster::get_teacher_profile(store, &state.defaults, year, class) {
        Ok(record) => ok(&req.id, json!({ "profile": record })),
        Err(e) => domain_err(&req.id, &e),
    }
}

fn handle_profile_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let (year, class) = match year_class(&req.params) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let patch = match require_object(&req.params, "profile") {
        Ok(obj) => obj,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };

    match roster::update_teacher_profile(store, year, class, patch) {
        Ok(()) => ok(&req.id, json!({ "ok": true })),
        Err(e) => domain_err(&req.id, &e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "teacherProfile.get" => Some(handle_profile_get(state, req)),
        "teacherProfile.update" => Some(handle_profile_update(state, req)),
        _ => None,
    }
}
