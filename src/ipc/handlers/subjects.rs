use serde_json::json;

use crate::ipc::error::{domain_err, err, ok};
use crate::ipc::helpers::{require_object, require_str, store_of, year_class};
use crate::ipc::types::{AppState, Request};
use crate::model::Subject;
use crate::roster;

fn handle_subjects_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let (year, class) = match year_class(&req.params) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };

    match roster::get_subjects(store, &state.defaults, year, class) {
        Ok(subjects) => ok(&req.id, json!({ "subjects": subjects })),
        Err(e) => domain_err(&req.id, &e),
    }
}

fn handle_subjects_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let (year, class) = match year_class(&req.params) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let fields = match require_object(&req.params, "subject") {
        Ok(obj) => obj,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    // `hours` is a non-negative integer; serde enforces it via u32.
    let subject: Subject =
        match serde_json::from_value(serde_json::Value::Object(fields.clone())) {
            Ok(v) => v,
            Err(e) => return err(&req.id, "bad_params", e.to_string(), None),
        };

    match roster::add_subject(store, year, class, &subject) {
        Ok(created) => ok(&req.id, json!({ "subject": created })),
        Err(e) => domain_err(&req.id, &e),
    }
}

fn handle_subjects_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let (year, class) = match year_class(&req.params) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let subject_id = match require_str(&req.params, "subjectId") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let patch = match require_object(&req.params, "patch") {
        Ok(obj) => obj,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };

    match roster::update_subject(store, year, class, subject_id, patch) {
        Ok(()) => ok(&req.id, json!({ "ok": true })),
        Err(e) => domain_err(&req.id, &e),
    }
}

fn handle_subjects_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let (year, class) = match year_class(&req.params) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let subject_id = match require_str(&req.params, "subjectId") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };

    match roster::delete_subject(store, year, class, subject_id) {
        Ok(()) => ok(&req.id, json!({ "ok": true })),
        Err(e) => domain_err(&req.id, &e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "subjects.list" => Some(handle_subjects_list(state, req)),
        "subjects.add" => Some(handle_subjects_add(state, req)),
        "subjects.update" => Some(handle_subjects_update(state, req)),
        "subjects.delete" => Some(handle_subjects_delete(state, req)),
        _ => None,
    }
}
