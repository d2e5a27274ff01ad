use serde_json::json;

use crate::ipc::error::{domain_err, err, ok};
use crate::ipc::helpers::{store_of, year_class};
use crate::ipc::types::{AppState, Request};
use crate::model::Student;
use crate::roster;

fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let (year, class) = match year_class(&req.params) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };

    match roster::get_students(store, &state.defaults, year, class) {
        Ok(students) => ok(&req.id, json!({ "students": students })),
        Err(e) => domain_err(&req.id, &e),
    }
}

fn handle_students_save(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let (year, class) = match year_class(&req.params) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let Some(list) = req.params.get("students").filter(|v| v.is_array()) else {
        return err(&req.id, "bad_params", "missing students array", None);
    };
    let students: Vec<Student> = match serde_json::from_value(list.clone()) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "bad_params", e.to_string(), None),
    };

    match roster::update_students(store, year, class, &students) {
        Ok(()) => ok(&req.id, json!({ "ok": true, "count": students.len() })),
        Err(e) => domain_err(&req.id, &e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_students_list(state, req)),
        "students.save" => Some(handle_students_save(state, req)),
        _ => None,
    }
}
