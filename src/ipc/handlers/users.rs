use serde_json::json;

use crate::ipc::error::{domain_err, err, ok};
use crate::ipc::helpers::{require_str, store_of};
use crate::ipc::types::{AppState, Request};
use crate::model::UserStatus;
use crate::users;

fn handle_users_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };

    match users::list_teacher_users(store) {
        Ok(list) => ok(&req.id, json!({ "users": list })),
        Err(e) => domain_err(&req.id, &e),
    }
}

fn handle_users_update_status(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let user_id = match require_str(&req.params, "userId") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let status = match require_str(&req.params, "status").map(UserStatus::parse) {
        Ok(Some(s)) => s,
        Ok(None) => {
            return err(
                &req.id,
                "bad_params",
                "status must be one of: pending, approved, rejected",
                None,
            )
        }
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };

    match users::update_user_status(store, user_id, status) {
        Ok(()) => ok(&req.id, json!({ "ok": true })),
        Err(e) => domain_err(&req.id, &e),
    }
}

fn handle_users_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let store = match store_of(state) {
        Ok(s) => s,
        Err(msg) => return err(&req.id, "no_workspace", msg, None),
    };
    let user_id = match require_str(&req.params, "userId") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let username = match require_str(&req.params, "username") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };

    match users::delete_user(store, user_id, username) {
        Ok(()) => ok(&req.id, json!({ "ok": true })),
        Err(e) => domain_err(&req.id, &e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "users.listTeachers" => Some(handle_users_list(state, req)),
        "users.updateStatus" => Some(handle_users_update_status(state, req)),
        "users.delete" => Some(handle_users_delete(state, req)),
        _ => None,
    }
}
