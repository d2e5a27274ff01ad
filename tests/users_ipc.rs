mod test_support;

use serde_json::json;
use test_support::{request_err, request_ok, select_workspace, spawn_sidecar, temp_dir};

// Account creation belongs to the auth collaborator, so over IPC these
// flows start from an empty users collection; the full approve/delete cycle
// is covered by the in-crate unit tests.

#[test]
fn listing_an_empty_workspace_yields_no_users() {
    let workspace = temp_dir("sekolahd-users-empty");
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);

    let result = request_ok(&mut stdin, &mut reader, "1", "users.listTeachers", json!({}));
    assert_eq!(
        result.get("users").and_then(|v| v.as_array()).map(Vec::len),
        Some(0)
    );
}

#[test]
fn status_update_for_unknown_user_is_not_found() {
    let workspace = temp_dir("sekolahd-users-ghost");
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);

    let error = request_err(
        &mut stdin,
        &mut reader,
        "1",
        "users.updateStatus",
        json!({ "userId": "ghost", "status": "approved" }),
    );
    assert_eq!(error.get("code").and_then(|v| v.as_str()), Some("not_found"));
    assert_eq!(
        error.get("message").and_then(|v| v.as_str()),
        Some("Gagal memperbarui status pengguna.")
    );
}

#[test]
fn status_outside_the_enumeration_is_rejected() {
    let workspace = temp_dir("sekolahd-users-badstatus");
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);

    let error = request_err(
        &mut stdin,
        &mut reader,
        "1",
        "users.updateStatus",
        json!({ "userId": "u1", "status": "banned" }),
    );
    assert_eq!(error.get("code").and_then(|v| v.as_str()), Some("bad_params"));
}

#[test]
fn deleting_an_absent_user_succeeds_idempotently() {
    // The paired delete is a batch of idempotent deletes; removing an
    // account that is already gone must not fail the cleanup.
    let workspace = temp_dir("sekolahd-users-absent-delete");
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "users.delete",
        json!({ "userId": "ghost", "username": "Ghost" }),
    );
    assert_eq!(result.get("ok").and_then(|v| v.as_bool()), Some(true));
}
