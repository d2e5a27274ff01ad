//! Teacher-account approval surface. Registration and authentication live
//! in an external collaborator; this side only lists teacher accounts,
//! flips their status, and removes an account together with its reserved
//! username.

use serde_json::{json, Value};

use crate::keys;
use crate::model::{User, UserStatus};
use crate::roster::RosterError;
use crate::store::{BatchOp, Store, StoreError};

const MSG_LIST_USERS: &str = "Gagal mengambil data pengguna.";
const MSG_UPDATE_STATUS: &str = "Gagal memperbarui status pengguna.";
const MSG_DELETE_USER: &str = "Gagal menghapus pengguna dari database.";

fn wrap(message: &'static str, source: StoreError) -> RosterError {
    RosterError { message, source }
}

/// All accounts with the teacher role, in storage order. Pending/approved
/// filtering is the caller's concern.
pub fn list_teacher_users(store: &Store) -> Result<Vec<User>, RosterError> {
    let docs = store
        .read_collection(&keys::users_parent())
        .map_err(|e| wrap(MSG_LIST_USERS, e))?;

    let mut users = Vec::new();
    for doc in docs {
        if doc.data.get("role").and_then(Value::as_str) != Some("teacher") {
            continue;
        }
        let mut user: User = serde_json::from_value(doc.data)
            .map_err(StoreError::from)
            .map_err(|e| wrap(MSG_LIST_USERS, e))?;
        user.id = doc.id;
        users.push(user);
    }
    Ok(users)
}

pub fn update_user_status(
    store: &Store,
    user_id: &str,
    status: UserStatus,
) -> Result<(), RosterError> {
    store
        .update_doc(
            &keys::user_path(user_id),
            &json!({ "status": status.as_str() }),
        )
        .map_err(|e| wrap(MSG_UPDATE_STATUS, e))
}

/// Remove the account and release its reserved username in one batch:
/// both go, or neither does.
pub fn delete_user(store: &Store, user_id: &str, username: &str) -> Result<(), RosterError> {
    let ops = vec![
        BatchOp::Delete {
            path: keys::user_path(user_id),
        },
        BatchOp::Delete {
            path: keys::username_path(username),
        },
    ];
    store.batch(&ops).map_err(|e| wrap(MSG_DELETE_USER, e))
}
