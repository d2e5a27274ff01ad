//! Storage-key derivation for the document namespace.
//!
//! Display strings ("2025/2026", "Kelas III") are presentation; the
//! normalized keys are the storage identifiers. Two display strings that
//! normalize to the same key alias the same record, on purpose.

/// "2025/2026" -> "2025-2026". Year labels carry exactly one slash; a
/// label without one passes through unchanged (no-op, not an error).
pub fn year_key(display: &str) -> String {
    display.replacen('/', "-", 1)
}

/// "Kelas III" -> "kelas-iii". Lowercase, then the first space becomes a
/// dash. The transform is mechanical and accepts any label: the key space
/// is open, so a class name outside the known six simply addresses a key
/// with no default subject table behind it.
pub fn class_key(display: &str) -> String {
    display.to_lowercase().replacen(' ', "-", 1)
}

// Path builders for the fixed namespace. These strings are a compatibility
// surface; do not reshape them.

pub fn identity_path() -> String {
    "schoolData/identity".to_string()
}

pub fn teacher_profile_path(year: &str, class: &str) -> String {
    format!(
        "schoolData/{}/{}/teacherProfile",
        year_key(year),
        class_key(class)
    )
}

pub fn subjects_parent(year: &str, class: &str) -> String {
    format!(
        "schoolData/{}/{}/data/subjects",
        year_key(year),
        class_key(class)
    )
}

pub fn subject_path(year: &str, class: &str, subject_id: &str) -> String {
    format!("{}/{}", subjects_parent(year, class), subject_id)
}

pub fn student_list_path(year: &str, class: &str) -> String {
    format!(
        "schoolData/{}/{}/studentList",
        year_key(year),
        class_key(class)
    )
}

pub fn users_parent() -> String {
    "users".to_string()
}

pub fn user_path(user_id: &str) -> String {
    format!("users/{}", user_id)
}

/// Reserved-username docs are keyed by the lowercased username.
pub fn username_path(username: &str) -> String {
    format!("usernames/{}", username.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_key_replaces_single_slash() {
        assert_eq!(year_key("2025/2026"), "2025-2026");
        assert_eq!(year_key("2024/2025"), "2024-2025");
    }

    #[test]
    fn year_key_without_slash_is_passthrough() {
        assert_eq!(year_key("2025-2026"), "2025-2026");
        assert_eq!(year_key(""), "");
    }

    #[test]
    fn year_key_is_idempotent() {
        let once = year_key("2025/2026");
        assert_eq!(year_key(&once), once);
    }

    #[test]
    fn class_key_normalizes_known_labels() {
        assert_eq!(class_key("Kelas I"), "kelas-i");
        assert_eq!(class_key("Kelas II"), "kelas-ii");
        assert_eq!(class_key("Kelas III"), "kelas-iii");
        assert_eq!(class_key("Kelas IV"), "kelas-iv");
        assert_eq!(class_key("Kelas V"), "kelas-v");
        assert_eq!(class_key("Kelas VI"), "kelas-vi");
    }

    #[test]
    fn class_key_is_idempotent() {
        let once = class_key("Kelas VI");
        assert_eq!(class_key(&once), once);
    }

    #[test]
    fn class_key_accepts_unknown_labels_mechanically() {
        assert_eq!(class_key("Kelas Tahfidz Pagi"), "kelas-tahfidz pagi");
    }

    #[test]
    fn paths_follow_the_fixed_namespace() {
        assert_eq!(
            teacher_profile_path("2025/2026", "Kelas III"),
            "schoolData/2025-2026/kelas-iii/teacherProfile"
        );
        assert_eq!(
            subjects_parent("2025/2026", "Kelas III"),
            "schoolData/2025-2026/kelas-iii/data/subjects"
        );
        assert_eq!(
            subject_path("2025/2026", "Kelas III", "abc"),
            "schoolData/2025-2026/kelas-iii/data/subjects/abc"
        );
        assert_eq!(
            student_list_path("2025/2026", "Kelas I"),
            "schoolData/2025-2026/kelas-i/studentList"
        );
        assert_eq!(username_path("BuRina"), "usernames/burina");
    }
}
