//! Roster service: the domain operations behind the admin forms.
//!
//! Owns the read-seed-write sequencing over the document store. Seeding is
//! asymmetric and must stay that way: teacher profiles and subject catalogs
//! are persisted the first time they are read (durable, exactly-once via
//! the store's transactional seed primitives), while student rosters get
//! ephemeral placeholder rows that only an explicit save commits.

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::defaults::Defaults;
use crate::keys;
use crate::model::{SchoolIdentity, Student, Subject, TeacherRecord};
use crate::store::{Store, StoreError, WriteMode};

// Fixed user-facing messages, one per operation. Callers display these
// verbatim and keep their edit buffers so the user can retry the save.
const MSG_GET_IDENTITY: &str = "Gagal mengambil data identitas sekolah.";
const MSG_UPDATE_IDENTITY: &str = "Gagal memperbarui identitas sekolah.";
const MSG_GET_TEACHER: &str = "Gagal mengambil data profil guru.";
const MSG_UPDATE_TEACHER: &str = "Gagal memperbarui profil guru.";
const MSG_GET_SUBJECTS: &str = "Gagal mengambil data mata pelajaran.";
const MSG_ADD_SUBJECT: &str = "Gagal menambahkan mata pelajaran.";
const MSG_UPDATE_SUBJECT: &str = "Gagal memperbarui mata pelajaran.";
const MSG_DELETE_SUBJECT: &str = "Gagal menghapus mata pelajaran.";
const MSG_GET_STUDENTS: &str = "Gagal mengambil data siswa.";
const MSG_SAVE_STUDENTS: &str = "Gagal menyimpan data siswa.";

/// A store failure re-signalled at the domain level: a fixed localized
/// message for the UI, the source error for the IPC code mapping.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RosterError {
    pub message: &'static str,
    #[source]
    pub source: StoreError,
}

impl RosterError {
    fn wrap(message: &'static str) -> impl Fn(StoreError) -> RosterError {
        move |source| RosterError { message, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.source, StoreError::NotFound(_))
    }
}

type Result<T> = std::result::Result<T, RosterError>;

// --- School identity (global singleton, no year/class key) ---

pub fn get_school_identity(store: &Store) -> Result<Option<SchoolIdentity>> {
    let wrap = RosterError::wrap(MSG_GET_IDENTITY);
    match store.read_doc(&keys::identity_path()).map_err(&wrap)? {
        Some(value) => {
            let identity = serde_json::from_value(value)
                .map_err(StoreError::from)
                .map_err(&wrap)?;
            Ok(Some(identity))
        }
        None => Ok(None),
    }
}

pub fn update_school_identity(store: &Store, data: &SchoolIdentity) -> Result<()> {
    let wrap = RosterError::wrap(MSG_UPDATE_IDENTITY);
    let value = serde_json::to_value(data)
        .map_err(StoreError::from)
        .map_err(&wrap)?;
    store
        .write_doc(&keys::identity_path(), &value, WriteMode::Merge)
        .map_err(&wrap)
}

// --- Teacher biodata (one profile per year+class key) ---

pub fn get_teacher_profile(
    store: &Store,
    defaults: &Defaults,
    year: &str,
    class: &str,
) -> Result<TeacherRecord> {
    let wrap = RosterError::wrap(MSG_GET_TEACHER);
    let path = keys::teacher_profile_path(year, class);

    let mut seed = defaults.teacher_profile().clone();
    // The seed references the class by its display label, not its key.
    seed.position = format!("Guru {class}");
    let seed_value = serde_json::to_value(&seed)
        .map_err(StoreError::from)
        .map_err(&wrap)?;

    let stored = store
        .create_if_absent(&path, move || seed_value)
        .map_err(&wrap)?;
    let profile = serde_json::from_value(stored)
        .map_err(StoreError::from)
        .map_err(&wrap)?;
    Ok(TeacherRecord {
        id: "teacherProfile".to_string(),
        profile,
    })
}

/// Merge-write of a partial (or full) profile; the record id never lives
/// inside the document.
pub fn update_teacher_profile(
    store: &Store,
    year: &str,
    class: &str,
    patch: &Map<String, Value>,
) -> Result<()> {
    let wrap = RosterError::wrap(MSG_UPDATE_TEACHER);
    let mut patch = patch.clone();
    patch.remove("id");
    store
        .write_doc(
            &keys::teacher_profile_path(year, class),
            &Value::Object(patch),
            WriteMode::Merge,
        )
        .map_err(&wrap)
}

// --- Subject catalog (one doc per row, bulk-seeded from the class table) ---

pub fn get_subjects(
    store: &Store,
    defaults: &Defaults,
    year: &str,
    class: &str,
) -> Result<Vec<Subject>> {
    let wrap = RosterError::wrap(MSG_GET_SUBJECTS);
    let parent = keys::subjects_parent(year, class);

    let mut docs = store.read_collection(&parent).map_err(&wrap)?;
    if docs.is_empty() {
        if let Some(table) = defaults.class_subjects(&keys::class_key(class)) {
            let rows = table
                .iter()
                .map(subject_doc)
                .collect::<std::result::Result<Vec<_>, StoreError>>()
                .map_err(&wrap)?;
            store
                .seed_collection_if_empty(&parent, &rows)
                .map_err(&wrap)?;
            docs = store.read_collection(&parent).map_err(&wrap)?;
        }
    }

    docs.into_iter()
        .map(|doc| {
            let mut subject: Subject = serde_json::from_value(doc.data)
                .map_err(StoreError::from)
                .map_err(&wrap)?;
            subject.id = doc.id;
            Ok(subject)
        })
        .collect()
}

pub fn add_subject(store: &Store, year: &str, class: &str, subject: &Subject) -> Result<Subject> {
    let wrap = RosterError::wrap(MSG_ADD_SUBJECT);
    let parent = keys::subjects_parent(year, class);
    let doc = subject_doc(subject).map_err(&wrap)?;
    let id = store.add_doc(&parent, &doc).map_err(&wrap)?;
    Ok(Subject {
        id,
        ..subject.clone()
    })
}

pub fn update_subject(
    store: &Store,
    year: &str,
    class: &str,
    subject_id: &str,
    patch: &Map<String, Value>,
) -> Result<()> {
    let wrap = RosterError::wrap(MSG_UPDATE_SUBJECT);
    let mut patch = patch.clone();
    patch.remove("id");
    store
        .update_doc(
            &keys::subject_path(year, class, subject_id),
            &Value::Object(patch),
        )
        .map_err(&wrap)
}

/// Removing an already-removed row is a NotFound at this level even though
/// the gateway delete is idempotent.
pub fn delete_subject(store: &Store, year: &str, class: &str, subject_id: &str) -> Result<()> {
    let wrap = RosterError::wrap(MSG_DELETE_SUBJECT);
    let path = keys::subject_path(year, class, subject_id);
    let deleted = store.delete_doc(&path).map_err(&wrap)?;
    if !deleted {
        return Err(wrap(StoreError::NotFound(path)));
    }
    Ok(())
}

/// Serialize a subject row for storage, id stripped: the doc id is the
/// store's business.
fn subject_doc(subject: &Subject) -> std::result::Result<Value, StoreError> {
    let mut value = serde_json::to_value(subject)?;
    if let Some(obj) = value.as_object_mut() {
        obj.remove("id");
    }
    Ok(value)
}

// --- Student roster (one array document per year+class key) ---

pub fn get_students(
    store: &Store,
    defaults: &Defaults,
    year: &str,
    class: &str,
) -> Result<Vec<Student>> {
    let wrap = RosterError::wrap(MSG_GET_STUDENTS);
    let doc = store
        .read_doc(&keys::student_list_path(year, class))
        .map_err(&wrap)?;

    let list = doc
        .and_then(|mut v| v.get_mut("students").map(Value::take))
        .filter(Value::is_array);
    match list {
        Some(list) => serde_json::from_value(list)
            .map_err(StoreError::from)
            .map_err(&wrap),
        // Never saved: hand out fresh placeholder rows without persisting
        // them. Only an explicit save makes a roster durable.
        None => Ok(defaults.placeholder_students()),
    }
}

/// Replace the entire stored roster in one write. All row edits are merged
/// by the caller beforehand; array order is the printed roster numbering.
pub fn update_students(
    store: &Store,
    year: &str,
    class: &str,
    students: &[Student],
) -> Result<()> {
    let wrap = RosterError::wrap(MSG_SAVE_STUDENTS);
    let value = serde_json::to_value(students)
        .map_err(StoreError::from)
        .map_err(&wrap)?;
    store
        .write_doc(
            &keys::student_list_path(year, class),
            &json!({ "students": value }),
            WriteMode::Replace,
        )
        .map_err(&wrap)
}
