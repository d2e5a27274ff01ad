//! Record types for the stored documents. Field names are camelCase on the
//! wire and in storage; keep the renames in sync with the document schema,
//! it is a compatibility surface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolIdentity {
    pub school_name: String,
    pub npsn: String,
    pub nss: String,
    pub address: String,
    pub postal_code: String,
    pub phone: String,
    pub subdistrict: String,
    pub district: String,
    pub city: String,
    pub province: String,
    pub website: String,
    pub email: String,
    pub principal_name: String,
    pub principal_nip: String,
}

/// Teacher biodata as stored; the storage doc does not embed its own id.
/// The API-level record is `TeacherRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfile {
    pub nip: String,
    pub nik: String,
    pub nuptk: String,
    pub full_name: String,
    pub gender: String,
    pub birth_place: String,
    pub birth_date: String,
    pub employment_status: String,
    pub position: String,
    pub last_education: String,
    pub religion: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRecord {
    pub id: String,
    #[serde(flatten)]
    pub profile: TeacherProfile,
}

/// One row of a per-(year, class) subject catalog. `id` is the doc id,
/// assigned by the store; it is stripped before the row is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub id: String,
    pub code: String,
    pub name: String,
    pub hours: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAddress {
    pub street: String,
    pub rt_rw: String,
    pub dusun: String,
    pub desa: String,
    pub kecamatan: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentParents {
    pub ayah: String,
    pub ibu: String,
    pub wali: String,
}

/// Roster row. Unlike subjects, students live inside one array field of a
/// single document, ids included; array position is the printed roster
/// number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub full_name: String,
    pub nickname: String,
    pub gender: String,
    pub nis: String,
    pub nisn: String,
    pub birth_place: String,
    pub birth_date: String,
    pub religion: String,
    pub address: StudentAddress,
    pub parents: StudentParents,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Pending,
    Approved,
    Rejected,
}

impl UserStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub full_name: String,
    pub school_name: String,
    pub class_name: String,
    pub email: String,
    pub username: String,
    pub status: UserStatus,
    pub role: UserRole,
}
