//! Seed content served when a keyed record is read and found absent.
//!
//! Constructed once at startup and carried in `AppState` instead of living
//! as ambient module state. All values mirror the deployed admin panel's
//! canonical defaults (Kurikulum Merdeka base tables plus local content
//! subjects).

use std::collections::HashMap;

use crate::model::{SchoolIdentity, Student, Subject, TeacherProfile};

/// Placeholder roster length for a never-saved class.
pub const PLACEHOLDER_ROSTER_LEN: usize = 25;

pub struct Defaults {
    school_identity: SchoolIdentity,
    teacher_profile: TeacherProfile,
    subjects_by_class: HashMap<&'static str, Vec<Subject>>,
}

impl Defaults {
    pub fn baseline() -> Self {
        Defaults {
            school_identity: default_school_identity(),
            teacher_profile: default_teacher_profile(),
            subjects_by_class: default_subject_tables(),
        }
    }

    /// Form template for the school identity. Never auto-persisted: a
    /// never-created identity still reads back as null.
    pub fn school_identity(&self) -> &SchoolIdentity {
        &self.school_identity
    }

    /// Base teacher biodata; `position` is interpolated per class by the
    /// roster service before the seed is written.
    pub fn teacher_profile(&self) -> &TeacherProfile {
        &self.teacher_profile
    }

    /// Default curriculum table for a normalized class key, if it is one of
    /// the six known keys. Unknown keys get no table and no seeding.
    pub fn class_subjects(&self, class_key: &str) -> Option<&[Subject]> {
        self.subjects_by_class.get(class_key).map(|v| v.as_slice())
    }

    /// 25 empty roster rows with synthetic ids, freshly generated per call.
    /// Deliberately not drawn from a table and never persisted here.
    pub fn placeholder_students(&self) -> Vec<Student> {
        (0..PLACEHOLDER_ROSTER_LEN)
            .map(|i| Student {
                id: format!("default-{i}"),
                ..Student::default()
            })
            .collect()
    }
}

fn default_school_identity() -> SchoolIdentity {
    SchoolIdentity {
        school_name: "SDN 01 Contoh".into(),
        npsn: "12345678".into(),
        nss: "101234567890".into(),
        address: "Jl. Pendidikan No. 1".into(),
        postal_code: "12345".into(),
        phone: "021-1234567".into(),
        subdistrict: "Kelurahan Cerdas".into(),
        district: "Kecamatan Pintar".into(),
        city: "Kota Pelajar".into(),
        province: "Provinsi Pengetahuan".into(),
        website: "www.sdn01contoh.sch.id".into(),
        email: "info@sdn01contoh.sch.id".into(),
        principal_name: "Dr. Budi Santoso, M.Pd.".into(),
        principal_nip: "197001011995031001".into(),
    }
}

fn default_teacher_profile() -> TeacherProfile {
    TeacherProfile {
        full_name: "Rina Setyawati, S.Pd.".into(),
        nip: "198805212014032001".into(),
        nik: "3301012345678901".into(),
        nuptk: "1234567890123456".into(),
        gender: "Perempuan".into(),
        birth_place: "Semarang".into(),
        birth_date: "1988-05-21".into(),
        employment_status: "PNS".into(),
        position: "Guru Kelas".into(),
        last_education: "S1 PGSD Universitas Terbuka".into(),
        religion: "Islam".into(),
        address: "Jl. Merdeka No. 45, Kelurahan Cerdas, Kecamatan Pintar".into(),
        phone: "081234567890".into(),
        email: "rina.setyawati@email.com".into(),
    }
}

fn subject(code: &str, name: &str, hours: u32) -> Subject {
    Subject {
        id: String::new(),
        code: code.into(),
        name: name.into(),
        hours,
    }
}

fn default_subject_tables() -> HashMap<&'static str, Vec<Subject>> {
    let mut tables = HashMap::new();
    tables.insert(
        "kelas-i",
        vec![
            subject("PAIBP", "Pendidikan Agama Islam Dan Budi Pekerti", 4),
            subject("PP", "Pendidikan Pancasila", 5),
            subject("BIND", "Bahasa Indonesia", 8),
            subject("MTK", "Matematika", 5),
            subject("PJOK", "Pendidikan Jasmani, Olahraga, Dan Kesehatan", 4),
            subject("SR", "Seni Rupa", 4),
            subject("BJW", "Bahasa Jawa", 2),
            subject("PLH", "Pendidikan Lingkungan Hidup", 2),
            subject("BING", "Bahasa Inggris (Opsional)", 2),
        ],
    );
    tables.insert(
        "kelas-ii",
        vec![
            subject("PAIBP", "Pendidikan Agama Islam Dan Budi Pekerti", 4),
            subject("PP", "Pendidikan Pancasila", 5),
            subject("BIND", "Bahasa Indonesia", 9),
            subject("MTK", "Matematika", 6),
            subject("PJOK", "Pendidikan Jasmani, Olahraga, Dan Kesehatan", 4),
            subject("SR", "Seni Rupa", 4),
            subject("BJW", "Bahasa Jawa", 2),
            subject("BING", "Bahasa Inggris (Opsional)", 2),
        ],
    );
    tables.insert(
        "kelas-iii",
        vec![
            subject("PAIBP", "Pendidikan Agama Islam Dan Budi Pekerti", 4),
            subject("PP", "Pendidikan Pancasila", 5),
            subject("BIND", "Bahasa Indonesia", 7),
            subject("MTK", "Matematika", 6),
            subject("IPAS", "Ilmu Pengetahuan Alam Dan Sosial", 6),
            subject("PJOK", "Pendidikan Jasmani, Olahraga, Dan Kesehatan", 4),
            subject("SR", "Seni Rupa", 4),
            subject("BING", "Bahasa Inggris", 2),
            subject("BJW", "Bahasa Jawa", 2),
            subject("PLH", "Pendidikan Lingkungan Hidup", 2),
        ],
    );
    tables.insert(
        "kelas-iv",
        vec![
            subject("PAIBP", "Pendidikan Agama Islam Dan Budi Pekerti", 4),
            subject("PP", "Pendidikan Pancasila", 5),
            subject("BIND", "Bahasa Indonesia", 7),
            subject("MTK", "Matematika", 6),
            subject("IPAS", "Ilmu Pengetahuan Alam Dan Sosial", 6),
            subject("PJOK", "Pendidikan Jasmani, Olahraga, Dan Kesehatan", 4),
            subject("SR", "Seni Rupa", 4),
            subject("BING", "Bahasa Inggris", 2),
            subject("BJW", "Bahasa Jawa", 2),
            subject("PLH", "Pendidikan Lingkungan Hidup", 2),
        ],
    );
    tables.insert(
        "kelas-v",
        vec![
            subject("PAIBP", "Pendidikan Agama Islam Dan Budi Pekerti", 4),
            subject("PP", "Pendidikan Pancasila", 5),
            subject("BIND", "Bahasa Indonesia", 7),
            subject("MTK", "Matematika", 6),
            subject("IPAS", "Ilmu Pengetahuan Alam Dan Sosial", 6),
            subject("PJOK", "Pendidikan Jasmani, Olahraga, Dan Kesehatan", 4),
            subject("SR", "Seni Rupa", 4),
            subject("BING", "Bahasa Inggris", 2),
            subject("BJW", "Bahasa Jawa", 2),
            subject("PLH", "Pendidikan Lingkungan Hidup", 2),
            subject("KKA", "Koding Dan Kecerdasan Artificial", 2),
        ],
    );
    tables.insert(
        "kelas-vi",
        vec![
            subject("PAIBP", "Pendidikan Agama Islam Dan Budi Pekerti", 4),
            subject("PP", "Pendidikan Pancasila", 5),
            subject("BIND", "Bahasa Indonesia", 7),
            subject("MTK", "Matematika", 6),
            subject("IPAS", "Ilmu Pengetahuan Alam Dan Sosial", 6),
            subject("PJOK", "Pendidikan Jasmani, Olahraga, Dan Kesehatan", 4),
            subject("SR", "Seni Rupa", 4),
            subject("BING", "Bahasa Inggris", 2),
            subject("BJW", "Bahasa Jawa", 2),
            subject("PLH", "Pendidikan Lingkungan Hidup", 2),
            subject("KKA", "Koding Dan Kecerdasan Artificial", 2),
        ],
    );
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_exist_for_all_six_class_keys() {
        let defaults = Defaults::baseline();
        for key in ["kelas-i", "kelas-ii", "kelas-iii", "kelas-iv", "kelas-v", "kelas-vi"] {
            assert!(defaults.class_subjects(key).is_some(), "missing {key}");
        }
        assert!(defaults.class_subjects("kelas-vii").is_none());
    }

    #[test]
    fn kelas_iii_table_is_ten_rows_totalling_42_hours() {
        let defaults = Defaults::baseline();
        let rows = defaults.class_subjects("kelas-iii").unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows.iter().map(|s| s.hours).sum::<u32>(), 42);
        assert!(rows.iter().any(|s| s.code == "IPAS"));
    }

    #[test]
    fn upper_grades_include_coding_subject() {
        let defaults = Defaults::baseline();
        for key in ["kelas-v", "kelas-vi"] {
            let rows = defaults.class_subjects(key).unwrap();
            assert!(rows.iter().any(|s| s.code == "KKA"), "{key} missing KKA");
        }
        let lower = defaults.class_subjects("kelas-i").unwrap();
        assert!(!lower.iter().any(|s| s.code == "KKA"));
    }

    #[test]
    fn placeholder_roster_is_25_empty_rows_with_synthetic_ids() {
        let defaults = Defaults::baseline();
        let rows = defaults.placeholder_students();
        assert_eq!(rows.len(), PLACEHOLDER_ROSTER_LEN);
        assert_eq!(rows[0].id, "default-0");
        assert_eq!(rows[24].id, "default-24");
        for row in &rows {
            assert!(row.full_name.is_empty());
            assert!(row.address.street.is_empty());
            assert!(row.parents.ayah.is_empty());
        }
    }

    #[test]
    fn base_profile_uses_generic_position() {
        let defaults = Defaults::baseline();
        assert_eq!(defaults.teacher_profile().position, "Guru Kelas");
        assert_eq!(defaults.school_identity().school_name, "SDN 01 Contoh");
    }
}
