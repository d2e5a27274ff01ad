pub mod core;
pub mod identity;
pub mod students;
pub mod subjects;
pub mod teacher;
pub mod users;
