//! `SeaORM` entities.

pub mod sessions;
pub mod statements;
pub mod users;
