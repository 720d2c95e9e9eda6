//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod activity_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use user_repo::UserRepo;
