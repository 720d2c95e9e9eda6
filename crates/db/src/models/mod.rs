//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct whose fields are exactly the
//!   columns exposed over the API
//! - A `Deserialize` DTO for inserts; PUT overwrites every column, so the
//!   same DTO is used for updates

pub mod activity;
pub mod user;
