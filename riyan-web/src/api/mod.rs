//! JSON endpoints: health, build info and database diagnostics

pub mod buildinfo;
pub mod diagnostics;
pub mod health;

pub use buildinfo::get_build_info;
pub use health::health_routes;
