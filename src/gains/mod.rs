//! Normalization of raw gained payloads into typed records.
//!
//! The API response shape is treated as untrusted. Every lookup goes
//! through the nested-path accessor and degrades to a default when a key
//! is missing or a value has the wrong type, so one malformed player
//! document can never take down a batch.

mod build;
mod classify;
mod extract;
mod path;

pub use build::build_player;
pub use classify::is_active;
pub use extract::{
    activity_gains, boss_gains, experience_gains, extract_category, extract_efficiency,
};
pub use path::{nested, nested_f64};
