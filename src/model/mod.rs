//! Domain models.
//!
//! Reddit items and references, reaction configuration, bot settings, action log
//! records and the statistics derived from them.

pub mod mod_action;
pub mod reaction;
pub mod reddit;
pub mod settings;
pub mod stats;
