//! Command implementations.

pub mod config;
pub mod inspect;
pub mod xref;

pub use self::config::execute_config;
pub use self::inspect::{execute_inspect, inspect_rules};
pub use self::xref::execute_xref;
