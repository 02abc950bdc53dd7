//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list chrome and dialogs. Pages own the state signals and
//! pass values and callbacks down.

pub mod avatar;
pub mod loader;
pub mod page_size_selector;
pub mod record_detail;
pub mod record_table;
pub mod search_input;
pub mod shell;
