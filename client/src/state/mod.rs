//! Client-side state models.
//!
//! DESIGN
//! ======
//! State types are plain structs wrapped in `RwSignal` by the pages that own
//! them, so every transition is unit-testable without a reactive runtime.

pub mod auth;
pub mod detail;
pub mod page_size;
pub mod records;
pub mod search;
pub mod ui;
