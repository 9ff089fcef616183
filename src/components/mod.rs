//! Reusable UI components.

pub mod sidebar;
