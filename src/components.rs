//! Reusable HTML components for the navigation shell
//!
//! Each function renders one piece of shell state as maud markup. The
//! components read state only; transitions live in [`crate::shell`].

pub mod layout;
pub mod modal;
pub mod sidebar;
