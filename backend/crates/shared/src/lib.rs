//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest vocabulary every other crate agrees on:
//! - Unified error type and result alias
//! - Typed entity IDs
//! - Form field errors and the field validators used by page actions
//!
//! Anything that only one domain cares about belongs in that domain's crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod form;
pub mod id;
pub mod validation;
