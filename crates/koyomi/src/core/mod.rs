//! Core iCalendar models (RFC 5545).
//!
//! These types represent parsed iCalendar content structurally:
//! - Round-trip fidelity: properties keep their raw values and order
//! - A closed component registry: unrecognized names are rejected at parse
//!   time rather than carried as opaque components
//! - Type safety: the calendar container cannot appear as a child

mod component;
mod parameter;
mod property;

pub use component::{Calendar, Component, ComponentKind};
pub use parameter::Parameter;
pub use property::Property;
