//! Structural validation for parsed calendars.
//!
//! Checks required-property and required-sub-component rules per component
//! kind. Validation is fail-fast, depth-first, in document order: the first
//! violated rule aborts with a descriptive error. Property values are only
//! inspected for the literal checks below (VERSION, ACTION); everything
//! else is presence and shape.

use crate::core::{Calendar, Component, ComponentKind};
use crate::error::ValidationError;

/// Validates a calendar tree for structural compliance.
///
/// Calendar-level checks first (VERSION literal "2.0", non-empty PRODID),
/// then every child component recursively.
///
/// ## Errors
///
/// Returns the first violated rule, identifying the missing property or
/// structural defect.
#[tracing::instrument(skip(calendar), fields(components = calendar.components.len()))]
pub fn validate(calendar: &Calendar) -> Result<(), ValidationError> {
    match calendar.version() {
        None => {
            return Err(ValidationError::MissingProperty {
                component: "VCALENDAR",
                property: "VERSION",
            });
        }
        Some("2.0") => {}
        Some(found) => {
            return Err(ValidationError::UnsupportedVersion {
                found: found.to_string(),
            });
        }
    }

    match calendar.prodid() {
        None => {
            return Err(ValidationError::MissingProperty {
                component: "VCALENDAR",
                property: "PRODID",
            });
        }
        Some("") => return Err(ValidationError::EmptyProdId),
        Some(_) => {}
    }

    for component in &calendar.components {
        validate_component(component)?;
    }

    Ok(())
}

/// Validates one component and recurses into its children where the
/// grammar allows them.
fn validate_component(component: &Component) -> Result<(), ValidationError> {
    match component.kind {
        ComponentKind::Event | ComponentKind::Todo => {
            require_identity(component)?;
            validate_children(component)
        }
        // Journals carry no sub-components; nothing to recurse into.
        ComponentKind::Journal => require_identity(component),
        ComponentKind::Alarm => {
            validate_alarm(component)?;
            validate_children(component)
        }
        ComponentKind::Timezone => {
            validate_timezone(component)?;
            validate_children(component)
        }
        ComponentKind::TimezoneRule { .. } => Ok(()),
    }
}

fn validate_children(component: &Component) -> Result<(), ValidationError> {
    for child in &component.children {
        validate_component(child)?;
    }
    Ok(())
}

/// UID (non-empty) and DTSTAMP, required on every schedulable component.
fn require_identity(component: &Component) -> Result<(), ValidationError> {
    let kind = component.kind.as_str();
    if component.uid().is_none_or(str::is_empty) {
        return Err(missing(kind, "UID"));
    }
    if component.dtstamp().is_none() {
        return Err(missing(kind, "DTSTAMP"));
    }
    Ok(())
}

fn validate_alarm(alarm: &Component) -> Result<(), ValidationError> {
    let Some(action) = alarm.action() else {
        return Err(missing("VALARM", "ACTION"));
    };
    if alarm.trigger().is_none() {
        return Err(missing("VALARM", "TRIGGER"));
    }

    // Action-dependent requirements (RFC 5545 §3.6.6). AUDIO and
    // unrecognized actions need nothing beyond ACTION and TRIGGER.
    if action.eq_ignore_ascii_case("DISPLAY") {
        if alarm.description().is_none() {
            return Err(missing("VALARM", "DESCRIPTION"));
        }
    } else if action.eq_ignore_ascii_case("EMAIL") {
        if alarm.description().is_none() {
            return Err(missing("VALARM", "DESCRIPTION"));
        }
        if alarm.summary().is_none() {
            return Err(missing("VALARM", "SUMMARY"));
        }
        if alarm.get_properties("ATTENDEE").is_empty() {
            return Err(missing("VALARM", "ATTENDEE"));
        }
    } else if action.eq_ignore_ascii_case("PROCEDURE")
        && alarm.get_property("ATTACH").is_none()
    {
        return Err(missing("VALARM", "ATTACH"));
    }

    Ok(())
}

fn validate_timezone(timezone: &Component) -> Result<(), ValidationError> {
    if timezone.tzid().is_none() {
        return Err(missing("VTIMEZONE", "TZID"));
    }
    if timezone.timezone_rules().is_empty() {
        return Err(ValidationError::MissingTimezoneRule {
            tzid: timezone.tzid().unwrap_or_default().to_string(),
        });
    }
    Ok(())
}

const fn missing(component: &'static str, property: &'static str) -> ValidationError {
    ValidationError::MissingProperty {
        component,
        property,
    }
}
