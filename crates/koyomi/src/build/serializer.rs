//! Document serialization.
//!
//! Emits components and properties in stored order; values are written back
//! verbatim (they were never unescaped), so a parse/serialize cycle is
//! structurally lossless.

use super::fold::fold_line;
use crate::core::{Calendar, Component, Property};

/// Serializes a calendar to iCalendar text.
#[must_use]
pub fn serialize(calendar: &Calendar) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    for prop in &calendar.properties {
        push_line(&mut out, &serialize_property(prop));
    }
    for component in &calendar.components {
        serialize_component(&mut out, component);
    }
    push_line(&mut out, "END:VCALENDAR");
    out
}

/// Serializes one component (and its children) into `out`.
pub fn serialize_component(out: &mut String, component: &Component) {
    let name = component.kind.as_str();
    push_line(out, &format!("BEGIN:{name}"));
    for prop in &component.properties {
        push_line(out, &serialize_property(prop));
    }
    for child in &component.children {
        serialize_component(out, child);
    }
    push_line(out, &format!("END:{name}"));
}

/// Serializes one property as an unfolded content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();
    for param in &prop.params {
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        for (i, value) in param.values.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push_str(&quote_param_value(value));
        }
    }
    line.push(':');
    line.push_str(&prop.value);
    line
}

/// Quotes a parameter value when it contains characters that would
/// otherwise terminate it.
fn quote_param_value(value: &str) -> String {
    if value.contains([':', ';', ',']) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(&fold_line(line));
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComponentKind, Parameter};

    #[test]
    fn serialize_property_simple() {
        let prop = Property::new("SUMMARY", "Team Meeting");
        assert_eq!(serialize_property(&prop), "SUMMARY:Team Meeting");
    }

    #[test]
    fn serialize_property_with_params() {
        let prop = Property::with_params(
            "DTSTART",
            vec![Parameter::tzid("America/New_York")],
            "20260123T120000",
        );
        assert_eq!(
            serialize_property(&prop),
            "DTSTART;TZID=America/New_York:20260123T120000"
        );
    }

    #[test]
    fn serialize_property_quotes_param_values() {
        let prop = Property::with_params(
            "ATTENDEE",
            vec![Parameter::new("CN", "Doe, Jane")],
            "mailto:jane@example.com",
        );
        assert_eq!(
            serialize_property(&prop),
            "ATTENDEE;CN=\"Doe, Jane\":mailto:jane@example.com"
        );
    }

    #[test]
    fn serialize_minimal_calendar() {
        let cal = Calendar::new("-//Test//Test//EN");
        let text = serialize(&cal);
        assert_eq!(
            text,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Test//Test//EN\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn serialize_nested_components() {
        let mut cal = Calendar::new("-//Test//Test//EN");
        let mut event = Component::event();
        event.add_property(Property::new("UID", "e@example.com"));
        let mut alarm = Component::alarm();
        alarm.add_property(Property::new("ACTION", "AUDIO"));
        alarm.add_property(Property::new("TRIGGER", "-PT5M"));
        event.add_child(alarm);
        cal.add_component(event);

        let text = serialize(&cal);
        let begin_event = text.find("BEGIN:VEVENT").unwrap();
        let begin_alarm = text.find("BEGIN:VALARM").unwrap();
        let end_alarm = text.find("END:VALARM").unwrap();
        let end_event = text.find("END:VEVENT").unwrap();
        assert!(begin_event < begin_alarm);
        assert!(begin_alarm < end_alarm);
        assert!(end_alarm < end_event);
    }

    #[test]
    fn serialize_timezone_rule_names() {
        let mut out = String::new();
        serialize_component(
            &mut out,
            &Component::new(ComponentKind::TimezoneRule { daylight: true }),
        );
        assert_eq!(out, "BEGIN:DAYLIGHT\r\nEND:DAYLIGHT\r\n");
    }

    #[test]
    fn serialize_folds_long_lines() {
        let mut cal = Calendar::new("-//Test//Test//EN");
        let mut event = Component::event();
        event.add_property(Property::new("DESCRIPTION", "x".repeat(200)));
        cal.add_component(event);

        let text = serialize(&cal);
        for line in text.split("\r\n") {
            assert!(line.len() <= 75, "line too long: {}", line.len());
        }
    }
}
