//! Property parameter types (RFC 5545 §3.2).

/// A property parameter.
///
/// Parameters can have multiple values (e.g., ROLE=REQ-PARTICIPANT,CHAIR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values in order of appearance.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn with_values(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Creates a TZID parameter.
    #[must_use]
    pub fn tzid(value: impl Into<String>) -> Self {
        Self::new("TZID", value)
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::new("VALUE", type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_single_value() {
        let param = Parameter::new("tzid", "Europe/Paris");
        assert_eq!(param.name, "TZID");
        assert_eq!(param.value(), Some("Europe/Paris"));
    }

    #[test]
    fn parameter_has_value() {
        let param =
            Parameter::with_values("ROLE", vec!["REQ-PARTICIPANT".into(), "CHAIR".into()]);
        assert!(param.has_value("chair"));
        assert!(param.has_value("REQ-PARTICIPANT"));
        assert!(!param.has_value("OPT-PARTICIPANT"));
    }
}
