//! Property (content line) types (RFC 5545 §3.1, §3.8).

use super::Parameter;

/// A single attributed key/value record inside a component.
///
/// The value is kept as the raw text after unfolding; no value-type
/// resolution is performed. Properties are immutable once produced and
/// preserve their position in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string (after unfolding, before any unescaping).
    pub value: String,
}

impl Property {
    /// Creates a new property with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Creates a property with parameters.
    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            value: value.into(),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns whether this property has a parameter with the given name.
    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.get_param(name).is_some()
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.get_param_value("VALUE")
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value("TZID")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_new_normalizes_name() {
        let prop = Property::new("summary", "Team Meeting");
        assert_eq!(prop.name, "SUMMARY");
        assert_eq!(prop.value, "Team Meeting");
        assert!(prop.params.is_empty());
    }

    #[test]
    fn property_get_param() {
        let prop = Property::with_params(
            "DTSTART",
            vec![Parameter::tzid("America/New_York")],
            "20260123T120000",
        );
        assert_eq!(prop.tzid(), Some("America/New_York"));
        assert!(prop.has_param("TZID"));
        assert!(!prop.has_param("VALUE"));
    }
}
