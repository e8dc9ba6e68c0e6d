//! iCalendar component types (RFC 5545 §3.4-3.6).

use super::Property;

/// Component kind for iCalendar.
///
/// This is a closed registry: names outside it are rejected during parsing
/// rather than carried as opaque components. The VCALENDAR container is not
/// a kind — it is modeled by [`Calendar`] and can never appear as a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// VTIMEZONE component.
    Timezone,
    /// STANDARD or DAYLIGHT sub-component of VTIMEZONE.
    TimezoneRule {
        /// True for DAYLIGHT, false for STANDARD.
        daylight: bool,
    },
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::Alarm => "VALARM",
            Self::Timezone => "VTIMEZONE",
            Self::TimezoneRule { daylight: false } => "STANDARD",
            Self::TimezoneRule { daylight: true } => "DAYLIGHT",
        }
    }

    /// Looks up a component kind by name (case-insensitive).
    ///
    /// Returns `None` for names outside the registry, including VCALENDAR.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "VEVENT" => Some(Self::Event),
            "VTODO" => Some(Self::Todo),
            "VJOURNAL" => Some(Self::Journal),
            "VALARM" => Some(Self::Alarm),
            "VTIMEZONE" => Some(Self::Timezone),
            "STANDARD" => Some(Self::TimezoneRule { daylight: false }),
            "DAYLIGHT" => Some(Self::TimezoneRule { daylight: true }),
            _ => None,
        }
    }

    /// Returns whether this is a timezone rule sub-component.
    #[must_use]
    pub const fn is_timezone_rule(self) -> bool {
        matches!(self, Self::TimezoneRule { .. })
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An iCalendar component below the VCALENDAR container.
///
/// Components own their properties and nested sub-components in document
/// order. Accessors are views over the stored properties; nothing is
/// computed ahead of time or cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Component kind.
    pub kind: ComponentKind,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested sub-components in order of appearance.
    pub children: Vec<Component>,
}

impl Component {
    /// Assembles a component from buffered properties and children.
    ///
    /// Property values are not inspected here; that is the validator's job.
    #[must_use]
    pub const fn build(
        kind: ComponentKind,
        properties: Vec<Property>,
        children: Vec<Component>,
    ) -> Self {
        Self {
            kind,
            properties,
            children,
        }
    }

    /// Creates an empty component of the given kind.
    #[must_use]
    pub const fn new(kind: ComponentKind) -> Self {
        Self::build(kind, Vec::new(), Vec::new())
    }

    /// Creates an empty VEVENT component.
    #[must_use]
    pub const fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Creates an empty VTODO component.
    #[must_use]
    pub const fn todo() -> Self {
        Self::new(ComponentKind::Todo)
    }

    /// Creates an empty VALARM component.
    #[must_use]
    pub const fn alarm() -> Self {
        Self::new(ComponentKind::Alarm)
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name_upper)
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        let name_upper = name.to_ascii_uppercase();
        self.properties
            .iter()
            .filter(|p| p.name == name_upper)
            .collect()
    }

    /// Returns the raw value of the first property with the given name.
    #[must_use]
    pub fn property_value(&self, name: &str) -> Option<&str> {
        self.get_property(name).map(|p| p.value.as_str())
    }

    /// Returns the UID property value if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.property_value("UID")
    }

    /// Returns the DTSTAMP property value if present.
    #[must_use]
    pub fn dtstamp(&self) -> Option<&str> {
        self.property_value("DTSTAMP")
    }

    /// Returns the SUMMARY property value if present.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.property_value("SUMMARY")
    }

    /// Returns the DESCRIPTION property value if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.property_value("DESCRIPTION")
    }

    /// Returns the ACTION property value if present (VALARM).
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.property_value("ACTION")
    }

    /// Returns the TRIGGER property value if present (VALARM).
    #[must_use]
    pub fn trigger(&self) -> Option<&str> {
        self.property_value("TRIGGER")
    }

    /// Returns the TZID property value if present (VTIMEZONE).
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.property_value("TZID")
    }

    /// Returns children of a specific kind.
    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }

    /// Returns all VALARM children.
    #[must_use]
    pub fn alarms(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Alarm)
    }

    /// Returns all STANDARD/DAYLIGHT children (VTIMEZONE).
    #[must_use]
    pub fn timezone_rules(&self) -> Vec<&Component> {
        self.children
            .iter()
            .filter(|c| c.kind.is_timezone_rule())
            .collect()
    }
}

/// Top-level iCalendar object (the VCALENDAR container).
///
/// Holds the calendar-level properties (VERSION, PRODID, etc.) and every
/// other component as a child. It is the only type returned by a top-level
/// parse and can never be nested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Calendar {
    /// Calendar-level properties in order of appearance.
    pub properties: Vec<Property>,
    /// Child components in order of appearance.
    pub components: Vec<Component>,
}

impl Calendar {
    /// Creates a new calendar with the required VERSION and PRODID.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        Self {
            properties: vec![
                Property::new("VERSION", "2.0"),
                Property::new("PRODID", prodid),
            ],
            components: Vec::new(),
        }
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name_upper)
    }

    /// Returns the VERSION value.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.get_property("VERSION").map(|p| p.value.as_str())
    }

    /// Returns the PRODID value.
    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.get_property("PRODID").map(|p| p.value.as_str())
    }

    /// Returns the CALSCALE value (defaults to "GREGORIAN").
    #[must_use]
    pub fn calscale(&self) -> &str {
        self.get_property("CALSCALE")
            .map_or("GREGORIAN", |p| p.value.as_str())
    }

    /// Adds a child component.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Returns children of a specific kind.
    #[must_use]
    pub fn components_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.components.iter().filter(|c| c.kind == kind).collect()
    }

    /// Returns all VEVENT components.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.components_of_kind(ComponentKind::Event)
    }

    /// Returns all VTODO components.
    #[must_use]
    pub fn todos(&self) -> Vec<&Component> {
        self.components_of_kind(ComponentKind::Todo)
    }

    /// Returns all VJOURNAL components.
    #[must_use]
    pub fn journals(&self) -> Vec<&Component> {
        self.components_of_kind(ComponentKind::Journal)
    }

    /// Returns all VTIMEZONE components.
    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.components_of_kind(ComponentKind::Timezone)
    }

    /// Returns all unique UIDs in this calendar.
    #[must_use]
    pub fn uids(&self) -> Vec<&str> {
        let mut uids: Vec<&str> = self.components.iter().filter_map(Component::uid).collect();
        uids.sort_unstable();
        uids.dedup();
        uids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_kind_from_name() {
        assert_eq!(ComponentKind::from_name("VEVENT"), Some(ComponentKind::Event));
        assert_eq!(ComponentKind::from_name("vtodo"), Some(ComponentKind::Todo));
        assert_eq!(
            ComponentKind::from_name("DAYLIGHT"),
            Some(ComponentKind::TimezoneRule { daylight: true })
        );
        assert_eq!(
            ComponentKind::from_name("standard"),
            Some(ComponentKind::TimezoneRule { daylight: false })
        );
        assert_eq!(ComponentKind::from_name("X-CUSTOM"), None);
        assert_eq!(ComponentKind::from_name("VCALENDAR"), None);
    }

    #[test]
    fn component_kind_round_trips_names() {
        for name in ["VEVENT", "VTODO", "VJOURNAL", "VALARM", "VTIMEZONE", "STANDARD", "DAYLIGHT"]
        {
            let kind = ComponentKind::from_name(name).unwrap();
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn calendar_new() {
        let cal = Calendar::new("-//Koyomi//Koyomi Calendar//EN");
        assert_eq!(cal.version(), Some("2.0"));
        assert_eq!(cal.prodid(), Some("-//Koyomi//Koyomi Calendar//EN"));
        assert_eq!(cal.calscale(), "GREGORIAN");
    }

    #[test]
    fn component_accessors() {
        let mut event = Component::event();
        event.add_property(Property::new("UID", "test-uid-123"));
        event.add_property(Property::new("SUMMARY", "Test Event"));

        assert_eq!(event.uid(), Some("test-uid-123"));
        assert_eq!(event.summary(), Some("Test Event"));
        assert_eq!(event.dtstamp(), None);
    }

    #[test]
    fn calendar_components_by_kind() {
        let mut cal = Calendar::new("-//Test//Test//EN");

        let mut event1 = Component::event();
        event1.add_property(Property::new("UID", "event1"));
        cal.add_component(event1);

        let mut event2 = Component::event();
        event2.add_property(Property::new("UID", "event2"));
        cal.add_component(event2);

        let mut todo = Component::todo();
        todo.add_property(Property::new("UID", "todo1"));
        cal.add_component(todo);

        assert_eq!(cal.events().len(), 2);
        assert_eq!(cal.todos().len(), 1);
        assert_eq!(cal.uids(), vec!["event1", "event2", "todo1"]);
    }

    #[test]
    fn timezone_rules_match_both_sub_kinds() {
        let mut tz = Component::new(ComponentKind::Timezone);
        tz.add_child(Component::new(ComponentKind::TimezoneRule {
            daylight: false,
        }));
        tz.add_child(Component::new(ComponentKind::TimezoneRule {
            daylight: true,
        }));
        tz.add_child(Component::alarm());

        assert_eq!(tz.timezone_rules().len(), 2);
    }
}
