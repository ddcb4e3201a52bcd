use std::fmt::Display;

/// Ordered list of CSS declarations for an inline `style` attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    items: Vec<(&'static str, String)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Display) -> Self {
        self.items.push((property, value.to_string()));
        self
    }

    /// Add the declaration only when a value is present
    pub fn set_opt(self, property: &'static str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `property: value; property: value;`
    pub fn to_css(&self) -> String {
        self.items
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
