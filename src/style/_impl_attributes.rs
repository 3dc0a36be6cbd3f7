use crate::style::{AttributeKey, Attributes};
use std::fmt::{Display, Formatter};

impl AttributeKey {
    /// All recognised keys, in the order in which they are serialized.
    pub const ALL: [AttributeKey; 9] = [
        AttributeKey::ArrowHead,
        AttributeKey::Color,
        AttributeKey::FillColor,
        AttributeKey::FontName,
        AttributeKey::FontSize,
        AttributeKey::Label,
        AttributeKey::PenWidth,
        AttributeKey::Shape,
        AttributeKey::Style,
    ];

    /// The GraphViz name of this attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::ArrowHead => "arrowhead",
            AttributeKey::Color => "color",
            AttributeKey::FillColor => "fillcolor",
            AttributeKey::FontName => "fontname",
            AttributeKey::FontSize => "fontsize",
            AttributeKey::Label => "label",
            AttributeKey::PenWidth => "penwidth",
            AttributeKey::Shape => "shape",
            AttributeKey::Style => "style",
        }
    }

    /// Find the key with the given GraphViz name.
    pub fn try_from_str(name: &str) -> Option<AttributeKey> {
        AttributeKey::ALL.iter().find(|k| k.as_str() == name).cloned()
    }
}

impl Display for AttributeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Attributes {
    pub fn new() -> Attributes {
        Attributes::default()
    }

    /// Builder-style version of `Attributes::set`.
    pub fn with(mut self, key: AttributeKey, value: &str) -> Attributes {
        self.set(key, value);
        self
    }

    /// Set the value of a recognised attribute, returning the previous value.
    pub fn set(&mut self, key: AttributeKey, value: &str) -> Option<String> {
        self.known.insert(key, value.to_string())
    }

    pub fn get(&self, key: AttributeKey) -> Option<&str> {
        self.known.get(&key).map(|it| it.as_str())
    }

    pub fn remove(&mut self, key: AttributeKey) -> Option<String> {
        self.known.remove(&key)
    }

    /// Set an opaque attribute that is not interpreted by any styling pass.
    ///
    /// If `name` is actually a recognised key, the value is stored as that key instead,
    /// so the same attribute can never be present twice.
    pub fn set_extra(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(key) = AttributeKey::try_from_str(name) {
            self.set(key, value)
        } else {
            self.extra.insert(name.to_string(), value.to_string())
        }
    }

    pub fn get_extra(&self, name: &str) -> Option<&str> {
        self.extra.get(name).map(|it| it.as_str())
    }

    /// Copy all attributes from `other` into this mapping (overwriting existing values).
    pub fn extend(&mut self, other: &Attributes) {
        for (k, v) in &other.known {
            self.known.insert(*k, v.clone());
        }
        for (k, v) in &other.extra {
            self.extra.insert(k.clone(), v.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.extra.is_empty()
    }

    pub fn len(&self) -> usize {
        self.known.len() + self.extra.len()
    }

    /// Iterate over all `(name, value)` pairs. Recognised keys go first, followed by the
    /// extra attributes sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let known = self.known.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let extra = self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        known.chain(extra)
    }
}

impl Display for Attributes {
    /// Writes the attributes as a GraphViz attribute list (without brackets).
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, dot_value(value))?;
        }
        Ok(())
    }
}

/// **(internal)** Quote a GraphViz attribute value, unless it is an HTML-like
/// label (`<...>`), which must be written verbatim.
pub(crate) fn dot_value(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('<') && value.ends_with('>') {
        value.to_string()
    } else {
        dot_id(value)
    }
}

/// **(internal)** Quote a GraphViz identifier.
pub(crate) fn dot_id(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
