//! Pass-through attribute bag forwarded onto a wrapper element.

use yew::virtual_dom::{ApplyAttributeAs, AttrValue, Attributes};

/// Ordered `name -> value` attributes for a generic inline container.
///
/// Values are opaque. Inserting a name that is already present replaces the value
/// in place, so each name appears at most once and keeps its first position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    entries: Vec<(AttrValue, AttrValue)>,
}

impl HtmlAttributes {
    /// Empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder-style [`HtmlAttributes::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Shorthand for the `class` attribute.
    #[must_use]
    pub fn class(self, value: impl Into<AttrValue>) -> Self {
        self.with("class", value)
    }

    /// Set `name` to `value`, returning the value it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<AttrValue>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((name, value));
        None
    }

    /// Value recorded for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of attributes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attributes were supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Attributes whose names can be set on an element, in insertion order.
    ///
    /// Names that are empty or contain whitespace, control characters, quotes,
    /// `<`, `>`, `/` or `=` are skipped.
    pub fn writable(&self) -> impl Iterator<Item = (&AttrValue, &AttrValue)> {
        self.entries.iter().filter_map(|(name, value)| {
            if is_attribute_name(name) {
                Some((name, value))
            } else {
                tracing::debug!(name = name.as_str(), "skipping unwritable attribute");
                None
            }
        })
    }
}

impl From<&HtmlAttributes> for Attributes {
    fn from(attrs: &HtmlAttributes) -> Self {
        Self::IndexMap(
            attrs
                .writable()
                .map(|(name, value)| {
                    (name.clone(), (value.clone(), ApplyAttributeAs::Attribute))
                })
                .collect(),
        )
    }
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|ch| {
            ch.is_whitespace()
                || ch.is_control()
                || matches!(ch, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

impl<K, V> FromIterator<(K, V)> for HtmlAttributes
where
    K: Into<AttrValue>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for HtmlAttributes
where
    K: Into<AttrValue>,
    V: Into<AttrValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::HtmlAttributes;
    use yew::virtual_dom::Attributes;

    #[test]
    fn insert_replaces_in_place() {
        let mut attrs = HtmlAttributes::from([("id", "logo"), ("class", "small")]);
        let previous = attrs.insert("class", "big");
        assert_eq!(previous.as_deref(), Some("small"));
        assert_eq!(
            attrs.iter().collect::<Vec<_>>(),
            vec![("id", "logo"), ("class", "big")]
        );
    }

    #[test]
    fn builder_and_lookup() {
        let attrs = HtmlAttributes::new()
            .class("big")
            .with("data-testid", "brand");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("class"), Some("big"));
        assert_eq!(attrs.get("data-testid"), Some("brand"));
        assert_eq!(attrs.get("title"), None);
        assert!(HtmlAttributes::default().is_empty());
    }

    #[test]
    fn runtime_names_become_yew_attributes() {
        let name = String::from("data-") + "runtime";
        let attrs = HtmlAttributes::new()
            .with(name, "x")
            .class("big")
            .with("bad name", "dropped");
        let Attributes::IndexMap(map) = Attributes::from(&attrs) else {
            panic!("expected an index map of attributes");
        };
        let entries: Vec<(&str, &str)> = map
            .iter()
            .map(|(key, (value, _))| (key.as_str(), value.as_str()))
            .collect();
        assert_eq!(entries, vec![("data-runtime", "x"), ("class", "big")]);
    }

    #[test]
    fn writable_skips_unusable_names() {
        let attrs = HtmlAttributes::from([
            ("title", "ok"),
            ("", "empty"),
            ("onload=\"x", "y"),
            ("a/b", "z"),
        ]);
        let names: Vec<&str> = attrs.writable().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["title"]);
    }
}
