//! The attribute store shared by discs, titles, and streams.

use crate::error::{CoreError, CoreResult};
use crate::protocol::{parse_duration, Attr, Attribute};
use std::time::Duration;

/// An insertion-ordered collection of attributes describing one disc, title,
/// or stream. makemkvcon may repeat an id; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info(Vec<Attribute>);

impl Info {
    pub fn push(&mut self, attr: Attribute) {
        self.0.push(attr);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn find(&self, id: Attr) -> Option<&Attribute> {
        self.0.iter().find(|a| a.is(id))
    }

    /// Returns the value of the attribute with the given id.
    pub fn attr(&self, id: Attr) -> CoreResult<&str> {
        self.find(id)
            .map(|a| a.value.as_str())
            .ok_or(CoreError::AttrNotFound(id))
    }

    /// Returns the value of the attribute with the given id, or `default` if
    /// it is absent.
    pub fn attr_or<'a>(&'a self, id: Attr, default: &'a str) -> &'a str {
        self.find(id).map(|a| a.value.as_str()).unwrap_or(default)
    }

    /// Like [`Info::attr`], but also converts the value to an integer.
    pub fn attr_int(&self, id: Attr) -> CoreResult<i64> {
        let value = self.attr(id)?;
        value.parse().map_err(|_| CoreError::ValueParse {
            value: value.to_string(),
            reason: "not an integer".to_string(),
        })
    }

    /// Like [`Info::attr`], but also converts the value to a duration.
    pub fn attr_duration(&self, id: Attr) -> CoreResult<Duration> {
        parse_duration(self.attr(id)?)
    }

    /// Returns the code of the attribute with the given id.
    pub fn code(&self, id: Attr) -> CoreResult<i64> {
        self.find(id)
            .map(|a| a.code)
            .ok_or(CoreError::AttrNotFound(id))
    }

    /// Returns the code of the attribute with the given id, or `default` if
    /// it is absent.
    pub fn code_or(&self, id: Attr, default: i64) -> i64 {
        self.find(id).map(|a| a.code).unwrap_or(default)
    }
}

impl<'a> IntoIterator for &'a Info {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
