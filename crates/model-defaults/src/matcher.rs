//! Value equivalence for attribute comparison
//!
//! [`FolderDefaults::matches`] decides whether an expected and an actual
//! value of one attribute are the same for diffing purposes. The rules are
//! applied in order and the first one that applies decides:
//!
//! 1. both values absent: equal
//! 2. exactly one absent: equal only when the present value is the
//!    attribute's default, so an omitted attribute matches an explicit default
//! 3. equal values, or equal string forms: equal
//! 4. both boolean-like with the same boolean reading: equal
//! 5. both independently the attribute's default: equal
//! 6. otherwise: not equal
//!
//! Empty strings count as absent.

use crate::error::Result;
use crate::registry::{AttributeDefault, FolderDefaults};
use crate::scalar::ScalarType;
use crate::value::{Value, coerce_boolean};

/// Rule of the decision list that settled a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    BothAbsent,
    OmittedDefault,
    OneAbsent,
    SameValue,
    SameBoolean,
    BothDefault,
    Different,
}

impl MatchRule {
    pub fn is_match(&self) -> bool {
        matches!(
            self,
            MatchRule::BothAbsent
                | MatchRule::OmittedDefault
                | MatchRule::SameValue
                | MatchRule::SameBoolean
                | MatchRule::BothDefault
        )
    }
}

impl FolderDefaults {
    /// Whether `expected` and `actual` are equivalent values of `attribute`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBooleanLiteral`](crate::Error::InvalidBooleanLiteral)
    /// when a value of a boolean-typed attribute has to be checked against
    /// its defaults and is not a boolean literal.
    pub fn matches(&self, attribute: &str, expected: &Value, actual: &Value) -> Result<bool> {
        Ok(self.match_rule(attribute, expected, actual)?.is_match())
    }

    /// Like [`matches`](Self::matches), but reports which rule decided.
    pub fn match_rule(&self, attribute: &str, expected: &Value, actual: &Value) -> Result<MatchRule> {
        let rule = match (expected.is_absent(), actual.is_absent()) {
            (true, true) => MatchRule::BothAbsent,
            (true, false) | (false, true) => {
                let present = if expected.is_absent() { actual } else { expected };
                if self.is_default_value(attribute, present)? {
                    MatchRule::OmittedDefault
                } else {
                    MatchRule::OneAbsent
                }
            }
            (false, false) if same_value(expected, actual) => MatchRule::SameValue,
            (false, false) if same_boolean(expected, actual)? => MatchRule::SameBoolean,
            (false, false) => {
                // Both sides are evaluated so a bad literal fails regardless of argument order.
                let expected_default = self.is_default_value(attribute, expected)?;
                let actual_default = self.is_default_value(attribute, actual)?;
                if expected_default && actual_default {
                    MatchRule::BothDefault
                } else {
                    MatchRule::Different
                }
            }
        };

        tracing::trace!(
            folder = self.folder_name(),
            attribute,
            %expected,
            %actual,
            ?rule,
            "Matched attribute values"
        );
        Ok(rule)
    }

    /// Whether `value` counts as the default for `attribute`.
    ///
    /// Absent and empty values always count as the default. Otherwise the
    /// value must appear among the registered default literals; for
    /// boolean-typed attributes the comparison is on boolean readings.
    pub fn is_default_value(&self, attribute: &str, value: &Value) -> Result<bool> {
        let Some(text) = value.text().filter(|t| !t.is_empty()) else {
            return Ok(true);
        };

        let Some(default) = self.attribute(attribute) else {
            return Ok(false);
        };

        is_listed_default(default, value, &text)
    }
}

fn is_listed_default(default: &AttributeDefault, value: &Value, text: &str) -> Result<bool> {
    if default.values().is_empty() {
        return Ok(false);
    }

    match default.scalar_type() {
        ScalarType::Boolean => {
            let reading = value.to_boolean()?;
            for literal in default.values() {
                if coerce_boolean(literal)? == reading {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        ScalarType::String
        | ScalarType::Integer
        | ScalarType::Long
        | ScalarType::Float
        | ScalarType::Double => Ok(default.values().iter().any(|literal| literal == text)),
    }
}

fn same_value(expected: &Value, actual: &Value) -> bool {
    expected == actual || expected.text() == actual.text()
}

fn same_boolean(expected: &Value, actual: &Value) -> Result<bool> {
    if expected.is_boolean_like() && actual.is_boolean_like() {
        Ok(expected.to_boolean()? == actual.to_boolean()?)
    } else {
        Ok(false)
    }
}
