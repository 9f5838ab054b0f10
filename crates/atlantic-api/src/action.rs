use std::fmt::Display;

use crate::{Error, Result};

/// An action string: the operation name followed by `&key=value` pairs.
///
/// Values are inserted verbatim. The whole string becomes a single form value
/// of the signed request, so the form encoder escapes it in one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: &'static str,
    query: String,
}

impl Action {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            query: name.to_string(),
        }
    }

    /// Operation name without parameters.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        self.query.push('&');
        self.query.push_str(key);
        self.query.push('=');
        self.query.push_str(&value.to_string());
        self
    }

    /// Append `key=value` only when a non-empty value is present.
    pub fn optional(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.param(key, v),
            _ => self,
        }
    }

    pub fn flag(self, key: &str, value: bool) -> Self {
        self.param(key, if value { "Y" } else { "N" })
    }

    pub fn quantity(self, key: &str, value: u32) -> Self {
        self.param(key, value.max(1))
    }

    /// `key=v` for one value, `key_1=v1&key_2=v2...` for several.
    pub fn indexed(self, key: &str, values: &[String]) -> Self {
        match values {
            [single] => self.param(key, single),
            _ => values
                .iter()
                .enumerate()
                .fold(self, |action, (i, v)| {
                    action.param(&format!("{key}_{}", i + 1), v)
                }),
        }
    }

    /// `key=v1,v2,...`; a single value carries no separator.
    pub fn joined(self, key: &str, values: &[String]) -> Self {
        self.param(key, values.join(","))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query)
    }
}

/// Reject an empty required scalar.
pub(crate) fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(field));
    }
    Ok(())
}

/// Reject an empty required list, or one holding blank entries.
pub(crate) fn require_all(values: &[String], field: &'static str) -> Result<()> {
    if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
        return Err(Error::Validation(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_action_is_just_the_name() {
        let action = Action::new("list-instances");
        assert_eq!(action.as_str(), "list-instances");
        assert_eq!(action.name(), "list-instances");
    }

    #[test]
    fn optional_skips_absent_and_empty_values() {
        let action = Action::new("describe-plan")
            .optional("planName", None)
            .optional("platform", Some(""))
            .optional("platform", Some("linux"));
        assert_eq!(action.as_str(), "describe-plan&platform=linux");
    }

    #[test]
    fn flags_are_single_characters() {
        let action = Action::new("x").flag("a", true).flag("b", false);
        assert_eq!(action.as_str(), "x&a=Y&b=N");
    }

    #[test]
    fn quantity_is_clamped_to_one() {
        assert_eq!(Action::new("x").quantity("qty", 0).as_str(), "x&qty=1");
        assert_eq!(Action::new("x").quantity("qty", 3).as_str(), "x&qty=3");
    }

    #[test]
    fn indexed_single_value_has_no_suffix() {
        let action = Action::new("terminate-instance").indexed("instanceid", &ids(&["101"]));
        assert_eq!(action.as_str(), "terminate-instance&instanceid=101");
    }

    #[test]
    fn indexed_many_values_are_numbered_from_one() {
        let action =
            Action::new("terminate-instance").indexed("instanceid", &ids(&["101", "102", "103"]));
        assert_eq!(
            action.as_str(),
            "terminate-instance&instanceid_1=101&instanceid_2=102&instanceid_3=103"
        );
    }

    #[test]
    fn joined_values_are_comma_separated() {
        let one = Action::new("release-public-ip").joined("ip_address", &ids(&["10.0.0.1"]));
        assert_eq!(one.as_str(), "release-public-ip&ip_address=10.0.0.1");

        let many = Action::new("release-public-ip")
            .joined("ip_address", &ids(&["10.0.0.1", "10.0.0.2"]));
        assert_eq!(many.as_str(), "release-public-ip&ip_address=10.0.0.1,10.0.0.2");
    }

    #[test]
    fn require_rejects_blank() {
        assert!(matches!(require(" ", "Instance ID"), Err(Error::Validation("Instance ID"))));
        assert!(require("42", "Instance ID").is_ok());
    }

    #[test]
    fn require_all_rejects_empty_lists_and_blank_entries() {
        assert!(require_all(&[], "IP address").is_err());
        assert!(require_all(&ids(&["1.2.3.4", ""]), "IP address").is_err());
        assert!(require_all(&ids(&["1.2.3.4"]), "IP address").is_ok());
    }
}
