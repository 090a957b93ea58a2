//! Attributes the tooltip trigger reads or writes, and boolean reflection.

use strum::{AsRefStr, EnumIter};

use crate::{host::Host, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Attribute {
    Open,
    Role,
    Tabindex,
    AriaHaspopup,
    AriaExpanded,
}

impl Attribute {
    /// The value set on connection when the author didn't supply one.
    pub fn default_value(self) -> Option<&'static str> {
        match self {
            Self::Open => None,
            Self::Role => Some("button"),
            Self::Tabindex => Some("0"),
            Self::AriaHaspopup => Some("true"),
            Self::AriaExpanded => Some(bool_text(false)),
        }
    }

    pub fn is(self, name: &str) -> bool {
        self.as_ref() == name
    }
}

pub fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Boolean attributes are true when present, whatever their value.
pub fn parse_bool(value: Option<&str>) -> bool {
    value.is_some()
}

/// Write `value` to `host` as a boolean attribute.
pub fn reflect_bool(host: &impl Host, attribute: Attribute, value: bool) -> Result<()> {
    let name = attribute.as_ref();

    match (value, host.has_attribute(name)) {
        (true, false) => host.set_attribute(name, ""),
        (false, true) => host.remove_attribute(name),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{parse_bool, reflect_bool, Attribute};
    use crate::{host::Host, testing::MemoryHost};

    #[test]
    fn names() {
        let names: Vec<&str> = Attribute::iter().map(|attr| attr.as_ref()).collect();

        assert_eq!(
            names,
            ["open", "role", "tabindex", "aria-haspopup", "aria-expanded"]
        );
    }

    #[test]
    fn presence_is_true() {
        assert!(parse_bool(Some("")));
        assert!(parse_bool(Some("false")));
        assert!(!parse_bool(None));
    }

    #[test]
    fn reflect() {
        let host = MemoryHost::new();

        reflect_bool(&host, Attribute::Open, true).unwrap();
        assert_eq!(host.attribute("open").as_deref(), Some(""));

        reflect_bool(&host, Attribute::Open, false).unwrap();
        assert!(!host.has_attribute("open"));
    }
}
