/// Component library settings.
///
/// Every element is registered under `{prefix}-{component}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    prefix: String,
}

impl Settings {
    pub const DEFAULT_PREFIX: &'static str = "bx";

    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn tag_name(&self, component: &str) -> String {
        format!("{}-{component}", self.prefix)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}
