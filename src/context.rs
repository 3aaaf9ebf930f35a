use serde_json::Value;

use crate::engine::{get, get_or_default};
use crate::errors::Result;
use crate::types::JsonType;

/// Lookup options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetOptions {
    /// Type the resolved value must have. `Any` skips the check.
    pub expected: JsonType,
    /// Returned when the path does not exist.
    pub default: Option<Value>,
}

impl GetOptions {
    pub fn expect(mut self, expected: JsonType) -> Self {
        self.expected = expected;
        self
    }

    pub fn or_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// A document bound to a set of lookup options.
///
/// ```
/// use json_get::{GetOptions, JsonGet, JsonType};
/// use serde_json::json;
///
/// let doc = json!({"retries": 3});
/// let jg = JsonGet::new(&doc).with_options(GetOptions::default().expect(JsonType::Int));
/// assert_eq!(jg.get("retries").unwrap(), &json!(3));
/// ```
#[derive(Debug, Clone)]
pub struct JsonGet<'a> {
    root: &'a Value,
    opts: GetOptions,
}

impl<'a> JsonGet<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self {
            root,
            opts: GetOptions::default(),
        }
    }

    pub fn with_options(mut self, opts: GetOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn options(&self) -> &GetOptions {
        &self.opts
    }

    /// Resolve `path` under the bound options; with a default set,
    /// a missing path yields the default instead of an error.
    pub fn get(&self, path: &str) -> Result<&Value> {
        match &self.opts.default {
            Some(default) => get_or_default(self.root, path, default, &self.opts.expected),
            None => get(self.root, path, &self.opts.expected),
        }
    }
}
