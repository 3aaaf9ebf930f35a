//! Path-based access into a `serde_json::Value` tree with optional type checks.
//!
//! ```
//! use json_get::{get, get_or_default, JsonType};
//! use serde_json::json;
//!
//! let doc = json!({"users": [{"name": "Ada"}, {"name": "Grace"}]});
//! assert_eq!(get(&doc, "users[1]/name", &JsonType::Str).unwrap(), &json!("Grace"));
//!
//! let fallback = json!("nobody");
//! assert_eq!(
//!     get_or_default(&doc, "users[5]/name", &fallback, &JsonType::Str).unwrap(),
//!     &fallback
//! );
//! ```
pub mod errors;
pub mod context;
pub mod engine;
pub mod path;
pub mod types;

pub use context::{GetOptions, JsonGet};
pub use engine::{get, get_or_default};
pub use errors::{ErrorKind, JsonGetError, Result};
pub use path::{parse_path, JsonPath, PathElement};
pub use types::{check_type, type_name, JsonType};
