pub mod flow;
pub mod locale;
pub mod task;

pub use flow::{Classification, Flow};
pub use locale::{Locale, Tone};
pub use task::{Task, TaskStatus};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 后端时间字段：缺失、null、0 或空串都视为“尚未发生”
pub(crate) fn optional_time<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() || s == "0" => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
