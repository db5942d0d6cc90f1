use serde::Serialize;
use serde_json::Value;

use crate::config::{JsonStyle, OutputConfig};

/// Serialization entry points shared by every node of the card tree.
///
/// `to_json*` keep the wire field order (`type` first, then the node's fields
/// in declaration order). `build` returns the same data as a
/// [`serde_json::Value`] for callers that want to inspect or merge it.
pub trait Build: Serialize {
    fn build(&self) -> Value {
        build_value(self)
    }

    fn to_json(&self) -> String {
        self.to_json_with(&OutputConfig::compact())
    }

    fn to_json_pretty(&self) -> String {
        self.to_json_with(&OutputConfig::default())
    }

    fn to_json_with(&self, output: &OutputConfig) -> String {
        render_json(self, output)
    }
}

pub(crate) fn build_value<T: Serialize + ?Sized>(node: &T) -> Value {
    serde_json::to_value(node).unwrap_or(Value::Null)
}

pub(crate) fn render_json<T: Serialize + ?Sized>(node: &T, output: &OutputConfig) -> String {
    let bytes = match output.style {
        JsonStyle::Compact => serde_json::to_vec(node),
        JsonStyle::Pretty => {
            let indent = vec![b' '; usize::from(output.indent)];
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
            let mut buf = Vec::new();
            let written = {
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                node.serialize(&mut ser)
            };
            written.map(|_| buf)
        }
    };
    bytes
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

pub(crate) fn is_true(value: &bool) -> bool {
    *value
}
