//
//  gogs-client
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Pretty-printed JSON for `--json` mode. Models are written exactly as the
//! API returned them, so the output can be piped to `jq`.

use std::io::Write;

use serde::Serialize;
use serde_json::{json, Value};

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    write_json_to(&mut stdout.lock(), value)
}

/// Writes a value as pretty-printed JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Builds `{"success": true}` merged with the fields of `extra`.
///
/// Non-object `extra` values are ignored.
pub fn success_object(extra: Value) -> Value {
    let mut object = json!({ "success": true });
    if let (Some(target), Value::Object(fields)) = (object.as_object_mut(), extra) {
        target.extend(fields);
    }
    object
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_to_appends_newline() {
        let mut buf = Vec::new();
        write_json_to(&mut buf, &json!({"ok": true})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"ok\": true"));
    }

    #[test]
    fn test_success_object_merges_fields() {
        let value = success_object(json!({"deleted": "demo/hello"}));
        assert_eq!(value, json!({"success": true, "deleted": "demo/hello"}));
        assert_eq!(success_object(Value::Null), json!({"success": true}));
    }
}
