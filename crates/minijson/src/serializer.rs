//! Serializer: walks a [`Value`] tree and writes its text form.
//!
//! Output rules per kind:
//!
//! - `Null` → `null`, `Bool` → `true`/`false`
//! - `Int` → decimal digits
//! - `Double` → shortest decimal text, with `.0` appended to whole numbers so
//!   the value re-parses as a double; NaN and infinities become `null`
//! - `String` → the raw text between quotes. Nothing is escaped, which mirrors
//!   the parser: a string holding `"`, `\` or control characters does not
//!   produce re-parseable output.
//! - `Array` / `Object` → `[a,b]` / `{"k":v}` in iteration order

use std::fmt::Write;

use crate::value::Value;

impl Value {
    /// Render this value as compact text.
    ///
    /// ```
    /// use minijson::Value;
    ///
    /// let v: Value = vec![Value::Null, Value::from(1), Value::from(2.5)].into();
    /// assert_eq!(v.dump(), "[null,1,2.5]");
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out);
        out
    }

    /// Append the compact text form to `out`.
    pub fn dump_into(&self, out: &mut String) {
        write_value(self, out);
    }

    /// Render with one member per line, indented by `indent` spaces per level.
    /// Empty containers stay on one line (`[]`, `{}`).
    pub fn dump_pretty(&self, indent: usize) -> String {
        let mut out = String::new();
        write_pretty(self, indent, 0, &mut out);
        out
    }
}

/// Render `value` as compact text.
pub fn dump(value: &Value) -> String {
    value.dump()
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Double(f) => write_double(*f, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(members) => {
            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(member, out);
            }
            out.push('}');
        }
    }
}

fn write_pretty(value: &Value, indent: usize, level: usize, out: &mut String) {
    match value {
        Value::Array(items) if !items.is_empty() => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(indent, level + 1, out);
                write_pretty(item, indent, level + 1, out);
            }
            newline(indent, level, out);
            out.push(']');
        }
        Value::Object(members) if !members.is_empty() => {
            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(indent, level + 1, out);
                write_string(key, out);
                out.push_str(": ");
                write_pretty(member, indent, level + 1, out);
            }
            newline(indent, level, out);
            out.push('}');
        }
        _ => write_value(value, out),
    }
}

fn newline(indent: usize, level: usize, out: &mut String) {
    out.push('\n');
    out.extend(std::iter::repeat_n(' ', indent * level));
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    out.push_str(s);
    out.push('"');
}

/// Writing to a `String` cannot fail, so the `fmt::Result` is discarded.
fn write_double(f: f64, out: &mut String) {
    if !f.is_finite() {
        out.push_str("null");
        return;
    }
    let start = out.len();
    let _ = write!(out, "{f}");
    if !out[start..].contains('.') {
        out.push_str(".0");
    }
}
