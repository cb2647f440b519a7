//! Python literal values and their `repr` rendering.

use std::{fmt, str::FromStr};

/// A Python value, as written into generated source.
///
/// Used for decorator keyword arguments and constant type arguments.
/// `PyValue::None` is the Python `None` literal; it is a legal value and
/// distinct from "not set", which callers model with `Option<PyValue>`.
#[derive(Debug, Clone, PartialEq)]
pub enum PyValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<PyValue>),
    /// A Python expression emitted verbatim (e.g. `attrs.setters.frozen`).
    Expr(String),
}

impl PyValue {
    /// Render the value the way Python's `repr()` would.
    pub fn repr(&self) -> String {
        match self {
            PyValue::None => "None".to_string(),
            PyValue::Bool(true) => "True".to_string(),
            PyValue::Bool(false) => "False".to_string(),
            PyValue::Int(i) => i.to_string(),
            PyValue::Float(f) => float_repr(*f),
            PyValue::Str(s) => str_repr(s),
            PyValue::List(items) => {
                let items: Vec<String> = items.iter().map(PyValue::repr).collect();
                format!("[{}]", items.join(", "))
            }
            PyValue::Expr(expr) => expr.clone(),
        }
    }

    /// Convert a TOML value from `recast.toml` into a Python value.
    ///
    /// Tables are only accepted in two forms: `{ expr = "..." }` for a
    /// verbatim expression and `{ none = true }` for Python `None`.
    pub fn from_toml(value: &toml::Value) -> Result<Self, String> {
        match value {
            toml::Value::Boolean(b) => Ok(PyValue::Bool(*b)),
            toml::Value::Integer(i) => Ok(PyValue::Int(*i)),
            toml::Value::Float(f) => Ok(PyValue::Float(*f)),
            toml::Value::String(s) => Ok(PyValue::Str(s.clone())),
            toml::Value::Array(items) => items
                .iter()
                .map(PyValue::from_toml)
                .collect::<Result<Vec<_>, _>>()
                .map(PyValue::List),
            toml::Value::Table(table) if table.len() == 1 => {
                match (table.get("expr"), table.get("none")) {
                    (Some(toml::Value::String(expr)), _) => Ok(PyValue::Expr(expr.clone())),
                    (_, Some(toml::Value::Boolean(true))) => Ok(PyValue::None),
                    _ => Err("expected `{ expr = \"...\" }` or `{ none = true }`".to_string()),
                }
            }
            toml::Value::Table(_) => {
                Err("expected `{ expr = \"...\" }` or `{ none = true }`".to_string())
            }
            toml::Value::Datetime(dt) => Err(format!("datetime '{}' has no Python literal", dt)),
        }
    }
}

impl fmt::Display for PyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

/// Parses command-line option values.
///
/// `True`/`False`, `None`, integers and floats become literals, text wrapped
/// in matching quotes becomes a string, and anything else is kept as a
/// verbatim Python expression.
impl FromStr for PyValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => return Err("option value cannot be empty".to_string()),
            "True" | "true" => return Ok(PyValue::Bool(true)),
            "False" | "false" => return Ok(PyValue::Bool(false)),
            "None" | "none" => return Ok(PyValue::None),
            _ => {}
        }

        if let Ok(i) = s.parse::<i64>() {
            return Ok(PyValue::Int(i));
        }
        if looks_numeric(s)
            && let Ok(f) = s.parse::<f64>()
        {
            return Ok(PyValue::Float(f));
        }

        for quote in ['\'', '"'] {
            if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
                return Ok(PyValue::Str(s[1..s.len() - 1].to_string()));
            }
        }

        Ok(PyValue::Expr(s.to_string()))
    }
}

fn looks_numeric(s: &str) -> bool {
    let digits = s.trim_start_matches(['-', '+']);
    digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'))
}

fn float_repr(f: f64) -> String {
    if f.is_nan() {
        "float('nan')".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "float('inf')".to_string()
        } else {
            "float('-inf')".to_string()
        }
    } else {
        finite_float_repr(f)
    }
}

/// Shortest round-trip digits laid out like Python's `repr(float)`:
/// positional for exponents in `-4..16`, otherwise `d.ddde+XX`.
fn finite_float_repr(f: f64) -> String {
    let sign = if f.is_sign_negative() { "-" } else { "" };
    let scientific = format!("{:e}", f.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if !(-4..16).contains(&exponent) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.abs());
    }

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{sign}{digits}{zeros}.0")
    } else {
        format!("{sign}{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

/// Quote a string the way Python's `repr()` does.
///
/// Single quotes are preferred; double quotes are used when the string
/// contains a single quote and no double quote.
pub fn str_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repr_literals() {
        assert_eq!(PyValue::None.repr(), "None");
        assert_eq!(PyValue::Bool(true).repr(), "True");
        assert_eq!(PyValue::Bool(false).repr(), "False");
        assert_eq!(PyValue::Int(-3).repr(), "-3");
        assert_eq!(PyValue::Float(1.0).repr(), "1.0");
        assert_eq!(PyValue::Float(0.25).repr(), "0.25");
        assert_eq!(PyValue::Float(f64::INFINITY).repr(), "float('inf')");
        assert_eq!(PyValue::Float(-0.0).repr(), "-0.0");
        assert_eq!(PyValue::Float(1e20).repr(), "1e+20");
        assert_eq!(PyValue::Float(1e-7).repr(), "1e-07");
        assert_eq!(PyValue::Float(-1.5e-5).repr(), "-1.5e-05");
        assert_eq!(PyValue::Float(1.5e300).repr(), "1.5e+300");
        assert_eq!(PyValue::Float(0.0001).repr(), "0.0001");
        assert_eq!(PyValue::Float(123.456).repr(), "123.456");
        assert_eq!(PyValue::Float(1e15).repr(), "1000000000000000.0");
        assert_eq!(PyValue::Float(1e16).repr(), "1e+16");
        assert_eq!(PyValue::Expr("attrs.setters.frozen".into()).repr(), "attrs.setters.frozen");
    }

    #[test]
    fn test_repr_list() {
        let value = PyValue::List(vec![PyValue::Str("a".into()), PyValue::Int(1)]);
        assert_eq!(value.repr(), "['a', 1]");
        assert_eq!(PyValue::List(Vec::new()).repr(), "[]");
    }

    #[test]
    fn test_str_repr_quoting() {
        assert_eq!(str_repr("hello"), "'hello'");
        assert_eq!(str_repr("it's"), "\"it's\"");
        assert_eq!(str_repr("say \"hi\""), "'say \"hi\"'");
        assert_eq!(str_repr("both ' and \""), "'both \\' and \"'");
        assert_eq!(str_repr("a\nb\\c"), "'a\\nb\\\\c'");
        assert_eq!(str_repr("\u{1}"), "'\\x01'");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("True".parse::<PyValue>().unwrap(), PyValue::Bool(true));
        assert_eq!("false".parse::<PyValue>().unwrap(), PyValue::Bool(false));
        assert_eq!("None".parse::<PyValue>().unwrap(), PyValue::None);
        assert_eq!("42".parse::<PyValue>().unwrap(), PyValue::Int(42));
        assert_eq!("-1.5".parse::<PyValue>().unwrap(), PyValue::Float(-1.5));
        assert_eq!("'abc'".parse::<PyValue>().unwrap(), PyValue::Str("abc".into()));
        assert_eq!("\"abc\"".parse::<PyValue>().unwrap(), PyValue::Str("abc".into()));
        assert_eq!(
            "attrs.setters.frozen".parse::<PyValue>().unwrap(),
            PyValue::Expr("attrs.setters.frozen".into())
        );
        // Python spells these as expressions, not as numeric literals
        assert_eq!("inf".parse::<PyValue>().unwrap(), PyValue::Expr("inf".into()));
        assert!("".parse::<PyValue>().is_err());
    }

    #[test]
    fn test_from_toml() {
        assert_eq!(
            PyValue::from_toml(&toml::Value::Boolean(true)).unwrap(),
            PyValue::Bool(true)
        );
        assert_eq!(
            PyValue::from_toml(&toml::Value::Integer(3)).unwrap(),
            PyValue::Int(3)
        );
        assert_eq!(
            PyValue::from_toml(&toml::Value::String("x".into())).unwrap(),
            PyValue::Str("x".into())
        );

        let table: toml::Value = toml::from_str::<toml::Table>(r#"v = { expr = "attrs.setters.frozen" }"#)
            .unwrap()
            .remove("v")
            .unwrap();
        assert_eq!(
            PyValue::from_toml(&table).unwrap(),
            PyValue::Expr("attrs.setters.frozen".into())
        );

        let none: toml::Value = toml::from_str::<toml::Table>("v = { none = true }")
            .unwrap()
            .remove("v")
            .unwrap();
        assert_eq!(PyValue::from_toml(&none).unwrap(), PyValue::None);

        let bad: toml::Value = toml::from_str::<toml::Table>("v = { other = 1 }")
            .unwrap()
            .remove("v")
            .unwrap();
        assert!(PyValue::from_toml(&bad).is_err());
    }
}
