//! Type expressions and their canonical text form.

use std::fmt;

use recast_core::PyValue;

/// A type annotation, recursively structured.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// A bare or dotted type name (`int`, `typing.Any`).
    Simple(String),
    /// A subscripted type, rendered `base[arg1, arg2]`.
    Parameterized { base: String, args: Vec<TypeExpr> },
    /// A bracketed argument list, as in `Callable[[int, str], bool]`.
    List(Vec<TypeExpr>),
    /// A PEP 604 union, rendered `a | b`.
    Union(Vec<TypeExpr>),
    /// A constant used as a type argument (`None`, `'Movie'`, `...`).
    Literal(PyValue),
}

impl TypeExpr {
    pub fn simple(name: impl Into<String>) -> Self {
        TypeExpr::Simple(name.into())
    }

    pub fn parameterized(base: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Parameterized {
            base: base.into(),
            args,
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[TypeExpr], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Simple(name) => f.write_str(name),
            TypeExpr::Parameterized { base, args } => {
                write!(f, "{}[", base)?;
                write_joined(f, args, ", ")?;
                f.write_str("]")
            }
            TypeExpr::List(items) => {
                f.write_str("[")?;
                write_joined(f, items, ", ")?;
                f.write_str("]")
            }
            TypeExpr::Union(members) => write_joined(f, members, " | "),
            TypeExpr::Literal(value) => f.write_str(&value.repr()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        assert_eq!(TypeExpr::simple("int").to_string(), "int");
        assert_eq!(TypeExpr::simple("typing.Any").to_string(), "typing.Any");
    }

    #[test]
    fn test_parameterized() {
        let dict = TypeExpr::parameterized("Dict", vec![TypeExpr::simple("str"), TypeExpr::simple("int")]);
        assert_eq!(dict.to_string(), "Dict[str, int]");
    }

    #[test]
    fn test_nested_parameterized() {
        let expr = TypeExpr::parameterized(
            "Optional",
            vec![TypeExpr::parameterized("List", vec![TypeExpr::simple("int")])],
        );
        assert_eq!(expr.to_string(), "Optional[List[int]]");
    }

    #[test]
    fn test_deep_nesting() {
        let mut expr = TypeExpr::simple("int");
        for _ in 0..50 {
            expr = TypeExpr::parameterized("List", vec![expr]);
        }
        let rendered = expr.to_string();
        assert!(rendered.starts_with("List[List["));
        assert!(rendered.ends_with(&"]".repeat(50)));
    }

    #[test]
    fn test_callable_list_argument() {
        let expr = TypeExpr::parameterized(
            "Callable",
            vec![
                TypeExpr::List(vec![TypeExpr::simple("int"), TypeExpr::simple("str")]),
                TypeExpr::simple("bool"),
            ],
        );
        assert_eq!(expr.to_string(), "Callable[[int, str], bool]");
    }

    #[test]
    fn test_union_and_literals() {
        let expr = TypeExpr::Union(vec![
            TypeExpr::parameterized("List", vec![TypeExpr::Literal(PyValue::Str("Movie".into()))]),
            TypeExpr::Literal(PyValue::None),
        ]);
        assert_eq!(expr.to_string(), "List['Movie'] | None");

        let literal = TypeExpr::parameterized(
            "Literal",
            vec![
                TypeExpr::Literal(PyValue::Str("a".into())),
                TypeExpr::Literal(PyValue::Int(1)),
            ],
        );
        assert_eq!(literal.to_string(), "Literal['a', 1]");
    }
}
