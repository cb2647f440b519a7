//! Conversion of annotation expressions into [`TypeExpr`].

use recast_core::PyValue;
use recast_ir::TypeExpr;
use recast_syntax::{Constant, Expr, ExprKind};

use super::ExtractError;

fn unsupported(expr: &Expr) -> ExtractError {
    ExtractError::UnsupportedType {
        kind: expr.kind.describe().to_string(),
        span: expr.span.into(),
    }
}

/// Convert a field annotation.
///
/// Accepts names, dotted names, subscripts, `|` unions, `None` and string
/// forward references. Anything else is an unsupported type expression.
pub fn type_expr(expr: &Expr) -> Result<TypeExpr, ExtractError> {
    match &expr.kind {
        ExprKind::Name(_) | ExprKind::Attribute { .. } => expr
            .dotted_name()
            .map(TypeExpr::Simple)
            .ok_or_else(|| unsupported(expr)),

        ExprKind::Subscript { value, slice } => {
            let base = value.dotted_name().ok_or_else(|| unsupported(value))?;
            // `Dict[(str, int)]` means the same as `Dict[str, int]`
            let items = match slice.as_slice() {
                [Expr {
                    kind: ExprKind::Tuple(items),
                    ..
                }] if !items.is_empty() => items.as_slice(),
                items => items,
            };
            let args = items.iter().map(type_arg).collect::<Result<Vec<_>, _>>()?;
            Ok(TypeExpr::Parameterized { base, args })
        }

        ExprKind::BinOp { left, op, right } if op == "|" => {
            let mut members = Vec::new();
            for side in [left, right] {
                match type_expr(side)? {
                    TypeExpr::Union(inner) => members.extend(inner),
                    other => members.push(other),
                }
            }
            Ok(TypeExpr::Union(members))
        }

        ExprKind::Constant(Constant::None) => Ok(TypeExpr::Literal(PyValue::None)),
        ExprKind::Constant(Constant::Str(s)) => Ok(TypeExpr::Literal(PyValue::Str(s.clone()))),

        _ => Err(unsupported(expr)),
    }
}

/// Convert one subscript argument. On top of annotations, arguments may be
/// bracketed lists (`Callable[[int], str]`) and constants (`Literal[1]`, `...`).
fn type_arg(expr: &Expr) -> Result<TypeExpr, ExtractError> {
    match &expr.kind {
        ExprKind::List(items) => items
            .iter()
            .map(type_arg)
            .collect::<Result<Vec<_>, _>>()
            .map(TypeExpr::List),
        ExprKind::Constant(Constant::Bool(b)) => Ok(TypeExpr::Literal(PyValue::Bool(*b))),
        ExprKind::Constant(Constant::Int(text)) => Ok(TypeExpr::Literal(
            text.parse()
                .map(PyValue::Int)
                .unwrap_or_else(|_| PyValue::Expr(text.clone())),
        )),
        ExprKind::Constant(Constant::Float(text)) => {
            Ok(TypeExpr::Literal(PyValue::Expr(text.clone())))
        }
        ExprKind::Constant(Constant::Ellipsis) => {
            Ok(TypeExpr::Literal(PyValue::Expr("...".to_string())))
        }
        _ => type_expr(expr),
    }
}

#[cfg(test)]
mod tests {
    use recast_syntax::{StmtKind, read_python};

    use super::*;

    fn annotation(source: &str) -> Expr {
        let module = read_python(&format!("x: {}\n", source)).unwrap();
        match module.body.into_iter().next().map(|stmt| stmt.kind) {
            Some(StmtKind::AnnAssign { annotation, .. }) => annotation,
            other => panic!("expected annotated assignment, got {other:?}"),
        }
    }

    fn render(source: &str) -> String {
        type_expr(&annotation(source)).unwrap().to_string()
    }

    #[test]
    fn test_names() {
        assert_eq!(render("int"), "int");
        assert_eq!(render("typing.Any"), "typing.Any");
    }

    #[test]
    fn test_parameterized() {
        assert_eq!(render("Dict[str, int]"), "Dict[str, int]");
        assert_eq!(render("Optional[List[int]]"), "Optional[List[int]]");
        assert_eq!(render("typing.List[str]"), "typing.List[str]");
        assert_eq!(render("dict[str, list[tuple[int, ...]]]"), "dict[str, list[tuple[int, ...]]]");
    }

    #[test]
    fn test_parenthesized_tuple_flattens() {
        assert_eq!(render("Dict[(str, int)]"), "Dict[str, int]");
    }

    #[test]
    fn test_callable_and_literal() {
        assert_eq!(render("Callable[[int, str], bool]"), "Callable[[int, str], bool]");
        assert_eq!(render("Literal['a', \"b\", 1]"), "Literal['a', 'b', 1]");
    }

    #[test]
    fn test_unions_and_forward_references() {
        assert_eq!(render("int | str | None"), "int | str | None");
        assert_eq!(render("List['Movie']"), "List['Movie']");
        assert_eq!(render("'Movie'"), "'Movie'");
    }

    #[test]
    fn test_unsupported() {
        let err = type_expr(&annotation("foo()")).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedType { ref kind, .. } if kind == "call"));

        let err = type_expr(&annotation("List[foo()]")).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedType { ref kind, .. } if kind == "call"));

        let err = type_expr(&annotation("1")).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedType { ref kind, .. } if kind == "int"));
    }
}
