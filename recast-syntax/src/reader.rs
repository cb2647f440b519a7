//! Tree-sitter based Python reader.

use tracing::trace;
use tree_sitter::{Node as TsNode, Parser};

use crate::{
    ReadError,
    ast::{Constant, DictEntry, Expr, ExprKind, Keyword, Module, Span, Stmt, StmtKind},
};

/// Parse Python source into a syntax tree.
///
/// Any syntax error in the source fails the whole read; the error points at
/// the first node the parser could not make sense of.
pub fn read_python(source: &str) -> Result<Module, ReadError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_python::LANGUAGE.into())?;

    let tree = parser.parse(source, None).ok_or(ReadError::NoTree)?;
    let root = tree.root_node();

    if root.has_error() {
        let span = first_error(root)
            .map(span_of)
            .unwrap_or(Span::new(0, source.len()));
        return Err(ReadError::Syntax { span: span.into() });
    }

    let reader = Reader { source };
    Ok(Module {
        body: reader.read_block(root),
    })
}

fn first_error(node: TsNode<'_>) -> Option<TsNode<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(first_error)
}

fn span_of(node: TsNode<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

/// Named children, minus comments and line continuations
fn named_children(node: TsNode<'_>) -> Vec<TsNode<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !matches!(child.kind(), "comment" | "line_continuation"))
        .collect()
}

struct Reader<'a> {
    source: &'a str,
}

impl<'a> Reader<'a> {
    fn text(&self, node: TsNode<'_>) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    fn read_block(&self, node: TsNode<'_>) -> Vec<Stmt> {
        named_children(node)
            .into_iter()
            .map(|child| self.read_stmt(child))
            .collect()
    }

    fn read_stmt(&self, node: TsNode<'_>) -> Stmt {
        let kind = match node.kind() {
            "expression_statement" => self.read_expression_statement(node),
            "class_definition" => self.read_class(node),
            "function_definition" => StmtKind::FunctionDef {
                name: node
                    .child_by_field_name("name")
                    .map(|name| self.text(name).to_string())
                    .unwrap_or_default(),
                body: node
                    .child_by_field_name("body")
                    .map(|body| self.read_block(body))
                    .unwrap_or_default(),
            },
            "decorated_definition" => {
                if let Some(definition) = node.child_by_field_name("definition") {
                    return self.read_stmt(definition);
                }
                StmtKind::Other {
                    kind: node.kind().to_string(),
                }
            }
            "pass_statement" => StmtKind::Pass,
            "if_statement" | "for_statement" | "while_statement" | "with_statement"
            | "try_statement" | "match_statement" => {
                let mut body = Vec::new();
                self.collect_blocks(node, &mut body);
                StmtKind::Compound {
                    kind: node.kind().to_string(),
                    body,
                }
            }
            kind => {
                trace!(kind, "opaque statement");
                StmtKind::Other {
                    kind: kind.to_string(),
                }
            }
        };

        Stmt {
            kind,
            span: span_of(node),
        }
    }

    /// Flatten every block of a compound statement, including its clauses
    fn collect_blocks(&self, node: TsNode<'_>, out: &mut Vec<Stmt>) {
        for child in named_children(node) {
            match child.kind() {
                "block" => {
                    for stmt in named_children(child) {
                        if stmt.kind() == "case_clause" {
                            self.collect_blocks(stmt, out);
                        } else {
                            out.push(self.read_stmt(stmt));
                        }
                    }
                }
                kind if kind.ends_with("_clause") => self.collect_blocks(child, out),
                _ => {}
            }
        }
    }

    fn read_expression_statement(&self, node: TsNode<'_>) -> StmtKind {
        let children = named_children(node);
        match children.as_slice() {
            [single] if single.kind() == "assignment" => self.read_assignment(*single),
            [single] if single.kind() == "augmented_assignment" => StmtKind::Other {
                kind: single.kind().to_string(),
            },
            [single] => StmtKind::Expr(self.read_expr(*single)),
            items => StmtKind::Expr(Expr {
                kind: ExprKind::Tuple(items.iter().map(|item| self.read_expr(*item)).collect()),
                span: span_of(node),
            }),
        }
    }

    fn read_assignment(&self, node: TsNode<'_>) -> StmtKind {
        let Some(left) = node.child_by_field_name("left") else {
            return StmtKind::Other {
                kind: node.kind().to_string(),
            };
        };
        let target = self.read_expr(left);
        let mut right = node.child_by_field_name("right");

        if let Some(annotation) = node.child_by_field_name("type") {
            return StmtKind::AnnAssign {
                target,
                annotation: self.read_expr(annotation),
                value: right.map(|value| self.read_expr(value)),
            };
        }

        // `a = b = value` nests assignments on the right-hand side
        let mut targets = vec![target];
        while let Some(inner) = right.filter(|r| r.kind() == "assignment") {
            if let Some(left) = inner.child_by_field_name("left") {
                targets.push(self.read_expr(left));
            }
            right = inner.child_by_field_name("right");
        }

        match right {
            Some(value) => StmtKind::Assign {
                targets,
                value: self.read_expr(value),
            },
            None => StmtKind::Other {
                kind: node.kind().to_string(),
            },
        }
    }

    fn read_class(&self, node: TsNode<'_>) -> StmtKind {
        let name = node
            .child_by_field_name("name")
            .map(|name| self.text(name).to_string())
            .unwrap_or_default();

        let (bases, keywords) = node
            .child_by_field_name("superclasses")
            .map(|args| self.read_arguments(args))
            .unwrap_or_default();

        let body = node
            .child_by_field_name("body")
            .map(|body| self.read_block(body))
            .unwrap_or_default();

        StmtKind::ClassDef {
            name,
            bases,
            keywords,
            body,
        }
    }

    fn read_arguments(&self, node: TsNode<'_>) -> (Vec<Expr>, Vec<Keyword>) {
        let mut args = Vec::new();
        let mut keywords = Vec::new();

        for child in named_children(node) {
            match child.kind() {
                "keyword_argument" => {
                    if let Some(value) = child.child_by_field_name("value") {
                        keywords.push(Keyword {
                            name: child
                                .child_by_field_name("name")
                                .map(|name| self.text(name).to_string()),
                            value: self.read_expr(value),
                        });
                    }
                }
                "dictionary_splat" => keywords.push(Keyword {
                    name: None,
                    value: self.read_first_child(child),
                }),
                _ => args.push(self.read_expr(child)),
            }
        }

        (args, keywords)
    }

    fn read_first_child(&self, node: TsNode<'_>) -> Expr {
        match named_children(node).first() {
            Some(inner) => self.read_expr(*inner),
            None => self.other(node),
        }
    }

    fn other(&self, node: TsNode<'_>) -> Expr {
        Expr {
            kind: ExprKind::Other {
                kind: node.kind().to_string(),
            },
            span: span_of(node),
        }
    }

    fn read_exprs(&self, nodes: &[TsNode<'_>]) -> Vec<Expr> {
        nodes.iter().map(|node| self.read_expr(*node)).collect()
    }

    fn read_expr(&self, node: TsNode<'_>) -> Expr {
        let kind = match node.kind() {
            "identifier" => ExprKind::Name(self.text(node).to_string()),

            "attribute" => match (
                node.child_by_field_name("object"),
                node.child_by_field_name("attribute"),
            ) {
                (Some(object), Some(attr)) => ExprKind::Attribute {
                    value: Box::new(self.read_expr(object)),
                    attr: self.text(attr).to_string(),
                },
                _ => return self.other(node),
            },

            "subscript" => {
                let Some(value) = node.child_by_field_name("value") else {
                    return self.other(node);
                };
                let mut cursor = node.walk();
                let slice: Vec<_> = node.children_by_field_name("subscript", &mut cursor).collect();
                ExprKind::Subscript {
                    value: Box::new(self.read_expr(value)),
                    slice: self.read_exprs(&slice),
                }
            }

            "call" => {
                let Some(func) = node.child_by_field_name("function") else {
                    return self.other(node);
                };
                let (args, keywords) = match node.child_by_field_name("arguments") {
                    Some(arguments) if arguments.kind() == "argument_list" => {
                        self.read_arguments(arguments)
                    }
                    // A lone generator argument: `f(x for x in xs)`
                    Some(arguments) => (vec![self.read_expr(arguments)], Vec::new()),
                    None => Default::default(),
                };
                ExprKind::Call {
                    func: Box::new(self.read_expr(func)),
                    args,
                    keywords,
                }
            }

            "tuple" | "expression_list" | "pattern_list" | "tuple_pattern" => {
                ExprKind::Tuple(self.read_exprs(&named_children(node)))
            }
            "list" | "list_pattern" => ExprKind::List(self.read_exprs(&named_children(node))),
            "dictionary" => ExprKind::Dict(self.read_dict_entries(node)),

            "binary_operator" => match (
                node.child_by_field_name("left"),
                node.child_by_field_name("operator"),
                node.child_by_field_name("right"),
            ) {
                (Some(left), Some(op), Some(right)) => ExprKind::BinOp {
                    left: Box::new(self.read_expr(left)),
                    op: self.text(op).to_string(),
                    right: Box::new(self.read_expr(right)),
                },
                _ => return self.other(node),
            },

            // Grouping only; `(a, b)` is a tuple node
            "parenthesized_expression" => return self.read_first_child(node),

            "string" => match self.string_value(node) {
                Ok(value) => ExprKind::Constant(Constant::Str(value)),
                Err(kind) => ExprKind::Other {
                    kind: kind.to_string(),
                },
            },
            "concatenated_string" => {
                let parts: Result<Vec<_>, _> = named_children(node)
                    .into_iter()
                    .map(|part| self.string_value(part))
                    .collect();
                match parts {
                    Ok(parts) => ExprKind::Constant(Constant::Str(parts.concat())),
                    Err(kind) => ExprKind::Other {
                        kind: kind.to_string(),
                    },
                }
            }
            "integer" => ExprKind::Constant(Constant::Int(self.text(node).to_string())),
            "float" => ExprKind::Constant(Constant::Float(self.text(node).to_string())),
            "true" => ExprKind::Constant(Constant::Bool(true)),
            "false" => ExprKind::Constant(Constant::Bool(false)),
            "none" => ExprKind::Constant(Constant::None),
            "ellipsis" => ExprKind::Constant(Constant::Ellipsis),

            // Annotation-only grammar nodes, normalized to ordinary expressions
            "type" => return self.read_first_child(node),
            "generic_type" => {
                let children = named_children(node);
                let base = children.iter().find(|c| c.kind() != "type_parameter");
                let params = children.iter().find(|c| c.kind() == "type_parameter");
                match (base, params) {
                    (Some(base), Some(params)) => ExprKind::Subscript {
                        value: Box::new(self.read_expr(*base)),
                        slice: self.read_exprs(&named_children(*params)),
                    },
                    _ => return self.other(node),
                }
            }
            "union_type" => match named_children(node).as_slice() {
                [left, right] => ExprKind::BinOp {
                    left: Box::new(self.read_expr(*left)),
                    op: "|".to_string(),
                    right: Box::new(self.read_expr(*right)),
                },
                _ => return self.other(node),
            },
            "member_type" => match named_children(node).as_slice() {
                [value, attr] => ExprKind::Attribute {
                    value: Box::new(self.read_expr(*value)),
                    attr: self.text(*attr).to_string(),
                },
                _ => return self.other(node),
            },

            _ => return self.other(node),
        };

        Expr {
            kind,
            span: span_of(node),
        }
    }

    fn read_dict_entries(&self, node: TsNode<'_>) -> Vec<DictEntry> {
        let mut entries = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "pair" => {
                    if let (Some(key), Some(value)) = (
                        child.child_by_field_name("key"),
                        child.child_by_field_name("value"),
                    ) {
                        entries.push(DictEntry {
                            key: Some(self.read_expr(key)),
                            value: self.read_expr(value),
                        });
                    }
                }
                "dictionary_splat" => entries.push(DictEntry {
                    key: None,
                    value: self.read_first_child(child),
                }),
                kind => trace!(kind, "skipping dict element"),
            }
        }
        entries
    }

    /// Decode a plain string literal. Returns the node kind to report for
    /// literals that are not plain text (f-strings and bytes).
    fn string_value(&self, node: TsNode<'_>) -> Result<String, &'static str> {
        let text = self.text(node);
        let Some(prefix_len) = text.find(['\'', '"']) else {
            return Err("string");
        };
        let prefix = text[..prefix_len].to_ascii_lowercase();
        if prefix.contains('f') {
            return Err("f-string");
        }
        if prefix.contains('b') {
            return Err("bytes");
        }

        let body = &text[prefix_len..];
        let quote = if body.starts_with("\"\"\"") || body.starts_with("'''") {
            &body[..3]
        } else {
            &body[..1]
        };
        let inner = body
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
            .ok_or("string")?;

        if prefix.contains('r') {
            Ok(inner.to_string())
        } else {
            unescape(inner)
        }
    }
}

/// Resolve Python backslash escapes. Unknown escapes are kept verbatim.
/// Named `\N{...}` escapes are not resolved and reject the literal.
fn unescape(s: &str) -> Result<String, &'static str> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\n') => {}
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(first @ '0'..='7') => {
                let mut code = first.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match chars.next_if(|c| ('0'..='7').contains(c)) {
                        Some(digit) => code = code * 8 + digit.to_digit(8).unwrap_or_default(),
                        None => break,
                    }
                }
                match char::from_u32(code) {
                    Some(decoded) => out.push(decoded),
                    None => return Err("string"),
                }
            }
            Some('N') if chars.peek() == Some(&'{') => return Err("named-escape string"),
            Some('a') => out.push('\u{7}'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some(kind @ ('x' | 'u' | 'U')) => {
                let width = match kind {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = (0..width).filter_map(|_| chars.next_if(char::is_ascii_hexdigit)).collect();
                match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if digits.len() == width => out.push(decoded),
                    _ => {
                        out.push('\\');
                        out.push(kind);
                        out.push_str(&digits);
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_stmt(source: &str) -> StmtKind {
        let mut module = read_python(source).unwrap();
        assert_eq!(module.body.len(), 1, "expected one statement in {source:?}");
        module.body.remove(0).kind
    }

    fn value_of(source: &str) -> ExprKind {
        match single_stmt(source) {
            StmtKind::Assign { value, .. } => value.kind,
            other => panic!("expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_class_with_bases_and_keywords() {
        let StmtKind::ClassDef {
            name,
            bases,
            keywords,
            body,
        } = single_stmt("class Movie(typing.TypedDict, total=False):\n    title: str\n")
        else {
            panic!("expected class");
        };

        assert_eq!(name, "Movie");
        assert_eq!(bases.len(), 1);
        assert_eq!(bases[0].dotted_name().as_deref(), Some("typing.TypedDict"));
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].name.as_deref(), Some("total"));
        assert_eq!(keywords[0].value.kind, ExprKind::Constant(Constant::Bool(false)));
        assert!(matches!(body[0].kind, StmtKind::AnnAssign { value: None, .. }));
    }

    #[test]
    fn test_annotated_assignment_with_value() {
        let StmtKind::AnnAssign {
            target,
            annotation,
            value,
        } = single_stmt("year: Optional[int] = None\n")
        else {
            panic!("expected annotated assignment");
        };

        assert_eq!(target.kind, ExprKind::Name("year".into()));
        let ExprKind::Subscript { value: base, slice } = annotation.kind else {
            panic!("expected subscript annotation");
        };
        assert_eq!(base.kind, ExprKind::Name("Optional".into()));
        assert_eq!(slice.len(), 1);
        assert_eq!(value.map(|v| v.kind), Some(ExprKind::Constant(Constant::None)));
    }

    #[test]
    fn test_multi_argument_subscript() {
        let StmtKind::AnnAssign { annotation, .. } = single_stmt("x: Dict[str, int]\n") else {
            panic!("expected annotated assignment");
        };
        let ExprKind::Subscript { slice, .. } = annotation.kind else {
            panic!("expected subscript");
        };
        let names: Vec<_> = slice.iter().filter_map(Expr::dotted_name).collect();
        assert_eq!(names, ["str", "int"]);
    }

    #[test]
    fn test_union_annotation() {
        let StmtKind::AnnAssign { annotation, .. } = single_stmt("x: int | None\n") else {
            panic!("expected annotated assignment");
        };
        let ExprKind::BinOp { left, op, right } = annotation.kind else {
            panic!("expected binary operation, got {:?}", annotation.kind);
        };
        assert_eq!(op, "|");
        assert_eq!(left.kind, ExprKind::Name("int".into()));
        assert_eq!(right.kind, ExprKind::Constant(Constant::None));
    }

    #[test]
    fn test_dict_call_keeps_entry_order() {
        let ExprKind::Call { func, args, .. } =
            value_of("Movie = TypedDict('Movie', {'b': int, \"a\": str, **extra})\n")
        else {
            panic!("expected call");
        };

        assert_eq!(func.kind, ExprKind::Name("TypedDict".into()));
        assert_eq!(args[0].as_str_constant(), Some("Movie"));
        let ExprKind::Dict(entries) = &args[1].kind else {
            panic!("expected dict");
        };
        let keys: Vec<_> = entries
            .iter()
            .map(|e| e.key.as_ref().and_then(Expr::as_str_constant))
            .collect();
        assert_eq!(keys, [Some("b"), Some("a"), None]);
    }

    #[test]
    fn test_chained_assignment() {
        let StmtKind::Assign { targets, .. } = single_stmt("a = b = 1\n") else {
            panic!("expected assignment");
        };
        let names: Vec<_> = targets.iter().filter_map(Expr::dotted_name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(
            value_of("x = 'it\\'s'\n"),
            ExprKind::Constant(Constant::Str("it's".into()))
        );
        assert_eq!(
            value_of("x = r'a\\nb'\n"),
            ExprKind::Constant(Constant::Str("a\\nb".into()))
        );
        assert_eq!(
            value_of("x = \"\"\"doc\"\"\"\n"),
            ExprKind::Constant(Constant::Str("doc".into()))
        );
        assert_eq!(
            value_of("x = 'a' \"b\"\n"),
            ExprKind::Constant(Constant::Str("ab".into()))
        );
        assert_eq!(
            value_of("x = '\\x41\\u00e9'\n"),
            ExprKind::Constant(Constant::Str("Aé".into()))
        );
        assert_eq!(
            value_of("x = '\\101\\0\\1234'\n"),
            ExprKind::Constant(Constant::Str("A\0S4".into()))
        );
        assert_eq!(
            value_of("x = '\\N{BULLET}'\n"),
            ExprKind::Other {
                kind: "named-escape string".into()
            }
        );
        assert_eq!(
            value_of("x = f'{y}'\n"),
            ExprKind::Other {
                kind: "f-string".into()
            }
        );
    }

    #[test]
    fn test_comments_and_decorators() {
        let source = "\
# leading comment
@decorator
class A:  # trailing
    # inside
    x: int
";
        let StmtKind::ClassDef { name, body, .. } = single_stmt(source) else {
            panic!("expected class");
        };
        assert_eq!(name, "A");
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_docstring_is_expression_statement() {
        let StmtKind::ClassDef { body, .. } = single_stmt("class A:\n    \"\"\"Doc.\"\"\"\n    x: int\n")
        else {
            panic!("expected class");
        };
        assert_eq!(body[0].kind.describe(), "docstring");
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let source = "x = 1\nclass A:\n    pass\n";
        let module = read_python(source).unwrap();
        let span = module.body[1].span;
        assert_eq!(source[span.start..span.end].trim_end(), "class A:\n    pass");
    }

    #[test]
    fn test_syntax_error() {
        let err = read_python("class A(:\n    x: int\n").unwrap_err();
        assert!(matches!(err, ReadError::Syntax { .. }));
    }
}
