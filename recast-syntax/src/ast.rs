//! Typed Python syntax tree.

use miette::SourceSpan;

/// Byte range of a node in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from((span.start, span.len()))
    }
}

/// A parsed Python module
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `class Name(bases, keywords): body`
    ClassDef {
        name: String,
        bases: Vec<Expr>,
        keywords: Vec<Keyword>,
        body: Vec<Stmt>,
    },
    /// `target: annotation` or `target: annotation = value`
    AnnAssign {
        target: Expr,
        annotation: Expr,
        value: Option<Expr>,
    },
    /// `a = b = value`
    Assign { targets: Vec<Expr>, value: Expr },
    FunctionDef { name: String, body: Vec<Stmt> },
    /// A bare expression, including docstrings
    Expr(Expr),
    Pass,
    /// if/for/while/with/try/match; every nested block is flattened into `body`
    Compound { kind: String, body: Vec<Stmt> },
    Other { kind: String },
}

impl StmtKind {
    /// Short human-readable name of the statement kind
    pub fn describe(&self) -> &str {
        match self {
            StmtKind::ClassDef { .. } => "class definition",
            StmtKind::AnnAssign { .. } => "annotated assignment",
            StmtKind::Assign { .. } => "assignment",
            StmtKind::FunctionDef { .. } => "function definition",
            StmtKind::Expr(expr) if matches!(expr.kind, ExprKind::Constant(Constant::Str(_))) => {
                "docstring"
            }
            StmtKind::Expr(_) => "expression statement",
            StmtKind::Pass => "pass statement",
            StmtKind::Compound { kind, .. } | StmtKind::Other { kind } => kind,
        }
    }
}

/// A keyword argument; `name` is `None` for `**mapping`
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub name: Option<String>,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Name(String),
    Attribute {
        value: Box<Expr>,
        attr: String,
    },
    /// `value[a, b]`; each comma-separated element is one slice entry
    Subscript {
        value: Box<Expr>,
        slice: Vec<Expr>,
    },
    Tuple(Vec<Expr>),
    List(Vec<Expr>),
    /// Entries in source order
    Dict(Vec<DictEntry>),
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
        keywords: Vec<Keyword>,
    },
    BinOp {
        left: Box<Expr>,
        op: String,
        right: Box<Expr>,
    },
    Constant(Constant),
    Other {
        kind: String,
    },
}

impl ExprKind {
    /// Short human-readable name of the expression kind
    pub fn describe(&self) -> &str {
        match self {
            ExprKind::Name(_) => "name",
            ExprKind::Attribute { .. } => "attribute",
            ExprKind::Subscript { .. } => "subscript",
            ExprKind::Tuple(_) => "tuple",
            ExprKind::List(_) => "list",
            ExprKind::Dict(_) => "dict",
            ExprKind::Call { .. } => "call",
            ExprKind::BinOp { .. } => "binary operation",
            ExprKind::Constant(constant) => constant.describe(),
            ExprKind::Other { kind } => kind,
        }
    }
}

impl Expr {
    /// Dotted name for `Name` and `Attribute` chains (`typing.TypedDict`)
    pub fn dotted_name(&self) -> Option<String> {
        match &self.kind {
            ExprKind::Name(name) => Some(name.clone()),
            ExprKind::Attribute { value, attr } => {
                value.dotted_name().map(|base| format!("{}.{}", base, attr))
            }
            _ => None,
        }
    }

    /// Last segment of a `Name` or `Attribute` chain
    pub fn last_segment(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Name(name) => Some(name),
            ExprKind::Attribute { attr, .. } => Some(attr),
            _ => None,
        }
    }

    pub fn as_str_constant(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Constant(Constant::Str(s)) => Some(s),
            _ => None,
        }
    }
}

/// One `key: value` entry of a dict display; `key` is `None` for `**mapping`
#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry {
    pub key: Option<Expr>,
    pub value: Expr,
}

/// Literal constants. Numbers keep their source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    None,
    Bool(bool),
    Int(String),
    Float(String),
    Str(String),
    Ellipsis,
}

impl Constant {
    pub fn describe(&self) -> &'static str {
        match self {
            Constant::None => "None",
            Constant::Bool(_) => "bool",
            Constant::Int(_) => "int",
            Constant::Float(_) => "float",
            Constant::Str(_) => "string",
            Constant::Ellipsis => "ellipsis",
        }
    }
}
