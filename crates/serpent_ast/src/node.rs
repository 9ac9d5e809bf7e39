//! AST node definitions.
//!
//! Every node type is a struct carrying a `NodeData` header (kind tag,
//! source range, arena-stable id) plus its structural children as arena
//! references. Statements and expressions are closed enums so traversal can
//! match exhaustively. No node performs resolution itself; the binder and
//! other passes key their results off `NodeId`.

use crate::version::PythonVersion;
use serpent_core::intern::{InternedString, StringInterner};
use serpent_core::text::TextRange;
use std::fmt;

/// Node ID: a stable index assigned at construction time, used to key
/// per-node side tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// The closed set of node kinds. One tag per node struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Module,
    Suite,
    // Statements
    ExprStmt,
    Assign,
    AugAssign,
    If,
    While,
    For,
    With,
    WithItem,
    Try,
    ExceptHandler,
    Raise,
    Return,
    Break,
    Continue,
    Pass,
    Assert,
    Del,
    Global,
    Nonlocal,
    Import,
    ImportAlias,
    FromImport,
    FromImportAlias,
    Exec,
    FunctionDef,
    Parameter,
    ClassDef,
    ErrorStmt,
    // Expressions
    Name,
    Member,
    Index,
    Slice,
    Call,
    Argument,
    Unary,
    Binary,
    BoolOp,
    Conditional,
    Lambda,
    ListComp,
    SetComp,
    DictComp,
    Generator,
    ComprehensionFor,
    ComprehensionIf,
    Tuple,
    List,
    Set,
    Dict,
    Starred,
    Await,
    Yield,
    YieldFrom,
    Constant,
    Parenthesized,
    ErrorExpr,
}

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, Copy)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: NodeKind,
    /// `[start, end)` source byte range.
    pub range: TextRange,
    /// Stable id assigned at construction time.
    pub id: NodeId,
}

impl NodeData {
    pub fn new(kind: NodeKind, range: TextRange, id: NodeId) -> Self {
        Self { kind, range, id }
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Module
// ============================================================================

/// The root of one compilation unit. Exactly one per tree; it is the
/// outermost scope and terminal in every lookup chain.
#[derive(Debug)]
pub struct Module<'a> {
    pub data: NodeData,
    pub body: &'a Suite<'a>,
    /// The dotted module name, e.g. `"os.path"`.
    pub module_name: String,
    /// Language version this tree was produced for.
    pub version: PythonVersion,
    /// Interner shared by every identifier in the tree.
    pub interner: StringInterner,
    /// Number of node ids assigned while building this tree. Side tables
    /// can be sized to this.
    pub node_count: u32,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    Expr(ExprStmt<'a>),
    Assign(AssignStmt<'a>),
    AugAssign(AugAssignStmt<'a>),
    If(IfStmt<'a>),
    While(WhileStmt<'a>),
    For(ForStmt<'a>),
    With(WithStmt<'a>),
    Try(TryStmt<'a>),
    Raise(RaiseStmt<'a>),
    Return(ReturnStmt<'a>),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Pass(PassStmt),
    Assert(AssertStmt<'a>),
    Del(DelStmt<'a>),
    Global(GlobalStmt<'a>),
    Nonlocal(NonlocalStmt<'a>),
    Import(ImportStmt<'a>),
    FromImport(FromImportStmt<'a>),
    Exec(ExecStmt<'a>),
    FunctionDef(FunctionDef<'a>),
    ClassDef(ClassDef<'a>),
    Suite(Suite<'a>),
    Error(ErrorStmt),
}

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Expr(n) => &n.data,
            Statement::Assign(n) => &n.data,
            Statement::AugAssign(n) => &n.data,
            Statement::If(n) => &n.data,
            Statement::While(n) => &n.data,
            Statement::For(n) => &n.data,
            Statement::With(n) => &n.data,
            Statement::Try(n) => &n.data,
            Statement::Raise(n) => &n.data,
            Statement::Return(n) => &n.data,
            Statement::Break(n) => &n.data,
            Statement::Continue(n) => &n.data,
            Statement::Pass(n) => &n.data,
            Statement::Assert(n) => &n.data,
            Statement::Del(n) => &n.data,
            Statement::Global(n) => &n.data,
            Statement::Nonlocal(n) => &n.data,
            Statement::Import(n) => &n.data,
            Statement::FromImport(n) => &n.data,
            Statement::Exec(n) => &n.data,
            Statement::FunctionDef(n) => &n.data,
            Statement::ClassDef(n) => &n.data,
            Statement::Suite(n) => &n.data,
            Statement::Error(n) => &n.data,
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.data().id
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        self.data().range
    }
}

/// A sequence of statements: a module body, a function body, or any
/// indented block.
#[derive(Debug)]
pub struct Suite<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

impl<'a> Suite<'a> {
    /// The leading string-literal docstring of this suite, if any.
    pub fn docstring(&self) -> Option<InternedString> {
        match self.statements.first() {
            Some(Statement::Expr(stmt)) => match stmt.expression {
                Expression::Constant(c) => match c.value {
                    Constant::Str(s) => Some(s),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ExprStmt<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `a = b = value`. Chained targets are all assigned the same value.
#[derive(Debug)]
pub struct AssignStmt<'a> {
    pub data: NodeData,
    pub targets: NodeList<'a, Expression<'a>>,
    pub value: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct AugAssignStmt<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
    pub op: BinaryOperator,
    pub value: &'a Expression<'a>,
}

/// `if`/`elif` chains are represented as a nested `If` in the else suite.
#[derive(Debug)]
pub struct IfStmt<'a> {
    pub data: NodeData,
    pub test: &'a Expression<'a>,
    pub body: &'a Suite<'a>,
    pub orelse: Option<&'a Suite<'a>>,
}

#[derive(Debug)]
pub struct WhileStmt<'a> {
    pub data: NodeData,
    pub test: &'a Expression<'a>,
    pub body: &'a Suite<'a>,
    pub orelse: Option<&'a Suite<'a>>,
}

#[derive(Debug)]
pub struct ForStmt<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
    pub iter: &'a Expression<'a>,
    pub body: &'a Suite<'a>,
    pub orelse: Option<&'a Suite<'a>>,
}

#[derive(Debug)]
pub struct WithStmt<'a> {
    pub data: NodeData,
    pub items: NodeList<'a, WithItem<'a>>,
    pub body: &'a Suite<'a>,
}

#[derive(Debug)]
pub struct WithItem<'a> {
    pub data: NodeData,
    pub context: &'a Expression<'a>,
    /// The `as` target, if any.
    pub target: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct TryStmt<'a> {
    pub data: NodeData,
    pub body: &'a Suite<'a>,
    pub handlers: NodeList<'a, ExceptHandler<'a>>,
    pub orelse: Option<&'a Suite<'a>>,
    pub finally: Option<&'a Suite<'a>>,
}

#[derive(Debug)]
pub struct ExceptHandler<'a> {
    pub data: NodeData,
    pub test: Option<&'a Expression<'a>>,
    /// The `as` target, if any.
    pub target: Option<&'a Expression<'a>>,
    pub body: &'a Suite<'a>,
}

#[derive(Debug)]
pub struct RaiseStmt<'a> {
    pub data: NodeData,
    pub exc: Option<&'a Expression<'a>>,
    pub cause: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct ReturnStmt<'a> {
    pub data: NodeData,
    pub value: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct BreakStmt {
    pub data: NodeData,
}

#[derive(Debug)]
pub struct ContinueStmt {
    pub data: NodeData,
}

#[derive(Debug)]
pub struct PassStmt {
    pub data: NodeData,
}

#[derive(Debug)]
pub struct AssertStmt<'a> {
    pub data: NodeData,
    pub test: &'a Expression<'a>,
    pub msg: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct DelStmt<'a> {
    pub data: NodeData,
    pub targets: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct GlobalStmt<'a> {
    pub data: NodeData,
    pub names: NodeList<'a, NameExpr>,
}

#[derive(Debug)]
pub struct NonlocalStmt<'a> {
    pub data: NodeData,
    pub names: NodeList<'a, NameExpr>,
}

/// `import a.b.c as d, e`
#[derive(Debug)]
pub struct ImportStmt<'a> {
    pub data: NodeData,
    pub names: NodeList<'a, ImportAlias<'a>>,
}

/// One `a.b.c [as d]` clause of an `import` statement.
#[derive(Debug)]
pub struct ImportAlias<'a> {
    pub data: NodeData,
    /// The dotted name, one segment per element.
    pub name: NodeList<'a, InternedString>,
    pub as_name: Option<InternedString>,
}

impl<'a> ImportAlias<'a> {
    /// The name this clause introduces into the importing scope: the alias
    /// if present, otherwise the first segment of the dotted name.
    pub fn bound_name(&self) -> Option<InternedString> {
        self.as_name.or_else(|| self.name.first().copied())
    }
}

/// `from a.b import x as y, z` or `from a.b import *`
#[derive(Debug)]
pub struct FromImportStmt<'a> {
    pub data: NodeData,
    /// The dotted module path, one segment per element.
    pub module: NodeList<'a, InternedString>,
    pub names: FromImportNames<'a>,
}

#[derive(Debug)]
pub enum FromImportNames<'a> {
    /// `from m import *`
    Star,
    Names(NodeList<'a, FromImportAlias>),
}

/// One `x [as y]` clause of a `from` import.
#[derive(Debug)]
pub struct FromImportAlias {
    pub data: NodeData,
    pub name: InternedString,
    pub as_name: Option<InternedString>,
}

impl FromImportAlias {
    pub fn bound_name(&self) -> InternedString {
        self.as_name.unwrap_or(self.name)
    }
}

/// The 2.x `exec` statement: `exec code [in globals [, locals]]`.
/// With no `in` clause this is the unqualified dynamic-eval construct.
#[derive(Debug)]
pub struct ExecStmt<'a> {
    pub data: NodeData,
    pub body: &'a Expression<'a>,
    pub globals: Option<&'a Expression<'a>>,
    pub locals: Option<&'a Expression<'a>>,
}

impl<'a> ExecStmt<'a> {
    /// Whether this exec can introduce names into the enclosing scope
    /// invisibly (no explicit globals/locals mapping given).
    #[inline]
    pub fn is_unqualified(&self) -> bool {
        self.globals.is_none() && self.locals.is_none()
    }
}

#[derive(Debug)]
pub struct FunctionDef<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub decorators: NodeList<'a, Expression<'a>>,
    pub return_annotation: Option<&'a Expression<'a>>,
    pub body: &'a Suite<'a>,
}

/// Parameter kinds: `x`, keyword-only `x`, `*args`, `**kwargs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Normal,
    KeywordOnly,
    ListSplat,
    DictSplat,
}

#[derive(Debug)]
pub struct Parameter<'a> {
    pub data: NodeData,
    pub kind: ParameterKind,
    pub name: InternedString,
    /// 2.x sublist parameter: the tuple of names this parameter unpacks
    /// into. `name` then holds the synthetic positional name.
    pub sublist: Option<&'a Expression<'a>>,
    pub annotation: Option<&'a Expression<'a>>,
    pub default: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct ClassDef<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub bases: NodeList<'a, Expression<'a>>,
    pub decorators: NodeList<'a, Expression<'a>>,
    pub body: &'a Suite<'a>,
}

/// Placeholder emitted by a recovering parser. Walked as an inert leaf.
#[derive(Debug)]
pub struct ErrorStmt {
    pub data: NodeData,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Name(NameExpr),
    Member(MemberExpr<'a>),
    Index(IndexExpr<'a>),
    Slice(SliceExpr<'a>),
    Call(CallExpr<'a>),
    Unary(UnaryExpr<'a>),
    Binary(BinaryExpr<'a>),
    BoolOp(BoolOpExpr<'a>),
    Conditional(ConditionalExpr<'a>),
    Lambda(LambdaExpr<'a>),
    ListComp(ComprehensionExpr<'a>),
    SetComp(ComprehensionExpr<'a>),
    DictComp(DictCompExpr<'a>),
    Generator(ComprehensionExpr<'a>),
    Tuple(SequenceExpr<'a>),
    List(SequenceExpr<'a>),
    Set(SequenceExpr<'a>),
    Dict(DictExpr<'a>),
    Starred(StarredExpr<'a>),
    Await(AwaitExpr<'a>),
    Yield(YieldExpr<'a>),
    YieldFrom(YieldFromExpr<'a>),
    Constant(ConstantExpr),
    Parenthesized(ParenthesizedExpr<'a>),
    Error(ErrorExpr),
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Name(n) => &n.data,
            Expression::Member(n) => &n.data,
            Expression::Index(n) => &n.data,
            Expression::Slice(n) => &n.data,
            Expression::Call(n) => &n.data,
            Expression::Unary(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::BoolOp(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::Lambda(n) => &n.data,
            Expression::ListComp(n) => &n.data,
            Expression::SetComp(n) => &n.data,
            Expression::DictComp(n) => &n.data,
            Expression::Generator(n) => &n.data,
            Expression::Tuple(n) => &n.data,
            Expression::List(n) => &n.data,
            Expression::Set(n) => &n.data,
            Expression::Dict(n) => &n.data,
            Expression::Starred(n) => &n.data,
            Expression::Await(n) => &n.data,
            Expression::Yield(n) => &n.data,
            Expression::YieldFrom(n) => &n.data,
            Expression::Constant(n) => &n.data,
            Expression::Parenthesized(n) => &n.data,
            Expression::Error(n) => &n.data,
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.data().id
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        self.data().range
    }
}

/// A bare identifier use-site.
#[derive(Debug)]
pub struct NameExpr {
    pub data: NodeData,
    pub name: InternedString,
}

#[derive(Debug)]
pub struct MemberExpr<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
    pub member: InternedString,
}

#[derive(Debug)]
pub struct IndexExpr<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
    pub index: &'a Expression<'a>,
}

/// A slice appears as the index of an `IndexExpr`: `a[lower:upper:step]`.
#[derive(Debug)]
pub struct SliceExpr<'a> {
    pub data: NodeData,
    pub lower: Option<&'a Expression<'a>>,
    pub upper: Option<&'a Expression<'a>>,
    pub step: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct CallExpr<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
    pub args: NodeList<'a, Argument<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    Positional,
    Keyword(InternedString),
    ListSplat,
    DictSplat,
}

#[derive(Debug)]
pub struct Argument<'a> {
    pub data: NodeData,
    pub kind: ArgumentKind,
    pub value: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Pos,
    Neg,
    Invert,
}

#[derive(Debug)]
pub struct UnaryExpr<'a> {
    pub data: NodeData,
    pub op: UnaryOperator,
    pub operand: &'a Expression<'a>,
}

/// Arithmetic, bitwise, and comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    MatMul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    LeftShift,
    RightShift,
    BitAnd,
    BitOr,
    BitXor,
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

#[derive(Debug)]
pub struct BinaryExpr<'a> {
    pub data: NodeData,
    pub op: BinaryOperator,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOperator {
    And,
    Or,
}

#[derive(Debug)]
pub struct BoolOpExpr<'a> {
    pub data: NodeData,
    pub op: BoolOperator,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
}

/// `a if test else b`
#[derive(Debug)]
pub struct ConditionalExpr<'a> {
    pub data: NodeData,
    pub test: &'a Expression<'a>,
    pub if_true: &'a Expression<'a>,
    pub if_false: &'a Expression<'a>,
}

/// An anonymous function scope.
#[derive(Debug)]
pub struct LambdaExpr<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub body: &'a Expression<'a>,
}

/// List/set comprehensions and generator expressions share one shape:
/// an element expression plus `for`/`if` clauses in source order.
#[derive(Debug)]
pub struct ComprehensionExpr<'a> {
    pub data: NodeData,
    pub element: &'a Expression<'a>,
    pub clauses: NodeList<'a, ComprehensionClause<'a>>,
}

#[derive(Debug)]
pub struct DictCompExpr<'a> {
    pub data: NodeData,
    pub key: &'a Expression<'a>,
    pub value: &'a Expression<'a>,
    pub clauses: NodeList<'a, ComprehensionClause<'a>>,
}

#[derive(Debug)]
pub enum ComprehensionClause<'a> {
    For(ComprehensionFor<'a>),
    If(ComprehensionIf<'a>),
}

#[derive(Debug)]
pub struct ComprehensionFor<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
    pub iter: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ComprehensionIf<'a> {
    pub data: NodeData,
    pub test: &'a Expression<'a>,
}

/// Tuple, list, and set displays share one shape.
#[derive(Debug)]
pub struct SequenceExpr<'a> {
    pub data: NodeData,
    pub items: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct DictExpr<'a> {
    pub data: NodeData,
    pub items: NodeList<'a, DictItem<'a>>,
}

/// One `key: value` entry, or a `**mapping` expansion when `key` is None.
#[derive(Debug)]
pub struct DictItem<'a> {
    pub key: Option<&'a Expression<'a>>,
    pub value: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct StarredExpr<'a> {
    pub data: NodeData,
    pub target: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct AwaitExpr<'a> {
    pub data: NodeData,
    pub value: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct YieldExpr<'a> {
    pub data: NodeData,
    pub value: Option<&'a Expression<'a>>,
}

#[derive(Debug)]
pub struct YieldFromExpr<'a> {
    pub data: NodeData,
    pub value: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constant {
    None,
    Ellipsis,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(InternedString),
    Bytes(InternedString),
}

#[derive(Debug)]
pub struct ConstantExpr {
    pub data: NodeData,
    pub value: Constant,
}

/// Explicit grouping. Transparent to target binding.
#[derive(Debug)]
pub struct ParenthesizedExpr<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// Placeholder emitted by a recovering parser. Walked as an inert leaf.
#[derive(Debug)]
pub struct ErrorExpr {
    pub data: NodeData,
}
