// This module defines the AST node types the code generator consumes. The front end
// (lexer and parser, separate crates) produces these nodes already validated, so the
// generator never sees malformed trees. Expressions and statements are closed sum types
// dispatched by pattern matching, which keeps the variant set exhaustively checkable at
// compile time. Type annotations are carried as the front end's textual type tags and
// resolved only through the width table in types.rs, never inferred from literal values.
// BinOp covers the operator tokens the parser can produce; the modulo operator is parsed
// upstream but not supported by this stage and fails with UnsupportedOperator.

//! AST node types for the Mint language.

/// Expression nodes. Every expression produces an integer value when generated.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Integer literal. Materializes as a 64-bit signed constant.
    IntLiteral { value: i64 },
    /// Binary operation over two sub-expressions.
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Variable reference, resolved through the scope environment.
    Var { name: String },
    /// `name = value`. Stores into an existing binding and yields the stored value.
    Assign { name: String, value: Box<Expr> },
    /// Function call with arguments evaluated left to right.
    Call { name: String, args: Vec<Expr> },
}

/// Binary operator tokens as the parser hands them over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Parsed by the front end, not supported by code generation.
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Statement nodes.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// Expression evaluated for its side effects; the value is discarded.
    Expression { expr: Expr },
    /// `print(expr);` — formats the value through the external printf primitive.
    Print { expr: Expr },
    /// `let name: ty = init;` — declares and initializes a new binding.
    Let {
        name: String,
        ty: String,
        init: Expr,
    },
    /// `{ ... }` — statements in a fresh lexical scope.
    Block { statements: Vec<Stmt> },
    /// `if cond { } elif cond { } else { }` chain.
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        elif_branches: Vec<ElifBranch>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `fn name(params) -> ty { body }`.
    Fn {
        name: String,
        params: Vec<Param>,
        return_type: String,
        body: Box<Stmt>,
    },
    /// `return expr;`
    Return { expr: Expr },
    /// `while cond { body }`. No break or continue exists in the language.
    While { condition: Expr, body: Box<Stmt> },
}

/// One `elif` arm of an if-chain.
#[derive(Debug, Clone)]
pub struct ElifBranch {
    pub condition: Expr,
    pub branch: Stmt,
}

/// A function parameter: name plus declared type tag.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}
