// This module defines error types for the Mint code generator using the thiserror crate
// for idiomatic Rust error handling. CodegenError is the main error enum covering every
// failure the generation stage can surface: unknown type tags, unresolved symbol and
// function names, operators outside the supported set, backend target-resolution and
// output-file failures, and internal code-generation invariant breaks. Each variant
// carries relevant context (names, operators, reasons) for diagnostics. Builder-level
// failures from inkwell convert transparently. The module also provides CodegenResult<T>
// as a convenience type alias for Result<T, CodegenError>. All AST-traversal errors are
// unrecoverable at the point they occur: generation aborts the compilation unit and the
// error propagates to the caller unchanged.

//! Error types for the Mint code generator.
//!
//! Using thiserror for more idiomatic error handling.

use crate::ast::BinOp;
use thiserror::Error;

/// Main error type for Mint code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Unknown type: {name}")]
    UnknownType {
        name: String,
    },

    #[error("Undefined symbol: {name}")]
    UndefinedSymbol {
        name: String,
    },

    #[error("Undefined function: {name}")]
    UndefinedFunction {
        name: String,
    },

    #[error("Unsupported operator: {op:?}")]
    UnsupportedOperator {
        op: BinOp,
    },

    #[error("Target resolution failed: {reason}")]
    TargetResolution {
        reason: String,
    },

    #[error("Could not open output file: {reason}")]
    FileOpen {
        reason: String,
    },

    #[error("Code generation failed: {reason}")]
    CodeGeneration {
        reason: String,
    },

    #[error(transparent)]
    Builder(#[from] inkwell::builder::BuilderError),
}

/// Result type alias for code generation operations.
pub type CodegenResult<T> = Result<T, CodegenError>;
