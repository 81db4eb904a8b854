//! mintc - code generation for the Mint language.
//!
//! Mint is a small imperative language with fixed-width integer types,
//! functions, conditionals, while loops, and a print primitive. This crate
//! is the code-generation stage of its compiler: it lowers a typed AST into
//! LLVM IR and drives the LLVM backend to produce a relocatable object file.
//!
//! # Primary Usage
//!
//! ```ignore
//! use inkwell::context::Context;
//! use mintc::{Codegen, emit_object};
//!
//! let context = Context::create();
//! let module = Codegen::new(&context, "program").compile(&program)?;
//! emit_object(&module, Path::new("output.o"))?;
//! ```
//!
//! # Architecture
//!
//! - [`ast`] - AST node types handed over by the front end
//! - [`types`] - the type width table for the eight integer types
//! - [`scope`] - lexical scope environment mapping names to storage
//! - [`codegen`] - expression/statement lowering and function assembly
//! - [`emit`] - object-file emission through the LLVM backend
//!
//! Lexing and parsing are external collaborators: this crate assumes a
//! validated AST and has no tolerance for malformed trees.

pub mod ast;
pub mod codegen;
pub mod emit;
pub mod error;
pub mod scope;
pub mod types;

pub use ast::{BinOp, ElifBranch, Expr, Param, Stmt};
pub use codegen::Codegen;
pub use emit::emit_object;
pub use error::{CodegenError, CodegenResult};
pub use scope::{ScopeStack, StorageSlot};
pub use types::{width_of, IntWidth};
