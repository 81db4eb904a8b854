// This module provides the Codegen driver that lowers a validated Mint AST into an LLVM
// module using inkwell. Codegen owns the module, the instruction builder, and the scope
// environment; the active function is threaded through statement generation as an
// explicit FnCtx argument rather than mutable compiler-wide state, so nested function
// generation restores the caller's context on return. Top-level statements are assembled
// into a synthesized void main() and the outermost sequence is closed with a terminating
// return. The completed module is dumped as human-readable IR at debug level before it
// is handed to backend emission. Expression lowering lives in expr.rs and statement /
// control-flow lowering in stmt.rs; both are impl blocks on this struct.

//! AST to LLVM IR lowering for Mint.
//!
//! The generator traverses the AST depth-first on a single control path,
//! producing an in-memory LLVM module ready for backend emission.

mod expr;
mod stmt;

use crate::ast::Stmt;
use crate::error::CodegenResult;
use crate::scope::ScopeStack;
use crate::types::IntWidth;
use inkwell::builder::Builder;
use inkwell::context::Context;
use inkwell::module::Module;
use inkwell::types::IntType;
use inkwell::values::FunctionValue;
use inkwell::AddressSpace;

/// Generation context for the function currently being emitted.
///
/// Passed explicitly through statement generation; nested function
/// generation builds a fresh context and the caller's is untouched.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FnCtx<'ctx> {
    /// Function new basic blocks are appended to.
    pub function: FunctionValue<'ctx>,
    /// Declared return type and signedness; `None` for the synthesized
    /// void main wrapping the top-level sequence.
    pub ret: Option<(IntType<'ctx>, bool)>,
}

/// The Mint code generator.
pub struct Codegen<'ctx> {
    pub(crate) context: &'ctx Context,
    pub(crate) module: Module<'ctx>,
    pub(crate) builder: Builder<'ctx>,
    pub(crate) scopes: ScopeStack<'ctx>,
}

impl<'ctx> Codegen<'ctx> {
    /// Create a generator with an empty module and the external print
    /// primitive already declared.
    pub fn new(context: &'ctx Context, module_name: &str) -> Self {
        let module = context.create_module(module_name);
        let builder = context.create_builder();
        let codegen = Self {
            context,
            module,
            builder,
            scopes: ScopeStack::new(),
        };
        codegen.declare_printf();
        codegen
    }

    /// Lower a whole program into the module and return it.
    ///
    /// Top-level statements run inside a synthesized `void main()`; the
    /// outermost sequence is closed with a terminating return.
    pub fn compile(mut self, program: &[Stmt]) -> CodegenResult<Module<'ctx>> {
        log::info!("🔧 Compiling {} top-level statements", program.len());

        let main_type = self.context.void_type().fn_type(&[], false);
        let main_fn = self.module.add_function("main", main_type, None);
        let entry = self.context.append_basic_block(main_fn, "entry");
        self.builder.position_at_end(entry);

        let ctx = FnCtx {
            function: main_fn,
            ret: None,
        };
        for stmt in program {
            self.gen_stmt(ctx, stmt)?;
        }
        self.builder.build_return(None)?;

        log::debug!(
            "📦 Generated module IR:\n{}",
            self.module.print_to_string().to_string()
        );
        Ok(self.module)
    }

    /// Declare the external variadic `printf` the print statement lowers to.
    fn declare_printf(&self) {
        let ptr_type = self.context.i8_type().ptr_type(AddressSpace::default());
        let printf_type = self.context.i32_type().fn_type(&[ptr_type.into()], true);
        self.module.add_function("printf", printf_type, None);
    }

    /// LLVM integer type for a declared width.
    pub(crate) fn int_type(&self, width: IntWidth) -> IntType<'ctx> {
        self.context.custom_width_int_type(width.bits)
    }
}
