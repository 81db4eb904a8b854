// This module provides statement lowering and control-flow lowering for the Mint code
// generator. Straight-line statements (expression, print, let) evaluate through the
// expression generator; let resolves its declared type from the width table, casts the
// initializer, and binds a fresh storage slot in the current scope. Blocks push and pop
// the scope environment unconditionally around their statements, error paths included.
// If/elif/else chains and while loops lower to basic-block graphs: every block of a
// construct is allocated before any branch into it is emitted, since branch targets must
// be resolvable forward; bodies converge on a merge (or loop-test) block and generation
// resumes at the single re-convergence point. Function statements assemble a signature
// from declared type tags, register the function in the module, copy parameters into
// mutable storage slots, and generate the body in a fresh scope before restoring the
// caller's insert block. No return-path verification exists: a body that fails to
// return on every path produces a malformed function, a known gap inherited from the
// language design.

//! Statement lowering: scoping, control flow, and function assembly.

use super::{Codegen, FnCtx};
use crate::ast::{Param, Stmt};
use crate::error::{CodegenError, CodegenResult};
use crate::scope::StorageSlot;
use crate::types::{width_of, IntWidth};
use inkwell::basic_block::BasicBlock;
use inkwell::types::{BasicMetadataTypeEnum, IntType};
use inkwell::values::{BasicMetadataValueEnum, FunctionValue, IntValue};
use inkwell::IntPredicate;

impl<'ctx> Codegen<'ctx> {
    pub(crate) fn gen_stmt(&mut self, ctx: FnCtx<'ctx>, stmt: &Stmt) -> CodegenResult<()> {
        match stmt {
            Stmt::Expression { expr } => {
                self.gen_expr(expr)?;
                Ok(())
            }

            Stmt::Print { expr } => {
                let value = self.gen_expr(expr)?;
                let printf = self.module.get_function("printf").ok_or_else(|| {
                    CodegenError::UndefinedFunction {
                        name: "printf".to_string(),
                    }
                })?;
                let format = self.builder.build_global_string_ptr("%d\n", "fmt")?;
                let args: Vec<BasicMetadataValueEnum<'ctx>> =
                    vec![format.as_pointer_value().into(), value.into()];
                self.builder.build_call(printf, &args, "printf")?;
                Ok(())
            }

            Stmt::Let { name, ty, init } => {
                let width = width_of(ty)?;
                let int_type = self.int_type(width);
                let value = self.gen_expr(init)?;
                let value = self.cast_to(value, int_type, width.signed)?;
                let alloca = self.builder.build_alloca(int_type, name)?;
                self.builder.build_store(alloca, value)?;
                self.scopes.define(
                    name,
                    StorageSlot {
                        ptr: alloca,
                        ty: int_type,
                        signed: width.signed,
                    },
                );
                Ok(())
            }

            Stmt::Block { statements } => {
                self.scopes.push();
                let result = statements
                    .iter()
                    .try_for_each(|stmt| self.gen_stmt(ctx, stmt));
                self.scopes.pop();
                result
            }

            Stmt::If {
                condition,
                then_branch,
                elif_branches,
                else_branch,
            } => {
                let condition = self.gen_expr(condition)?;
                let condition = self.as_bool(condition)?;

                // Allocate every block of the chain before wiring any branch;
                // targets must exist before they are referenced.
                let then_block = self.context.append_basic_block(ctx.function, "then");
                let elif_blocks: Vec<(BasicBlock<'ctx>, BasicBlock<'ctx>)> = elif_branches
                    .iter()
                    .map(|_| {
                        (
                            self.context.append_basic_block(ctx.function, "elif"),
                            self.context.append_basic_block(ctx.function, "elifcont"),
                        )
                    })
                    .collect();
                let else_block = else_branch
                    .as_ref()
                    .map(|_| self.context.append_basic_block(ctx.function, "else"));
                let merge_block = self.context.append_basic_block(ctx.function, "ifcont");

                let first_alternative = elif_blocks
                    .first()
                    .map(|(test, _)| *test)
                    .or(else_block)
                    .unwrap_or(merge_block);
                self.builder
                    .build_conditional_branch(condition, then_block, first_alternative)?;

                self.builder.position_at_end(then_block);
                self.gen_stmt(ctx, then_branch)?;
                self.branch_if_open(merge_block)?;

                for (i, elif) in elif_branches.iter().enumerate() {
                    let (test_block, body_block) = elif_blocks[i];
                    let next = elif_blocks
                        .get(i + 1)
                        .map(|(test, _)| *test)
                        .or(else_block)
                        .unwrap_or(merge_block);

                    self.builder.position_at_end(test_block);
                    let cond = self.gen_expr(&elif.condition)?;
                    let cond = self.as_bool(cond)?;
                    self.builder
                        .build_conditional_branch(cond, body_block, next)?;

                    self.builder.position_at_end(body_block);
                    self.gen_stmt(ctx, &elif.branch)?;
                    self.branch_if_open(merge_block)?;
                }

                if let (Some(else_block), Some(else_branch)) = (else_block, else_branch.as_deref())
                {
                    self.builder.position_at_end(else_block);
                    self.gen_stmt(ctx, else_branch)?;
                    self.branch_if_open(merge_block)?;
                }

                // The merge block is the sole re-convergence point; generation
                // continues from here.
                self.builder.position_at_end(merge_block);
                Ok(())
            }

            Stmt::While { condition, body } => {
                let test_block = self.context.append_basic_block(ctx.function, "loop");
                let body_block = self.context.append_basic_block(ctx.function, "loopbody");
                let after_block = self.context.append_basic_block(ctx.function, "afterloop");

                self.builder.build_unconditional_branch(test_block)?;
                self.builder.position_at_end(test_block);
                let cond = self.gen_expr(condition)?;
                let cond = self.as_bool(cond)?;
                self.builder
                    .build_conditional_branch(cond, body_block, after_block)?;

                self.builder.position_at_end(body_block);
                self.gen_stmt(ctx, body)?;
                self.branch_if_open(test_block)?;

                self.builder.position_at_end(after_block);
                Ok(())
            }

            Stmt::Fn {
                name,
                params,
                return_type,
                body,
            } => {
                let mut param_widths: Vec<IntWidth> = Vec::with_capacity(params.len());
                let mut param_types: Vec<BasicMetadataTypeEnum<'ctx>> =
                    Vec::with_capacity(params.len());
                for param in params {
                    let width = width_of(&param.ty)?;
                    param_widths.push(width);
                    param_types.push(self.int_type(width).into());
                }
                let ret_width = width_of(return_type)?;
                let ret_type = self.int_type(ret_width);

                let fn_type = ret_type.fn_type(&param_types, false);
                // Registered in the module before the body is generated, so
                // the function is callable from anywhere, itself included.
                let function = self.module.add_function(name, fn_type, None);
                log::debug!("🛠️ Assembling function {} ({} params)", name, params.len());

                let saved_block = self.builder.get_insert_block();
                let entry = self.context.append_basic_block(function, "entry");
                self.builder.position_at_end(entry);

                self.scopes.push();
                let result = self.gen_fn_body(
                    function,
                    params,
                    &param_widths,
                    (ret_type, ret_width.signed),
                    body,
                );
                self.scopes.pop();

                if let Some(block) = saved_block {
                    self.builder.position_at_end(block);
                }
                result
            }

            Stmt::Return { expr } => {
                let mut value = self.gen_expr(expr)?;
                if let Some((ret_type, ret_signed)) = ctx.ret {
                    value = self.cast_to(value, ret_type, ret_signed)?;
                }
                self.builder.build_return(Some(&value))?;
                Ok(())
            }
        }
    }

    /// Materialize parameters into mutable storage slots and generate the
    /// body. The caller owns the surrounding scope push/pop and insert-block
    /// save/restore.
    fn gen_fn_body(
        &mut self,
        function: FunctionValue<'ctx>,
        params: &[Param],
        param_widths: &[IntWidth],
        ret: (IntType<'ctx>, bool),
        body: &Stmt,
    ) -> CodegenResult<()> {
        for (i, param) in params.iter().enumerate() {
            let arg = function
                .get_nth_param(i as u32)
                .ok_or_else(|| CodegenError::CodeGeneration {
                    reason: format!("missing parameter {i} of {}", param.name),
                })?
                .into_int_value();
            arg.set_name(&param.name);

            // Parameters are copied into storage immediately so the body may
            // reassign them.
            let ty = self.int_type(param_widths[i]);
            let alloca = self.builder.build_alloca(ty, &param.name)?;
            self.builder.build_store(alloca, arg)?;
            self.scopes.define(
                &param.name,
                StorageSlot {
                    ptr: alloca,
                    ty,
                    signed: param_widths[i].signed,
                },
            );
        }

        self.gen_stmt(
            FnCtx {
                function,
                ret: Some(ret),
            },
            body,
        )
    }

    /// Normalize a condition value to i1. Relational results pass through;
    /// wider integers compare against zero.
    fn as_bool(&self, value: IntValue<'ctx>) -> CodegenResult<IntValue<'ctx>> {
        if value.get_type().get_bit_width() == 1 {
            return Ok(value);
        }
        let zero = value.get_type().const_zero();
        Ok(self
            .builder
            .build_int_compare(IntPredicate::NE, value, zero, "condtmp")?)
    }

    /// Jump to `target` unless the current block already terminated (a body
    /// ending in return must keep its single terminator).
    fn branch_if_open(&self, target: BasicBlock<'ctx>) -> CodegenResult<()> {
        let current =
            self.builder
                .get_insert_block()
                .ok_or_else(|| CodegenError::CodeGeneration {
                    reason: "builder is not positioned in a block".to_string(),
                })?;
        if current.get_terminator().is_none() {
            self.builder.build_unconditional_branch(target)?;
        }
        Ok(())
    }
}
