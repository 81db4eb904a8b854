// This module provides expression lowering for the Mint code generator. Each expression
// variant produces an integer value: literals materialize as 64-bit signed constants,
// variable references load from their storage slot, and binary operations apply the
// integer promotion rule before the operator — when operand widths differ the narrower
// side is sign-extended up to the wider width, never truncated, and equal widths emit
// no cast at all. Division and the relational operators are signed; relational results
// are i1. Assignment casts the evaluated value to the target slot's declared width and
// signedness and yields the post-cast value. Calls resolve through the module's function
// registry, evaluate arguments left to right, and cast each argument to the callee's
// declared parameter type, the same cast-on-assignment rule a let binding follows.

//! Expression lowering: literals, variables, binary operators, assignment, calls.

use super::Codegen;
use crate::ast::{BinOp, Expr};
use crate::error::{CodegenError, CodegenResult};
use inkwell::types::{BasicMetadataTypeEnum, IntType};
use inkwell::values::{BasicMetadataValueEnum, IntValue};
use inkwell::IntPredicate;

impl<'ctx> Codegen<'ctx> {
    pub(crate) fn gen_expr(&self, expr: &Expr) -> CodegenResult<IntValue<'ctx>> {
        match expr {
            Expr::IntLiteral { value } => {
                Ok(self.context.i64_type().const_int(*value as u64, true))
            }

            Expr::Var { name } => {
                let slot = self
                    .scopes
                    .get(name)
                    .ok_or_else(|| CodegenError::UndefinedSymbol { name: name.clone() })?;
                let loaded = self.builder.build_load(slot.ptr, name)?;
                Ok(loaded.into_int_value())
            }

            Expr::Binary { op, left, right } => {
                let left = self.gen_expr(left)?;
                let right = self.gen_expr(right)?;
                let (left, right) = self.promote(left, right)?;
                self.gen_binop(*op, left, right)
            }

            Expr::Assign { name, value } => {
                let value = self.gen_expr(value)?;
                let slot = self
                    .scopes
                    .get(name)
                    .ok_or_else(|| CodegenError::UndefinedSymbol { name: name.clone() })?;
                let value = self.cast_to(value, slot.ty, slot.signed)?;
                self.builder.build_store(slot.ptr, value)?;
                Ok(value)
            }

            Expr::Call { name, args } => {
                let callee = self
                    .module
                    .get_function(name)
                    .ok_or_else(|| CodegenError::UndefinedFunction { name: name.clone() })?;
                log::trace!("📞 Call to {} with {} args", name, args.len());

                let param_types = callee.get_type().get_param_types();
                let mut arg_values: Vec<BasicMetadataValueEnum<'ctx>> =
                    Vec::with_capacity(args.len());
                for (i, arg) in args.iter().enumerate() {
                    let mut value = self.gen_expr(arg)?;
                    // Bind to the declared parameter type, like any other store
                    // into declared storage.
                    if let Some(BasicMetadataTypeEnum::IntType(param_ty)) = param_types.get(i) {
                        value = self.cast_to(value, *param_ty, true)?;
                    }
                    arg_values.push(value.into());
                }

                let call = self.builder.build_call(callee, &arg_values, "calltmp")?;
                let returned = call.try_as_basic_value().left().ok_or_else(|| {
                    CodegenError::CodeGeneration {
                        reason: format!("call to {name} produced no value"),
                    }
                })?;
                Ok(returned.into_int_value())
            }
        }
    }

    fn gen_binop(
        &self,
        op: BinOp,
        left: IntValue<'ctx>,
        right: IntValue<'ctx>,
    ) -> CodegenResult<IntValue<'ctx>> {
        let b = &self.builder;
        let value = match op {
            BinOp::Add => b.build_int_add(left, right, "addtmp")?,
            BinOp::Sub => b.build_int_sub(left, right, "subtmp")?,
            BinOp::Mul => b.build_int_mul(left, right, "multmp")?,
            BinOp::Div => b.build_int_signed_div(left, right, "divtmp")?,
            BinOp::Eq => b.build_int_compare(IntPredicate::EQ, left, right, "eqtmp")?,
            BinOp::Ne => b.build_int_compare(IntPredicate::NE, left, right, "netmp")?,
            BinOp::Lt => b.build_int_compare(IntPredicate::SLT, left, right, "lttmp")?,
            BinOp::Le => b.build_int_compare(IntPredicate::SLE, left, right, "letmp")?,
            BinOp::Gt => b.build_int_compare(IntPredicate::SGT, left, right, "gttmp")?,
            BinOp::Ge => b.build_int_compare(IntPredicate::SGE, left, right, "getmp")?,
            BinOp::Mod => return Err(CodegenError::UnsupportedOperator { op }),
        };
        Ok(value)
    }

    /// Reconcile differing operand widths before a binary operation: the
    /// narrower operand is sign-extended to the wider width. Matching widths
    /// pass through untouched.
    fn promote(
        &self,
        left: IntValue<'ctx>,
        right: IntValue<'ctx>,
    ) -> CodegenResult<(IntValue<'ctx>, IntValue<'ctx>)> {
        let left_width = left.get_type().get_bit_width();
        let right_width = right.get_type().get_bit_width();
        if left_width == right_width {
            Ok((left, right))
        } else if left_width > right_width {
            let right =
                self.builder
                    .build_int_cast_sign_flag(right, left.get_type(), true, "sexttmp")?;
            Ok((left, right))
        } else {
            let left =
                self.builder
                    .build_int_cast_sign_flag(left, right.get_type(), true, "sexttmp")?;
            Ok((left, right))
        }
    }

    /// Cast a value to a declared storage type. No-op when the widths match.
    pub(crate) fn cast_to(
        &self,
        value: IntValue<'ctx>,
        ty: IntType<'ctx>,
        signed: bool,
    ) -> CodegenResult<IntValue<'ctx>> {
        if value.get_type().get_bit_width() == ty.get_bit_width() {
            return Ok(value);
        }
        Ok(self
            .builder
            .build_int_cast_sign_flag(value, ty, signed, "casttmp")?)
    }
}
