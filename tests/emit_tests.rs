//! Tests for backend emission.
//!
//! Emission is an opaque LLVM step; the contract under test is the shape of
//! the hand-off: success writes exactly one non-empty object file, failure
//! reports an error and leaves nothing behind.

use inkwell::context::Context;
use mintc::{emit_object, BinOp, Codegen, CodegenError, Expr, Stmt};
use std::fs;
use std::path::PathBuf;

fn demo_program() -> Vec<Stmt> {
    vec![
        Stmt::Let {
            name: "x".to_string(),
            ty: "i32".to_string(),
            init: Expr::Binary {
                op: BinOp::Add,
                left: Box::new(Expr::IntLiteral { value: 2 }),
                right: Box::new(Expr::IntLiteral { value: 3 }),
            },
        },
        Stmt::Print {
            expr: Expr::Var {
                name: "x".to_string(),
            },
        },
    ]
}

#[test]
fn emits_a_single_nonempty_object_file() {
    let _ = env_logger::builder().is_test(true).try_init();
    let context = Context::create();
    let module = Codegen::new(&context, "emit_test")
        .compile(&demo_program())
        .unwrap();

    let path = std::env::temp_dir().join("mintc_emit_test.o");
    let _ = fs::remove_file(&path);

    emit_object(&module, &path).unwrap();

    let metadata = fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0, "object file must not be empty");
    let _ = fs::remove_file(&path);
}

#[test]
fn open_failure_reports_and_leaves_no_artifact() {
    let context = Context::create();
    let module = Codegen::new(&context, "emit_fail_test")
        .compile(&demo_program())
        .unwrap();

    let path: PathBuf = std::env::temp_dir()
        .join("mintc_no_such_dir")
        .join("out.o");

    match emit_object(&module, &path) {
        Err(CodegenError::FileOpen { .. }) => {}
        other => panic!("expected FileOpen, got {other:?}"),
    }
    assert!(!path.exists(), "failed emission must not leave a partial file");
}
