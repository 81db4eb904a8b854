//! Demonstration harness for the Mint code generator.
//!
//! Builds a representative program AST in memory (the front end lives in a
//! separate crate), lowers it, and writes a relocatable object file. Useful
//! for eyeballing generated IR with `--dump-ir` and RUST_LOG=debug.

use clap::Parser;
use inkwell::context::Context;
use mintc::{emit_object, BinOp, Codegen, ElifBranch, Expr, Param, Stmt};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(about = "Compile a built-in Mint demo program to an object file")]
struct Args {
    /// Destination object file.
    #[arg(short, long, default_value = "output.o")]
    output: PathBuf,

    /// Print the generated LLVM IR to stderr.
    #[arg(long)]
    dump_ir: bool,
}

fn int(value: i64) -> Expr {
    Expr::IntLiteral { value }
}

fn var(name: &str) -> Expr {
    Expr::Var {
        name: name.to_string(),
    }
}

fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// fn add(a: i8, b: i32) -> i32 { return a + b; }
///
/// let n: i32 = add(1, 2);
/// if n == 4 { print(0); } elif n == 3 { print(n); } else { print(1); }
/// let i: i32 = 0;
/// while i < 5 { print(i * 10); i = i + 1; }
fn demo_program() -> Vec<Stmt> {
    vec![
        Stmt::Fn {
            name: "add".to_string(),
            params: vec![
                Param {
                    name: "a".to_string(),
                    ty: "i8".to_string(),
                },
                Param {
                    name: "b".to_string(),
                    ty: "i32".to_string(),
                },
            ],
            return_type: "i32".to_string(),
            body: Box::new(Stmt::Block {
                statements: vec![Stmt::Return {
                    expr: binary(BinOp::Add, var("a"), var("b")),
                }],
            }),
        },
        Stmt::Let {
            name: "n".to_string(),
            ty: "i32".to_string(),
            init: Expr::Call {
                name: "add".to_string(),
                args: vec![int(1), int(2)],
            },
        },
        Stmt::If {
            condition: binary(BinOp::Eq, var("n"), int(4)),
            then_branch: Box::new(Stmt::Block {
                statements: vec![Stmt::Print { expr: int(0) }],
            }),
            elif_branches: vec![ElifBranch {
                condition: binary(BinOp::Eq, var("n"), int(3)),
                branch: Stmt::Block {
                    statements: vec![Stmt::Print { expr: var("n") }],
                },
            }],
            else_branch: Some(Box::new(Stmt::Block {
                statements: vec![Stmt::Print { expr: int(1) }],
            })),
        },
        Stmt::Let {
            name: "i".to_string(),
            ty: "i32".to_string(),
            init: int(0),
        },
        Stmt::While {
            condition: binary(BinOp::Lt, var("i"), int(5)),
            body: Box::new(Stmt::Block {
                statements: vec![
                    Stmt::Print {
                        expr: binary(BinOp::Mul, var("i"), int(10)),
                    },
                    Stmt::Expression {
                        expr: Expr::Assign {
                            name: "i".to_string(),
                            value: Box::new(binary(BinOp::Add, var("i"), int(1))),
                        },
                    },
                ],
            }),
        },
    ]
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let context = Context::create();
    let codegen = Codegen::new(&context, "demo");
    let module = match codegen.compile(&demo_program()) {
        Ok(module) => module,
        Err(e) => {
            eprintln!("codegen error: {e}");
            process::exit(1);
        }
    };

    if args.dump_ir {
        module.print_to_stderr();
    }

    if let Err(e) = emit_object(&module, &args.output) {
        eprintln!("emit error: {e}");
        process::exit(1);
    }
    println!("wrote {}", args.output.display());
}
