//! scopec - lexical-scope analyzer demo driver
//!
//! Usage: scopec [OPTIONS] [DEMO]
//!
//! There is no parser in this crate; the driver hand-assembles one of the
//! built-in demo programs, runs the analyzer over it, and renders every
//! violation as it is found.

use clap::{Parser, ValueEnum};
use scope_check::ast::{BinaryOp, Expr, ExprKind, FuncDecl, Param, Program, Stmt, StmtKind, VarDecl};
use scope_check::common::{DiagnosticReporter, Span};
use scope_check::sema::ScopeAnalyzer;
use std::process;

/// Demo program to analyze
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum Demo {
    /// Well-scoped program: globals, calls, control flow, shadowing
    Valid,
    /// Program exhibiting each scope violation once
    Faulty,
    /// Everything combined into a single program
    #[default]
    Full,
}

#[derive(Parser, Debug)]
#[command(name = "scopec")]
#[command(version)]
#[command(about = "Lexical-scope analyzer for a small C-like language", long_about = None)]
struct Args {
    /// Demo program to analyze
    #[arg(value_enum, default_value = "full")]
    demo: Demo,

    /// Suppress per-violation diagnostics
    #[arg(short, long)]
    quiet: bool,

    /// Narrate the program under analysis
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let program = match args.demo {
        Demo::Valid => valid_program(),
        Demo::Faulty => faulty_program(),
        Demo::Full => full_program(),
    };

    if args.verbose {
        eprintln!(
            "Analyzing {} global(s), {} function(s)",
            program.globals.len(),
            program.functions.len()
        );
        for var in &program.globals {
            eprintln!("  global {} {}", var.ty, var.name);
        }
        for func in &program.functions {
            eprintln!(
                "  function {} {}() with {} parameter(s)",
                func.return_type,
                func.name,
                func.params.len()
            );
        }
    }

    let mut analyzer = if args.quiet {
        ScopeAnalyzer::new()
    } else {
        ScopeAnalyzer::with_sink(Box::new(DiagnosticReporter::new()))
    };

    if analyzer.check(&program) {
        println!("scope analysis passed");
        Ok(())
    } else {
        anyhow::bail!(
            "scope analysis failed with {} violation(s)",
            analyzer.error_count()
        )
    }
}

// =========================================================================
// Demo programs (hand-assembled trees)
// =========================================================================

fn sp() -> Span {
    Span::default()
}

fn lit(ty: &str, value: &str) -> Expr {
    Expr::new(
        ExprKind::Literal {
            ty: ty.into(),
            value: value.into(),
        },
        sp(),
    )
}

fn name(n: &str) -> Expr {
    Expr::new(ExprKind::Name(n.into()), sp())
}

fn call(n: &str, args: Vec<Expr>) -> Expr {
    Expr::new(
        ExprKind::Call {
            name: n.into(),
            args,
        },
        sp(),
    )
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        sp(),
    )
}

fn block(stmts: Vec<Stmt>) -> Stmt {
    Stmt::new(StmtKind::Block(stmts), sp())
}

fn declare(var: VarDecl) -> Stmt {
    Stmt::new(StmtKind::Declaration(var), sp())
}

fn assign(target: &str, value: Expr) -> Stmt {
    Stmt::new(
        StmtKind::Assign {
            name: target.into(),
            value,
        },
        sp(),
    )
}

fn ret(expr: Expr) -> Stmt {
    Stmt::new(StmtKind::Return(Some(expr)), sp())
}

/// int calculate(int a, int b) { return a * b; }
fn calculate_func() -> FuncDecl {
    FuncDecl::new(
        "calculate",
        "int",
        vec![Param::new("a", "int", sp()), Param::new("b", "int", sp())],
        sp(),
    )
    .with_body(block(vec![ret(binary(BinaryOp::Mul, name("a"), name("b")))]))
}

/// int main() { int x = 5; int y = calculate(x, 10); return y; }
fn main_func() -> FuncDecl {
    FuncDecl::new("main", "int", vec![], sp()).with_body(block(vec![
        declare(VarDecl::new("x", "int", sp()).with_init(lit("int", "5"))),
        declare(
            VarDecl::new("y", "int", sp())
                .with_init(call("calculate", vec![name("x"), lit("int", "10")])),
        ),
        ret(name("y")),
    ]))
}

/// void control_test() { if (MAX_SIZE > 0) { int temp = MAX_SIZE; }
/// while (true) {} for (int i = 0; i < 10; i = i + 1) {} }
fn control_func() -> FuncDecl {
    FuncDecl::new("control_test", "void", vec![], sp()).with_body(block(vec![
        Stmt::new(
            StmtKind::If {
                condition: binary(BinaryOp::Gt, name("MAX_SIZE"), lit("int", "0")),
                then_branch: Box::new(block(vec![declare(
                    VarDecl::new("temp", "int", sp()).with_init(name("MAX_SIZE")),
                )])),
                else_branch: None,
            },
            sp(),
        ),
        Stmt::new(
            StmtKind::While {
                condition: lit("bool", "true"),
                body: Box::new(block(vec![])),
            },
            sp(),
        ),
        Stmt::new(
            StmtKind::For {
                init: Some(Box::new(declare(
                    VarDecl::new("i", "int", sp()).with_init(lit("int", "0")),
                ))),
                condition: Some(binary(BinaryOp::Lt, name("i"), lit("int", "10"))),
                increment: Some(Box::new(assign(
                    "i",
                    binary(BinaryOp::Add, name("i"), lit("int", "1")),
                ))),
                body: Box::new(block(vec![])),
            },
            sp(),
        ),
    ]))
}

/// void assignment_test() { int y = 10; int x = 0; x = y + 5; }
fn assignment_func() -> FuncDecl {
    FuncDecl::new("assignment_test", "void", vec![], sp()).with_body(block(vec![
        declare(VarDecl::new("y", "int", sp()).with_init(lit("int", "10"))),
        declare(VarDecl::new("x", "int", sp()).with_init(lit("int", "0"))),
        assign("x", binary(BinaryOp::Add, name("y"), lit("int", "5"))),
    ]))
}

/// void shadow_test() { int x = 1; { int x = 2; } }
fn shadow_func() -> FuncDecl {
    FuncDecl::new("shadow_test", "void", vec![], sp()).with_body(block(vec![
        declare(VarDecl::new("x", "int", sp()).with_init(lit("int", "1"))),
        block(vec![declare(
            VarDecl::new("x", "int", sp()).with_init(lit("int", "2")),
        )]),
    ]))
}

/// void test_redefinition() { int x = 5; int x = 10; }
fn redefinition_func() -> FuncDecl {
    FuncDecl::new("test_redefinition", "void", vec![], sp()).with_body(block(vec![
        declare(VarDecl::new("x", "int", sp()).with_init(lit("int", "5"))),
        declare(VarDecl::new("x", "int", sp()).with_init(lit("int", "10"))),
    ]))
}

/// Everything well-scoped; analysis passes
fn valid_program() -> Program {
    Program::new(
        vec![
            VarDecl::new("MAX_SIZE", "int", sp()).with_init(lit("int", "100")),
            VarDecl::new("PI", "float", sp()).with_init(lit("float", "3.14")),
        ],
        vec![
            calculate_func(),
            main_func(),
            control_func(),
            assignment_func(),
            shadow_func(),
        ],
    )
}

/// Each of the four violations once; analysis reports all of them
fn faulty_program() -> Program {
    Program::new(
        vec![
            // int result = unknown_var * 2;
            VarDecl::new("result", "int", sp()).with_init(binary(
                BinaryOp::Mul,
                name("unknown_var"),
                lit("int", "2"),
            )),
            // int value = unknown_func();
            VarDecl::new("value", "int", sp()).with_init(call("unknown_func", vec![])),
        ],
        vec![
            calculate_func(),
            redefinition_func(),
            // void calculate() {} — redefines the function above
            FuncDecl::new("calculate", "void", vec![], sp()),
        ],
    )
}

/// The valid and faulty demos as one translation unit; four violations
fn full_program() -> Program {
    Program::new(
        vec![
            VarDecl::new("MAX_SIZE", "int", sp()).with_init(lit("int", "100")),
            VarDecl::new("PI", "float", sp()).with_init(lit("float", "3.14")),
            VarDecl::new("result", "int", sp()).with_init(binary(
                BinaryOp::Mul,
                name("unknown_var"),
                lit("int", "2"),
            )),
            VarDecl::new("value", "int", sp()).with_init(call("unknown_func", vec![])),
        ],
        vec![
            calculate_func(),
            main_func(),
            redefinition_func(),
            FuncDecl::new("calculate", "void", vec![], sp()),
            control_func(),
            assignment_func(),
            shadow_func(),
        ],
    )
}
