//! crema-drv - Compiler driver and CLI.
//!
//! Wires `crema-ast` -> `crema-sem` -> `crema-ir` together behind the thin
//! CLI spec.md §6 asks for: `-h` help, `-f NAME` picks a fixture (see
//! [`fixtures`] - there is no lexer/parser in this workspace, so `-f` names
//! a pre-built AST rather than a path to source text), `-p` stop after
//! parse+print, `-s` stop after semantic analysis, `-S OUT` write IR text,
//! `-o NAME` output program name (recorded for an external codegen stage;
//! this driver does not link), `-v` verbose phase tracing.
//!
//! Exit-code policy (spec.md §7): 0 on success, 1 on any fatal diagnostic or
//! driver-level error (bad flags, unknown fixture, I/O failure).

pub mod fixtures;

use std::fmt;
use std::path::PathBuf;

use crema_util::diagnostic::Handler;

/// Driver configuration, built by [`parse_args`] from the process argv.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub fixture: Option<String>,
    pub stop_after_parse: bool,
    pub stop_after_sem: bool,
    pub ir_output: Option<PathBuf>,
    pub output_name: Option<String>,
    pub verbose: bool,
    pub help: bool,
}

const USAGE: &str = "\
usage: crema -f NAME [options]

  -h            print this help and exit
  -f NAME       load the named AST fixture (see below)
  -p            stop after parsing; print the AST
  -s            stop after semantic analysis
  -S OUT        write the emitted IR as text to OUT
  -o NAME       name of the program an external code generator should produce
  -v            verbose phase tracing on stderr

fixtures:";

/// Parses CLI arguments into a [`Config`]. Manual flag parsing, no
/// argument-parsing crate - matching the rest of this workspace's
/// dependency set.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Config, CompileError> {
    let mut config = Config::default();
    let mut iter = args.into_iter();

    fn take_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CompileError> {
        iter.next()
            .ok_or_else(|| CompileError::InvalidArguments(format!("{flag} requires a value")))
    }

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => config.help = true,
            "-f" => config.fixture = Some(take_value("-f", &mut iter)?),
            "-p" => config.stop_after_parse = true,
            "-s" => config.stop_after_sem = true,
            "-S" => config.ir_output = Some(PathBuf::from(take_value("-S", &mut iter)?)),
            "-o" => config.output_name = Some(take_value("-o", &mut iter)?),
            "-v" => config.verbose = true,
            other => {
                return Err(CompileError::InvalidArguments(format!(
                    "unrecognized flag `{other}`"
                )))
            }
        }
    }

    Ok(config)
}

/// A compilation session: configuration plus the diagnostic sink threaded
/// through every phase (spec.md §5's "root context struct passed explicitly
/// through all pass functions" - no process-wide singleton).
pub struct Session {
    pub config: Config,
    pub handler: Handler,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            config,
            handler: Handler::new(),
        }
    }

    /// Runs the pipeline up to whatever stop point `self.config` names.
    pub fn compile(&mut self) -> Result<(), CompileError> {
        let name = self
            .config
            .fixture
            .clone()
            .ok_or_else(|| CompileError::InvalidArguments("missing required -f NAME".into()))?;

        if self.config.verbose {
            eprintln!("loading fixture: {name}");
        }

        let program = fixtures::load(&name).ok_or_else(|| CompileError::FixtureNotFound(name.clone()))?;

        if self.config.stop_after_parse {
            println!("{}", crema_ast::pretty_print(&program));
            return Ok(());
        }

        if self.config.verbose {
            eprintln!("running semantic analysis...");
        }

        let ok = crema_sem::analyze(&program, &self.handler);
        if !ok {
            self.print_diagnostics();
            return Err(CompileError::CompilationFailed);
        }

        if self.config.stop_after_sem {
            self.print_diagnostics();
            return Ok(());
        }

        if self.config.verbose {
            eprintln!("emitting ir...");
        }

        let module = crema_ir::emit_module(&program, &self.handler);
        self.print_diagnostics();
        if self.handler.has_errors() {
            return Err(CompileError::CompilationFailed);
        }

        if let Some(path) = &self.config.ir_output {
            if self.config.verbose {
                eprintln!("writing ir text to {}", path.display());
            }
            std::fs::write(path, module.to_ir_text())
                .map_err(|e| CompileError::IoError(path.clone(), e))?;
        }

        Ok(())
    }

    fn print_diagnostics(&self) {
        for diag in self.handler.diagnostics() {
            eprintln!("{}: {}", diag.level, diag.message);
        }
    }
}

/// Parses argv, handles `-h`, and runs a [`Session`] - the body of the
/// `crema` binary's `main`.
pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<(), CompileError> {
    let config = parse_args(args)?;

    if config.help {
        println!("{USAGE}");
        for name in fixtures::NAMES {
            println!("  {name}");
        }
        return Ok(());
    }

    Session::new(config).compile()
}

/// Driver-level failures: bad flags, an unknown fixture, I/O errors, or a
/// fatal diagnostic from analysis/emission. Distinct from the compiler
/// diagnostics themselves, which are reported through [`Handler`] and never
/// propagate as a Rust error (spec.md §7's "no exceptions thrown across pass
/// boundaries").
#[derive(Debug)]
pub enum CompileError {
    InvalidArguments(String),
    FixtureNotFound(String),
    CompilationFailed,
    IoError(PathBuf, std::io::Error),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidArguments(s) => write!(f, "invalid arguments: {s}"),
            CompileError::FixtureNotFound(name) => write!(f, "no such fixture: `{name}`"),
            CompileError::CompilationFailed => write!(f, "compilation failed"),
            CompileError::IoError(path, e) => write!(f, "I/O error for {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for CompileError {}
