mod config;
mod runner;

use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use compiler::{CompileError, DiagnosticError, Options};
use reportify::parser::ParseError;

use crate::config::{Config, FormatName};

#[derive(Parser)]
#[command(
    name = "reportify",
    version,
    about = "Compile an annotated program and its captured output into a report"
)]
struct Cli {
    /// Print the C++ header that defines the directive macros, then exit
    #[arg(short = 'g', long)]
    generate_header: bool,

    /// Output markup (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<FormatName>,

    /// Configuration file (default: ./reportify.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip out-of-order sentinels instead of failing
    #[arg(long)]
    lenient: bool,

    /// Print the compiled block list to stderr before rendering
    #[arg(long)]
    dump_blocks: bool,

    /// Disable colored error output
    #[arg(long)]
    no_color: bool,

    /// Annotated source file
    source: Option<PathBuf>,

    /// Instrumented executable built from the source
    executable: Option<PathBuf>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            process::exit(code);
        }
    };

    if cli.generate_header {
        println!("{}", reportify::directive::header::generate());
        return;
    }

    let (Some(source), Some(executable)) = (&cli.source, &cli.executable) else {
        eprintln!("error: not enough arguments");
        eprintln!();
        eprintln!("{}", Cli::command().render_help());
        process::exit(1);
    };

    do_compile(&cli, source, executable);
}

fn do_compile(cli: &Cli, source_path: &Path, executable: &Path) {
    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let writer = StandardStream::stderr(color_choice);
    let term_config = term::Config::default();

    if !source_path.exists() {
        eprintln!("error: source file '{}' does not exist", source_path.display());
        process::exit(1);
    }
    if !executable.exists() {
        eprintln!("error: executable file '{}' does not exist", executable.display());
        process::exit(1);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match Config::load(cli.config.as_deref(), &cwd) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Read source
    let source = match std::fs::read_to_string(source_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", source_path.display(), e);
            process::exit(1);
        }
    };

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(source_path.display().to_string(), source.clone());

    let program = reportify::parser::Parser::new(source, file_id).parse();
    emit_parse_warnings(&writer, &term_config, &files, &program.warnings);

    // Run the instrumented program
    let captured = match runner::run(executable) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    if !captured.status.success() {
        let warning = DiagnosticError::unlocated_warning(format!(
            "'{}' exited with {}; compiling the output it produced",
            executable.display(),
            captured.status
        ));
        emit_diagnostic_error(&writer, &term_config, &files, &warning);
    }

    let options = Options {
        strict: config.strict && !cli.lenient,
        base_dir: cwd,
        code_language: config.style.code_language.clone(),
    };
    let (document, warnings) =
        match compiler::compile_with_options(&program, &captured.stdout, &options) {
            Ok(compiled) => compiled,
            Err(error) => {
                emit_diagnostic_error(&writer, &term_config, &files, &error);
                process::exit(1);
            }
        };
    emit_diagnostics(&writer, &term_config, &files, &warnings);

    // --dump-blocks: show the resolved blocks
    if cli.dump_blocks {
        eprintln!("{:#?}", document.blocks);
    }

    let format = cli.format.unwrap_or(config.format);
    let rendered = compiler::render(&document, format.into(), &config.render_style());
    emit_diagnostics(&writer, &term_config, &files, &rendered.warnings);

    print!("{}", rendered.text);
}

fn emit_parse_warnings(
    writer: &StandardStream,
    config: &term::Config,
    files: &SimpleFiles<String, String>,
    warnings: &[ParseError],
) {
    for warning in warnings {
        let diagnostic = warning.to_diagnostic();
        let _ = term::emit_to_write_style(&mut writer.lock(), config, files, &diagnostic);
    }
}

fn emit_diagnostic_error(
    writer: &StandardStream,
    config: &term::Config,
    files: &SimpleFiles<String, String>,
    error: &DiagnosticError,
) {
    if let Some(span) = &error.span {
        let severity = if error.is_warning {
            Severity::Warning
        } else {
            Severity::Error
        };
        let diagnostic = Diagnostic::new(severity)
            .with_message(error.to_string())
            .with_labels(vec![Label::primary(error.source_id, span.clone())])
            .with_notes(notes_for(&error.error));
        let _ = term::emit_to_write_style(&mut writer.lock(), config, files, &diagnostic);
    } else {
        let prefix = if error.is_warning { "warning" } else { "compile error" };
        eprintln!("{}: {}", prefix, error);
    }
}

fn emit_diagnostics(
    writer: &StandardStream,
    config: &term::Config,
    files: &SimpleFiles<String, String>,
    diagnostics: &[DiagnosticError],
) {
    for diag in diagnostics {
        emit_diagnostic_error(writer, config, files, diag);
    }
}

/// Hints attached to errors whose fix is usually on the program side.
fn notes_for(error: &CompileError) -> Vec<String> {
    match error {
        CompileError::SentinelMismatch { .. } | CompileError::SentinelNotFound { .. } => vec![
            "the program must print sentinels in the order their directives appear in the source"
                .to_string(),
            "include the header from `reportify --generate-header`, or pass --lenient to skip out-of-order sentinels"
                .to_string(),
        ],
        CompileError::MalformedSpan { .. } => {
            vec!["SPAN sentinels have the form `SPAN: title:file:start:end`".to_string()]
        }
        _ => Vec::new(),
    }
}
