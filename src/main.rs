use std::{fs, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use clap::Parser;
use icss::{
    check,
    compile,
    errors::errors::{CompileError, Error},
    render_diagnostics,
    render_error,
};
use log::{error, info, LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "icss", version, about = "Checks and compiles ICSS stylesheets into plain CSS")]
struct Cli {
    /// Stylesheets to compile
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<PathBuf>,

    /// Write the generated css to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only report semantic errors, do not generate css
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if cli.output.is_some() && cli.inputs.len() > 1 {
        eprintln!("--output can only be used with a single input file");
        return ExitCode::FAILURE;
    }

    let start = Instant::now();
    let mut failed = false;

    for path in &cli.inputs {
        let result = if cli.check {
            check_file(path)
        } else {
            compile_file(path, cli.output.as_deref())
        };

        if let Err(message) = result {
            eprintln!("{}", message);
            failed = true;
        }
    }

    info!("Processed {} file(s) in {:?}", cli.inputs.len(), start.elapsed());

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();

    if verbose > 0 {
        let level = match verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        builder.filter_level(level);
    }

    builder.init();
}

fn read_source(path: &Path) -> Result<String, CompileError> {
    fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn check_file(path: &Path) -> Result<(), String> {
    let source = read_source(path).map_err(|error| error.to_string())?;

    match check(&source, &file_name(path)) {
        Ok((_, diagnostics)) if diagnostics.is_empty() => {
            println!("{}: ok", path.display());
            Ok(())
        }
        Ok((_, diagnostics)) => Err(render_diagnostics(&diagnostics, &source)),
        Err(error) => Err(render_fatal(&error, &source)),
    }
}

fn compile_file(path: &Path, output: Option<&Path>) -> Result<(), String> {
    let source = read_source(path).map_err(|error| error.to_string())?;

    let css = match compile(&source, &file_name(path)) {
        Ok(css) => css,
        Err(CompileError::Syntax(error)) | Err(CompileError::Evaluation(error)) => {
            return Err(render_fatal(&error, &source));
        }
        Err(CompileError::Semantic(diagnostics)) => {
            error!("{} failed type checking", path.display());
            return Err(render_diagnostics(&diagnostics, &source));
        }
        Err(error @ CompileError::Io { .. }) => return Err(error.to_string()),
    };

    match output {
        Some(output) => {
            fs::write(output, css).map_err(|source| {
                CompileError::Io {
                    path: output.display().to_string(),
                    source,
                }
                .to_string()
            })?;
            info!("Wrote {}", output.display());
        }
        None => print!("{}", css),
    }

    Ok(())
}

fn render_fatal(error: &Error, source: &str) -> String {
    render_error(error.get_error_name(), &error.get_tip(), error.get_position(), source)
}
