mod fixture;
mod report;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use formcheck::FormValidator;
use formdom::Document;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use fixture::{Fixture, FixtureError};

/// Run a form fixture through the validation engine.
#[derive(Debug, Parser)]
#[command(name = "formcheck", version)]
struct Cli {
    /// JSON fixture describing the document, config and user edits.
    fixture: PathBuf,

    /// Bind to this form instead of the one named in the fixture.
    #[arg(long)]
    form: Option<String>,

    /// Fire a blur event on this field before submitting. Repeatable.
    #[arg(long = "blur", value_name = "FIELD")]
    blur: Vec<String>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) {
    let result = match &cli.log_file {
        Some(path) => match File::create(path) {
            Ok(file) => WriteLogger::init(cli.log_level, Config::default(), file),
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path.display(), e);
                return;
            }
        },
        None => TermLogger::init(
            cli.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Everything one run printed, and whether the form was submitted.
#[derive(Debug)]
struct RunOutput {
    lines: Vec<String>,
    allowed: bool,
}

fn run(cli: &Cli) -> Result<RunOutput, FixtureError> {
    let fixture = Fixture::load(&cli.fixture)?;
    let form_id = cli.form.clone().unwrap_or(fixture.form);

    let document = Document::new(fixture.document);
    let mut validator = FormValidator::bind(document, form_id, fixture.config)?;

    for edit in &fixture.edits {
        if !validator.document_mut().apply(edit) {
            log::warn!("Edit did not apply: {:?}", edit);
        }
    }

    let mut lines = Vec::new();
    for field_id in &cli.blur {
        let result = validator.on_blur(field_id);
        lines.push(report::blur_line(field_id, result.as_ref()));
    }

    let outcome = validator.on_submit();
    lines.extend(report::submit_lines(&validator, &outcome));

    Ok(RunOutput {
        lines,
        allowed: outcome.is_allowed(),
    })
}

/// 0 when the submission went through, 1 when it was blocked, 2 when the
/// fixture could not be loaded or bound.
fn exit_code(result: &Result<RunOutput, FixtureError>) -> u8 {
    match result {
        Ok(output) if output.allowed => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = run(&cli);
    match &result {
        Ok(output) => {
            for line in &output.lines {
                println!("{line}");
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
    ExitCode::from(exit_code(&result))
}
