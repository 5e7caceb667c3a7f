//! # vnuser-cli
//!
//! Command-line interface for turning Vietnamese staff names into usernames.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vnuser_core::{
    compute_usernames, describe_columns, describe_worksheets, find_column, is_valid_domain,
    process_parsed_document, sample_vietnamese_names, ColumnDescriptor, ProcessingConfig,
    ProcessingOptions, ProcessingSummary, UsernameResult, WizardStep, WorksheetDescriptor,
};
use vnuser_sheet::{Book, DocumentFormat, Sheet};

/// vnuser - Vietnamese names to usernames and emails
#[derive(Parser)]
#[command(name = "vnuser")]
#[command(author, version, about = "Generate usernames and emails from Vietnamese staff names", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (table, json, csv)
    #[arg(short = 'f', long = "format", default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List the worksheets of a document
    Sheets {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List the columns of a worksheet with sample values
    Columns {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Worksheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Treat the first row as data
        #[arg(long)]
        no_header: bool,
    },

    /// Show the generated usernames without writing anything
    Preview {
        #[arg(value_name = "FILE", required_unless_present = "sample")]
        file: Option<PathBuf>,

        /// Use the built-in sample names instead of a document
        #[arg(long, conflicts_with = "file")]
        sample: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Write a copy of the document with the generated columns
    Process {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: processed_<name>_<date>.<ext> next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Step through upload, configure and preview
    Interactive,
}

/// Flags that build a `ProcessingConfig`. Flags win over `--config`.
#[derive(Args, Debug, Clone, Default)]
struct SettingsArgs {
    /// Processing configuration JSON file
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Worksheet name (default: first sheet)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Zero-based index of the name column
    #[arg(short, long, conflicts_with = "column_name")]
    column: Option<usize>,

    /// Header text of the name column
    #[arg(long)]
    column_name: Option<String>,

    /// Treat the first row as data
    #[arg(long)]
    no_header: bool,

    /// Email domain; adds an Email column
    #[arg(short, long)]
    domain: Option<String>,

    /// Compose emails even when the domain fails validation
    #[arg(long)]
    allow_invalid_domain: bool,
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Pretty table output (default)
    #[default]
    Table,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Warnings always reach stderr; --verbose adds pipeline progress
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Command::Sheets { file } => {
            let (_, book) = load_document(&file).await?;
            print_worksheets(&describe_worksheets(&book), cli.format)
        }
        Command::Columns {
            file,
            sheet,
            no_header,
        } => {
            let (_, book) = load_document(&file).await?;
            let name = sheet.unwrap_or_else(|| first_sheet_name(&book));
            let sheet = book
                .get_sheet(&name)
                .with_context(|| format!("Worksheet \"{name}\" not found"))?;
            print_columns(&describe_columns(sheet, !no_header), cli.format)
        }
        Command::Preview {
            sample: true,
            settings,
            ..
        } => {
            let base = load_config_file(settings.config.as_deref()).await?;
            let domain = check_domain(
                settings.domain.or(base.and_then(|c| c.domain)),
                settings.allow_invalid_domain,
            );
            let options = ProcessingOptions {
                include_emails: domain.is_some(),
                domain,
            };
            let results = compute_usernames(sample_vietnamese_names().as_slice(), &options);
            print_results(&results, cli.format)
        }
        Command::Preview { file, settings, .. } => {
            let file = file.context("A document is required unless --sample is given")?;
            let (format, book) = load_document(&file).await?;
            let base = load_config_file(settings.config.as_deref()).await?;
            let config = resolve_config(&settings, base, &book)?;
            let processed = process_parsed_document(&book, format, &config)?;
            print_results(&processed.results, cli.format)
        }
        Command::Process {
            file,
            output,
            settings,
        } => {
            let (format, book) = load_document(&file).await?;
            let base = load_config_file(settings.config.as_deref()).await?;
            let config = resolve_config(&settings, base, &book)?;
            let processed = process_parsed_document(&book, format, &config)?;

            let output = output.unwrap_or_else(|| {
                default_output_path(&file, format, Local::now().date_naive())
            });
            tokio::fs::write(&output, &processed.bytes)
                .await
                .with_context(|| format!("Failed to write file: {}", output.display()))?;

            eprintln!(
                "{} {} ({})",
                "Wrote".green().bold(),
                output.display(),
                processed.summary
            );
            Ok(())
        }
        Command::Interactive => run_wizard().await,
    }
}

/// Read and parse a document, detecting its format from the extension.
async fn load_document(path: &Path) -> Result<(DocumentFormat, Book)> {
    let format = DocumentFormat::from_path(path)?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let book = format
        .parse(&bytes)
        .with_context(|| format!("Failed to parse {format} file: {}", path.display()))?;
    tracing::info!(file = %path.display(), sheets = book.sheet_count(), "loaded document");
    Ok((format, book))
}

/// Load a `ProcessingConfig` JSON file when one is given.
async fn load_config_file(path: Option<&Path>) -> Result<Option<ProcessingConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = ProcessingConfig::from_json_str(&json)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(Some(config))
}

fn first_sheet_name(book: &Book) -> String {
    book.sheet_names()
        .first()
        .map(|s| (*s).to_string())
        .unwrap_or_default()
}

/// Merge flags over an optional config file, filling sheet and column from the document.
fn resolve_config(
    settings: &SettingsArgs,
    base: Option<ProcessingConfig>,
    book: &Book,
) -> Result<ProcessingConfig> {
    let sheet_name = settings
        .sheet
        .clone()
        .or_else(|| base.as_ref().map(|c| c.sheet_name.clone()))
        .unwrap_or_else(|| first_sheet_name(book));

    let has_header = !settings.no_header && base.as_ref().map_or(true, |c| c.has_header);

    let column_index = if let Some(index) = settings.column {
        index
    } else if let Some(header) = &settings.column_name {
        let sheet = book
            .get_sheet(&sheet_name)
            .with_context(|| format!("Worksheet \"{sheet_name}\" not found"))?;
        let columns = describe_columns(sheet, has_header);
        match find_column(&columns, header) {
            Some(index) => index,
            None => bail!("No column with header \"{header}\" in worksheet \"{sheet_name}\""),
        }
    } else if let Some(config) = &base {
        config.column_index
    } else {
        bail!("No name column given; use --column, --column-name or --config");
    };

    let domain = check_domain(
        settings
            .domain
            .clone()
            .or_else(|| base.and_then(|c| c.domain)),
        settings.allow_invalid_domain,
    );

    Ok(ProcessingConfig {
        sheet_name,
        column_index,
        has_header,
        domain,
    })
}

/// Keep a non-blank domain if it validates or validation is bypassed.
fn check_domain(domain: Option<String>, allow_invalid: bool) -> Option<String> {
    let domain = domain.filter(|d| !d.trim().is_empty())?;
    if allow_invalid || is_valid_domain(&domain) {
        return Some(domain);
    }
    tracing::warn!(
        domain = %domain,
        "invalid email domain; skipping the Email column (use --allow-invalid-domain to keep it)"
    );
    None
}

/// `processed_<stem>_<YYYY-MM-DD>.<ext>` next to the input, `<ext>` being the written format.
fn default_output_path(input: &Path, format: DocumentFormat, date: NaiveDate) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    input.with_file_name(format!(
        "processed_{stem}_{}.{}",
        date.format("%Y-%m-%d"),
        format.output_format().extension()
    ))
}

// ============================================================================
// Output
// ============================================================================

/// Build a sheet (header row + one row per item) for CSV output.
fn to_sheet(header: &[&str], rows: Vec<Vec<String>>) -> Sheet {
    let mut data = vec![header.iter().map(|h| (*h).to_string()).collect::<Vec<_>>()];
    data.extend(rows);
    Sheet::from_data(data)
}

fn result_rows(results: &[UsernameResult]) -> Vec<Vec<String>> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.original_name.clone(),
                r.final_username.clone(),
                r.email.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

/// Print rows as an aligned text table.
fn print_table(header: &[&str], rows: &[Vec<String>]) {
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(col, h)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header_cells: Vec<String> = header.iter().map(|h| (*h).to_string()).collect();
    println!("{}", line(header_cells).cyan().bold());
    for row in rows {
        println!("{}", line(row.clone()));
    }
}

fn print_results(results: &[UsernameResult], format: OutputFormat) -> Result<()> {
    let summary = ProcessingSummary::from_results(results);
    let header = ["#", "Original name", "Username", "Email"];

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "summary": summary, "results": results });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Csv => {
            print!("{}", to_sheet(&header, result_rows(results)).to_csv_string());
        }
        OutputFormat::Table => {
            if results.is_empty() {
                println!("(no data rows)");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = result_rows(results)
                .into_iter()
                .zip(results)
                .map(|(mut row, result)| {
                    if !result.is_resolved() {
                        row[2] = "(no name)".to_string();
                    }
                    row
                })
                .collect();
            let with_email = results.iter().any(|r| r.email.is_some());
            let width = if with_email { 4 } else { 3 };
            let rows: Vec<Vec<String>> = rows.into_iter().map(|r| r[..width].to_vec()).collect();
            print_table(&header[..width], &rows);
            println!();
            let summary_line = summary.to_string();
            if summary.errors > 0 {
                println!("{}", summary_line.yellow());
            } else {
                println!("{}", summary_line.green());
            }
        }
    }

    Ok(())
}

fn print_worksheets(sheets: &[WorksheetDescriptor], format: OutputFormat) -> Result<()> {
    let header = ["Sheet", "Rows", "Columns"];
    let rows: Vec<Vec<String>> = sheets
        .iter()
        .map(|s| vec![s.name.clone(), s.row_count.to_string(), s.column_count.to_string()])
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(sheets)?),
        OutputFormat::Csv => print!("{}", to_sheet(&header, rows).to_csv_string()),
        OutputFormat::Table => print_table(&header, &rows),
    }
    Ok(())
}

fn print_columns(columns: &[ColumnDescriptor], format: OutputFormat) -> Result<()> {
    let header = ["Index", "Header", "Samples"];
    let rows: Vec<Vec<String>> = columns
        .iter()
        .map(|c| vec![c.index.to_string(), c.header.clone(), c.sample_values.join(" | ")])
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(columns)?),
        OutputFormat::Csv => print!("{}", to_sheet(&header, rows).to_csv_string()),
        OutputFormat::Table => print_table(&header, &rows),
    }
    Ok(())
}

// ============================================================================
// Interactive wizard
// ============================================================================

/// What the user typed at a wizard prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Value(String),
    Back,
    Reset,
    Quit,
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        ":back" | ":b" => Input::Back,
        ":reset" | ":r" => Input::Reset,
        ":quit" | ":q" | ":exit" => Input::Quit,
        other => Input::Value(other.to_string()),
    }
}

fn prompt(rl: &mut DefaultEditor, label: &str) -> Result<Input> {
    match rl.readline(&format!("{} ", label.green().bold())) {
        Ok(line) => {
            if !line.trim().is_empty() {
                let _ = rl.add_history_entry(line.as_str());
            }
            Ok(parse_input(&line))
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(Input::Quit),
        Err(e) => Err(e.into()),
    }
}

/// Parse a yes/no answer, falling back to `default` on empty input.
fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Document loaded during the upload step.
struct Loaded {
    path: PathBuf,
    format: DocumentFormat,
    book: Book,
}

/// Get the wizard history file path.
fn dirs_history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|mut p| {
        p.push("vnuser");
        let _ = std::fs::create_dir_all(&p);
        p.push("history.txt");
        p
    })
}

async fn run_wizard() -> Result<()> {
    println!(
        "{} {} - Interactive Mode",
        "vnuser".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "Type {} to go back, {} to start over, {} to exit\n",
        ":back".yellow(),
        ":reset".yellow(),
        ":quit".yellow()
    );

    let mut rl = DefaultEditor::new()?;
    let history_path = dirs_history_path();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    let mut step = WizardStep::default();
    let mut loaded: Option<Loaded> = None;
    let mut config: Option<ProcessingConfig> = None;

    loop {
        println!("{} - {}", step.to_string().cyan().bold(), step.description());

        let input = match step {
            WizardStep::Upload => {
                let input = prompt(&mut rl, "File path:")?;
                if let Input::Value(path) = &input {
                    let path = PathBuf::from(path);
                    match load_document(&path).await {
                        Ok((format, book)) => {
                            print_worksheets(&describe_worksheets(&book), OutputFormat::Table)?;
                            loaded = Some(Loaded { path, format, book });
                            step = step.next();
                        }
                        Err(e) => println!("{} {e:#}", "Error:".red().bold()),
                    }
                }
                input
            }
            WizardStep::Configure => {
                let Some(doc) = loaded.as_ref() else {
                    step = WizardStep::Upload;
                    continue;
                };
                match configure(&mut rl, &doc.book)? {
                    Ok(cfg) => {
                        config = Some(cfg);
                        step = step.next();
                        continue;
                    }
                    Err(input) => input,
                }
            }
            WizardStep::Preview => {
                let (Some(doc), Some(cfg)) = (loaded.as_ref(), config.as_ref()) else {
                    step = WizardStep::Configure;
                    continue;
                };
                match process_parsed_document(&doc.book, doc.format, cfg) {
                    Ok(processed) => {
                        print_results(&processed.results, OutputFormat::Table)?;
                        let default_path =
                            default_output_path(&doc.path, doc.format, Local::now().date_naive());
                        let input = prompt(
                            &mut rl,
                            &format!("Save to [{}]:", default_path.display()),
                        )?;
                        if let Input::Value(answer) = &input {
                            let target = if answer.is_empty() {
                                default_path
                            } else {
                                PathBuf::from(answer)
                            };
                            tokio::fs::write(&target, &processed.bytes)
                                .await
                                .with_context(|| {
                                    format!("Failed to write file: {}", target.display())
                                })?;
                            println!("{} {}", "Wrote".green().bold(), target.display());
                            break;
                        }
                        input
                    }
                    Err(e) => {
                        println!("{} {e}", "Error:".red().bold());
                        step = step.previous();
                        continue;
                    }
                }
            }
        };

        match input {
            Input::Quit => break,
            Input::Back => step = step.previous(),
            Input::Reset => {
                step = WizardStep::default();
                loaded = None;
                config = None;
            }
            Input::Value(_) => {}
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

/// Ask for sheet, header flag, name column and domain.
///
/// `Err` carries the navigation input that interrupted the questions; an
/// invalid answer comes back as an empty value so the step is asked again.
fn configure(
    rl: &mut DefaultEditor,
    book: &Book,
) -> Result<std::result::Result<ProcessingConfig, Input>> {
    let retry = || Err(Input::Value(String::new()));

    let default_sheet = first_sheet_name(book);
    let sheet_name = match prompt(rl, &format!("Worksheet [{default_sheet}]:"))? {
        Input::Value(name) if name.is_empty() => default_sheet,
        Input::Value(name) => name,
        other => return Ok(Err(other)),
    };
    let Ok(sheet) = book.get_sheet(&sheet_name) else {
        println!("{} worksheet \"{sheet_name}\" not found", "Error:".red().bold());
        return Ok(retry());
    };

    let has_header = match prompt(rl, "First row is a header? [Y/n]:")? {
        Input::Value(answer) => match parse_yes_no(&answer, true) {
            Some(flag) => flag,
            None => {
                println!("{} expected y or n", "Error:".red().bold());
                return Ok(retry());
            }
        },
        other => return Ok(Err(other)),
    };

    let columns = describe_columns(sheet, has_header);
    print_columns(&columns, OutputFormat::Table)?;
    let column = match prompt(rl, "Name column (index or header):")? {
        Input::Value(column) => column,
        other => return Ok(Err(other)),
    };
    let column_index = match column.parse::<usize>() {
        Ok(index) if index < columns.len() => index,
        _ => match find_column(&columns, &column) {
            Some(index) => index,
            None => {
                println!("{} no such column: {column}", "Error:".red().bold());
                return Ok(retry());
            }
        },
    };

    let domain = match prompt(rl, "Email domain (blank for none):")? {
        Input::Value(domain) => domain,
        other => return Ok(Err(other)),
    };

    Ok(Ok(ProcessingConfig {
        sheet_name,
        column_index,
        has_header,
        domain: check_domain(Some(domain), false),
    }))
}
