//! nue: the Nue CLI
//!
//! Runs Nue statements against the bundled storage engine, interactively or
//! over TCP.
//!
//! # Usage
//!
//! ```bash
//! # Run a batch
//! nue exec "CREATE DATABASE shop; INIT shop; CREATE TABLE users (id as primary_key, name)"
//!
//! # Interactive mode
//! nue repl
//!
//! # Serve length-prefixed JSON requests
//! nue serve --bind 127.0.0.1:7070
//!
//! # Show how a statement is parsed
//! nue explain "FIND name FROM users WHERE PRIMARY_KEY = 1"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use nue::dispatcher;
use nue::prelude::*;
use nue::storage::{DatabaseDescription, TableDescription};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nue")]
#[command(version)]
#[command(about = "Nue statement interpreter", long_about = None)]
#[command(after_help = "EXAMPLES:
    nue exec 'INIT shop; FIND * FROM users WHERE age >= 21 ORDER BY name'
    nue exec 'SHOW DATABASES LIKE \"%test%\"' --format json
    nue serve --bind 0.0.0.0:7070")]
struct Cli {
    /// Configuration file
    #[arg(short, long, env = "NUE_CONFIG", default_value = nue::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Snapshot directory (overrides the config file)
    #[arg(long, env = "NUE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory
    #[arg(long)]
    memory: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of statements
    Exec {
        /// Semicolon-separated statements
        statements: String,

        /// Initial database (runs `INIT <database>` first)
        #[arg(short, long)]
        database: Option<String>,

        /// Do not flush databases after the batch
        #[arg(long)]
        no_save: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Interactive REPL mode
    Repl,
    /// Serve requests over TCP
    Serve {
        /// Bind address (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Parse a statement and show its normalized form
    Explain {
        /// The statement to explain
        statement: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = NueConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.memory {
        config.persist = false;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let engine = if config.persist {
        MemoryEngine::persistent(&config.data_dir)
    } else {
        MemoryEngine::new()
    };
    let interpreter = Interpreter::new(engine);

    match cli.command {
        Commands::Exec {
            statements,
            database,
            no_save,
            format,
        } => {
            let mut session = interpreter.session();
            if let Some(database) = database {
                session
                    .execute(&format!("INIT {}", database))
                    .await
                    .with_context(|| format!("Cannot use database {}", database))?;
            }
            let headers = request_headers(!no_save && config.persist);
            let response = session.handle_request(&headers, Some(&statements)).await;
            print_response(&response, format);
            if !response.is_ok() {
                std::process::exit(1);
            }
        }
        Commands::Repl => run_repl(&interpreter, config.persist).await,
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind_address);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Listening on {}", addr);
            println!("{} {}", "Listening on".green().bold(), addr.cyan());
            nue::server::serve(listener, interpreter).await;
        }
        Commands::Explain { statement } => explain_statement(&statement),
    }

    Ok(())
}

fn request_headers(save: bool) -> Headers {
    let mut headers = Headers::new();
    if save {
        headers.insert(Header::Save.name().to_string(), String::new());
    }
    headers
}

fn print_response(response: &BatchResponse, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(response).unwrap_or_default()
            );
        }
        OutputFormat::Table => {
            for outcome in &response.results {
                print_outcome(outcome);
            }
            if let Some(failure) = &response.error {
                eprintln!(
                    "{} statement {}: {}",
                    "✗".red(),
                    failure.statement + 1,
                    failure.message.red()
                );
            }
        }
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Message(message) => println!("{} {}", "✓".green(), message),
        Outcome::Affected { affected } => {
            println!("{} {} row(s) affected", "✓".green(), affected)
        }
        Outcome::Rows(rows) => print_rows(rows),
        Outcome::Table(table) => print_table_description(table),
        Outcome::Database(database) => print_database_description(database),
    }
}

fn print_rows(rows: &[Row]) {
    if rows.is_empty() {
        println!("{}", "(no results)".dimmed());
        return;
    }

    // Get column names from first row
    let columns: Vec<&String> = rows[0].keys().collect();

    let cell = |row: &Row, col: &String| -> String {
        match row.get(col) {
            Some(Some(value)) => value.clone(),
            _ => "NULL".to_string(),
        }
    };

    let mut widths: BTreeMap<&String, usize> = columns.iter().map(|c| (*c, c.len())).collect();
    for row in rows {
        for col in &columns {
            let len = cell(row, col).chars().count();
            if let Some(w) = widths.get_mut(col) {
                *w = (*w).max(len);
            }
        }
    }

    let header: Vec<String> = columns
        .iter()
        .map(|c| format!("{:width$}", c, width = widths[*c]))
        .collect();
    println!("{}", header.join(" │ ").white().bold());

    let sep: Vec<String> = columns.iter().map(|c| "─".repeat(widths[*c])).collect();
    println!("{}", sep.join("─┼─").dimmed());

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| format!("{:width$}", cell(row, c), width = widths[*c]))
            .collect();
        println!("{}", cells.join(" │ "));
    }

    println!();
    println!("{} row(s) returned", rows.len().to_string().cyan());
}

fn print_table_description(table: &TableDescription) {
    println!("{} {}", "Table:".dimmed(), table.name.white().bold());
    if let Some(pk) = &table.primary_key {
        println!("  {} {}", "Primary key:".dimmed(), pk.cyan());
    }
    println!("  {} {}", "Columns:".dimmed(), table.columns.join(", "));
    println!("  {} {}", "Rows:".dimmed(), table.rows);
}

fn print_database_description(database: &DatabaseDescription) {
    println!("{} {}", "Database:".dimmed(), database.database.white().bold());
    println!(
        "  {} {}",
        "Created:".dimmed(),
        database.created_at.to_rfc3339()
    );
    if database.tables.is_empty() {
        println!("  {}", "(no tables)".dimmed());
    }
    for table in &database.tables {
        let pk = table.primary_key.as_deref().unwrap_or("-");
        println!(
            "  • {} ({} {}, {} row(s))",
            table.name.white(),
            "pk".dimmed(),
            pk.cyan(),
            table.rows
        );
    }
}

async fn run_repl(interpreter: &Interpreter<MemoryEngine>, persist: bool) {
    use rustyline::DefaultEditor;
    use rustyline::error::ReadlineError;

    println!("{}", "Nue REPL (Interactive Mode)".cyan().bold());
    println!("{}", "Type statements separated by ';'. Commands:".dimmed());
    println!("  {}  - Exit the REPL", ".exit".yellow());
    println!("  {} - Show help", ".help".yellow());
    println!("  {} - Clear screen", ".clear".yellow());
    println!();

    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{} {}", "Failed to initialize REPL:".red(), e);
            return;
        }
    };

    // Load history if available
    let history_path = dirs::home_dir()
        .map(|p| p.join(".nue_history"))
        .unwrap_or_default();
    let _ = rl.load_history(&history_path);

    let mut session = interpreter.session();
    let headers = request_headers(persist);

    loop {
        let prompt = match session.active_database() {
            Some(db) => format!("nue:{}> ", db).cyan().bold().to_string(),
            None => "nue> ".cyan().bold().to_string(),
        };
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match line {
                    ".exit" | ".quit" | "exit" | "quit" => {
                        println!("{}", "Goodbye!".green());
                        break;
                    }
                    ".help" | "help" => {
                        show_repl_help();
                        continue;
                    }
                    ".clear" | "clear" => {
                        print!("\x1B[2J\x1B[1;1H");
                        continue;
                    }
                    _ => {}
                }

                let response = session.handle_request(&headers, Some(line)).await;
                print_response(&response, OutputFormat::Table);
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".green());
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "Error:".red(), err);
                break;
            }
        }
    }

    let _ = rl.save_history(&history_path);
}

fn show_repl_help() {
    println!("{}", "Nue REPL Commands:".cyan().bold());
    println!("  {}     - Exit the REPL", ".exit".yellow());
    println!("  {}     - Show this help", ".help".yellow());
    println!("  {}    - Clear screen", ".clear".yellow());
    println!();
    println!("{}", "Statement Examples:".cyan().bold());
    println!("  CREATE DATABASE shop; INIT shop");
    println!("  CREATE TABLE users (id as primary_key, name, age)");
    println!("  INSERT INTO users (id, name, age) VALUES (1, 'Ann', 34)");
    println!("  FIND name FROM users WHERE age >= 21 ORDER BY name LIMIT 10");
    println!("  UPDATE users SET age = 35 WHERE PRIMARY_KEY = 1");
    println!("  DELETE FROM users WHERE name LIKE 'a%'");
    println!("  SHOW DATABASES LIKE 'sh%'");
    println!();
}

fn explain_statement(statement: &str) {
    println!("{}", "Nue Statement Explanation".cyan().bold());
    println!();
    println!("{} {}", "Statement:".dimmed(), statement.yellow());
    println!();

    let stmt = match nue::parse(statement) {
        Ok(stmt) => stmt,
        Err(e) => {
            eprintln!("{} {}", "Parse Error:".red().bold(), e);
            return;
        }
    };

    println!("{}", "Parsed Structure:".green().bold());
    println!("  {} {}", "Verb:".dimmed(), stmt.verb().to_string().cyan());
    if let Ok(json) = serde_json::to_string_pretty(&stmt) {
        for line in json.lines() {
            println!("  {}", line.white());
        }
    }

    let normalized = match &stmt {
        Statement::Create(create) if create.kind == ElementKind::Table => create
            .parameters
            .as_deref()
            .map(|p| dispatcher::table_spec(&create.name, p).map(serde_json::to_value)),
        Statement::Insert(insert) => {
            Some(dispatcher::insert_spec(insert).map(serde_json::to_value))
        }
        Statement::Find(find) => Some(dispatcher::find_spec(find).map(serde_json::to_value)),
        Statement::Delete(delete) => {
            Some(dispatcher::delete_spec(delete).map(serde_json::to_value))
        }
        Statement::Update(update) => {
            Some(dispatcher::update_spec(update).map(serde_json::to_value))
        }
        _ => None,
    };

    match normalized {
        Some(Ok(Ok(value))) => {
            println!();
            println!("{}", "Storage Request:".green().bold());
            let json = serde_json::to_string_pretty(&value).unwrap_or_default();
            for line in json.lines() {
                println!("  {}", line.white());
            }
        }
        Some(Ok(Err(e))) => eprintln!("{} {}", "Encode Error:".red().bold(), e),
        Some(Err(e)) => eprintln!("{} {}", "Validation Error:".red().bold(), e),
        None => {}
    }
}
