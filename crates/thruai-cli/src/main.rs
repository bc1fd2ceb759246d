// crates/thruai-cli/src/main.rs
// ============================================================================
// Module: ThruAI CLI Entry Point
// Description: Command dispatcher for the ThruAI MCP server.
// Purpose: Start the stdio MCP server and inspect the declared tool surface.
// Dependencies: clap, serde_json, thiserror, thruai-contract, thruai-mcp, tokio
// ============================================================================

//! ## Overview
//! The ThruAI CLI starts the MCP server over stdio and offers offline
//! inspection of the declared tool surface. The platform credential is read
//! only from `THRUAI_API_KEY`; it never appears on the command line or in
//! any output. Stdout carries the protocol stream while serving, so all
//! startup notices go to stderr.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use thiserror::Error;
use thruai_contract::ToolDefinition;
use thruai_mcp::McpAuditSink;
use thruai_mcp::McpServer;
use thruai_mcp::NoopAuditSink;
use thruai_mcp::StderrAuditSink;
use thruai_mcp::ThruAiConfig;
use thruai_mcp::tools::register_all;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "thruai-mcp", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the ThruAI MCP server on stdio.
    Serve(ServeCommand),
    /// Tool surface utilities.
    Tools {
        /// Selected tools subcommand.
        #[command(subcommand)]
        command: ToolsCommand,
    },
}

/// Configuration for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Override the platform base URL (defaults to `THRUAI_BASE_URL` or the
    /// production origin).
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    /// Suppress audit logging on stderr.
    #[arg(long, action = ArgAction::SetTrue)]
    quiet: bool,
}

/// Tool surface subcommands.
#[derive(Subcommand, Debug)]
enum ToolsCommand {
    /// List the declared tool definitions without contacting the platform.
    List(ToolsListCommand),
}

/// Arguments for `tools list`.
#[derive(Args, Debug)]
struct ToolsListCommand {
    /// Output format for tool listings.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// Output formats for structured CLI commands.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Pretty-printed JSON output.
    Json,
    /// Human-readable text output.
    Text,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("thruai-mcp {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Serve(command) => command_serve(command).await,
        Commands::Tools {
            command,
        } => command_tools(&command),
    }
}

// ============================================================================
// SECTION: Serve Command
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(command: ServeCommand) -> CliResult<ExitCode> {
    let config = ThruAiConfig::from_env()
        .map_err(|err| CliError::new(format!("configuration error: {err}")))?;
    let config = override_base_url(config, command.base_url.as_deref())?;
    let audit: Arc<dyn McpAuditSink> = if command.quiet {
        Arc::new(NoopAuditSink)
    } else {
        Arc::new(StderrAuditSink)
    };

    // Stdout is the protocol stream; the startup notice goes to stderr.
    write_stderr_line(&format!("thruai-mcp-server serving on stdio ({})", config.base_url))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;

    let server = McpServer::from_config(&config, audit)
        .map_err(|err| CliError::new(format!("server init failed: {err}")))?;
    server
        .serve_stdio()
        .await
        .map_err(|err| CliError::new(format!("server failed: {err}")))?;

    Ok(ExitCode::SUCCESS)
}

/// Applies a CLI base URL override, revalidating the configuration.
fn override_base_url(config: ThruAiConfig, base_url: Option<&str>) -> CliResult<ThruAiConfig> {
    let Some(url) = base_url else {
        return Ok(config);
    };
    ThruAiConfig::new(config.api_key, url)
        .map_err(|err| CliError::new(format!("configuration error: {err}")))
}

// ============================================================================
// SECTION: Tools Commands
// ============================================================================

/// Dispatches tool surface subcommands.
fn command_tools(command: &ToolsCommand) -> CliResult<ExitCode> {
    match command {
        ToolsCommand::List(command) => command_tools_list(command),
    }
}

/// Executes the `tools list` command.
fn command_tools_list(command: &ToolsListCommand) -> CliResult<ExitCode> {
    let registry =
        register_all().map_err(|err| CliError::new(format!("tool surface error: {err}")))?;
    let definitions: Vec<ToolDefinition> =
        registry.contracts().map(thruai_contract::ToolContract::definition).collect();
    match command.format {
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&definitions)
                .map_err(|err| CliError::new(format!("serialization failed: {err}")))?;
            write_stdout_line(&rendered)
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        OutputFormat::Text => {
            for line in tool_lines(&definitions) {
                write_stdout_line(&line)
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Renders one text line per tool definition.
fn tool_lines(definitions: &[ToolDefinition]) -> Vec<String> {
    definitions
        .iter()
        .map(|definition| format!("{}: {}", definition.name, definition.description))
        .collect()
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Prints top-level help to stdout.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
