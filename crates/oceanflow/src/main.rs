use clap::{Parser, Subcommand};
use colored::Colorize;
use oceanflow_api::DoClient;

#[derive(Parser)]
#[command(name = "ocean")]
#[command(about = "DigitalOcean MCP server and CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP (Model Context Protocol) server on stdio
    Mcp,
    /// Verify the API token by fetching the account
    Auth,
    /// Print version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries JSON-RPC in MCP mode, so logs go to a file
    if matches!(cli.command, Commands::Mcp) {
        use std::fs::OpenOptions;
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/oceanflow-mcp.log")
            .ok();

        if let Some(file) = log_file {
            tracing_subscriber::fmt()
                .with_writer(file)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::DEBUG.into()),
                )
                .with_ansi(false)
                .init();
        }

        return oceanflow_mcp::run_server().await;
    }

    tracing_subscriber::fmt::init();

    match cli.command {
        Commands::Auth => {
            let client = match DoClient::from_env() {
                Ok(client) => client,
                Err(e) => {
                    eprintln!("{} {}", "✗".red().bold(), e);
                    std::process::exit(1);
                }
            };
            match client.get_account().await {
                Ok(account) => {
                    println!("{} authenticated", "✓".green().bold());
                    println!("  email:         {}", account.email.cyan());
                    println!("  status:        {}", account.status);
                    println!("  droplet limit: {}", account.droplet_limit);
                }
                Err(e) => {
                    eprintln!("{} authentication failed: {}", "✗".red().bold(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Version => {
            println!("oceanflow {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Mcp => {
            unreachable!("Mcp is handled before logger setup");
        }
    }

    Ok(())
}
