//! route-compiler
//!
//! Loads a server configuration file, compiles the named server and prints
//! the resulting routing model.
//!
//! ```text
//!   config.toml
//!       │
//!       ▼
//!  ┌──────────┐   ┌──────────────────────────────────────────────┐
//!  │  loader  │──▶│                  compiler                    │
//!  └──────────┘   │  server → hosts → routes → backends          │
//!       │         │                      │                       │
//!       │         │              handler registry                │
//!       │         └──────────────────────┬───────────────────────┘
//!       ▼                                ▼
//!  ┌──────────┐                    ┌──────────┐
//!  │ globals  │                    │  Server  │──▶ serving runtime
//!  │settings, │                    └──────────┘
//!  │mimetypes │
//!  └──────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use route_compiler::observability::logging;
use route_compiler::routing::Server;
use route_compiler::{compile_server, load_config, load_globals, Globals};

#[derive(Parser)]
#[command(name = "route-compiler")]
#[command(about = "Compile a server configuration into its routing model", long_about = None)]
struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Name of the server to compile.
    #[arg(short, long)]
    server: String,

    /// Print the compiled server as JSON.
    #[arg(long)]
    json: bool,

    /// Log level, overridden by RUST_LOG.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Configuration failed to compile");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(config = %cli.config.display(), server = %cli.server, "Compiling configuration");

    let source = load_config(&cli.config)?;
    let globals = load_globals(&source)?;
    let server = compile_server(&source, &cli.server)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&server)?);
    } else {
        print_summary(&server, &globals);
    }
    Ok(())
}

fn print_summary(server: &Server, globals: &Globals) {
    println!("server {} ({})", server.uuid, if server.use_ssl { "ssl" } else { "plain" });
    println!("  listen       {}:{}", server.bind_addr, server.port);
    println!("  default host {}", server.default_host().map_or("-", |h| h.name.as_str()));
    println!("  handlers     {}", server.handlers().len());
    println!("  settings     {}", globals.settings.len());
    println!("  mimetypes    {}", globals.mimetypes.len());

    for host in server.hosts() {
        println!("  host {} [{}]", host.name, host.matching);
        for (path, backend) in host.routes() {
            println!("    {:<24} {}", path, backend.kind());
        }
    }
}

