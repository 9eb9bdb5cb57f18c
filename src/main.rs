use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use lemonade::html::{DocumentOptions, render_document, render_fragment};
use lemonade::page::{self, PageDescription};
use lemonade::routes::{self, RenderedPage};
use lemonade::{PageError, build, sample};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Page(#[from] PageError),
    #[error("failed to write output to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
    #[error("failed to encode tree as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "lemonade", about = "Render pages from declarative section/block/component descriptions")]
struct Cli {
    /// Page description file (.json, .yaml or .yml). Uses the built-in
    /// landing page when omitted.
    #[arg(long, global = true, env = "LEMONADE_PAGE")]
    page: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page once.
    Render {
        #[arg(long, value_enum, default_value_t = OutputFormat::Document)]
        format: OutputFormat,
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, env = "LEMONADE_STYLESHEET")]
        stylesheet: Option<String>,
    },
    /// Load and validate the page, then print a summary.
    Check,
    /// Render the page once and serve it over HTTP.
    Serve {
        #[arg(long, env = "LEMONADE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
        #[arg(long, env = "LEMONADE_STYLESHEET")]
        stylesheet: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full HTML document with head metadata.
    Document,
    /// HTML for the page body only.
    Html,
    /// Built node tree as JSON.
    Json,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "lemonade failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let page = load_page(cli.page.as_deref())?;

    match cli.command {
        Command::Render { format, out, stylesheet } => {
            let regions = build(&page);
            let rendered = match format {
                OutputFormat::Document => render_document(&page, &regions, &DocumentOptions { stylesheet }),
                OutputFormat::Html => render_fragment(&regions),
                OutputFormat::Json => serde_json::to_string_pretty(&regions)?,
            };
            write_output(out.as_deref(), &rendered)
        }
        Command::Check => {
            println!(
                "ok: {} sections, {} blocks, {} components",
                page.sections.len(),
                page.block_count(),
                page.component_count()
            );
            Ok(())
        }
        Command::Serve { host, port, stylesheet } => serve(page, &host, port, stylesheet).await,
    }
}

fn load_page(path: Option<&Path>) -> Result<PageDescription, PageError> {
    match path {
        Some(path) => page::load_file(path),
        None => {
            tracing::info!("no page file given; using built-in landing page");
            Ok(sample::landing_page())
        }
    }
}

fn write_output(out: Option<&Path>, rendered: &str) -> Result<(), CliError> {
    match out {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| CliError::Output { path: path.to_path_buf(), source })?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "page written");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(CliError::Stdout)
        }
    }
}

async fn serve(page: PageDescription, host: &str, port: u16, stylesheet: Option<String>) -> Result<(), CliError> {
    let state = Arc::new(RenderedPage::new(page, &DocumentOptions { stylesheet }));
    let app = routes::app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| CliError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "lemonade listening");
    axum::serve(listener, app).await.map_err(CliError::Serve)
}
