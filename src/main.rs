use casefolio::{
    app::create_app,
    config,
    content::ContentStore,
    email::ResendMailer,
    export, output,
    state::AppState,
};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "casefolio")]
#[command(version, about = "Portfolio site server for product design case studies")]
#[command(long_about = "\
Portfolio site server for product design case studies

Pages are rendered from JSON artifacts produced by an offline content
generator. Any artifact that is missing or does not fit its record shape is
replaced by built-in content, so the site always renders.

Content structure:

  content/
  ├── config.toml                  # Site config (optional, overrides defaults)
  ├── pages/
  │   ├── home.json
  │   ├── about.json
  │   ├── case-studies.json
  │   └── resume.json
  ├── components/
  │   ├── navigation.json
  │   └── footer.json
  └── case-studies/
      ├── zalando-contextual.json  # One file per registered case study
      └── ...

Run 'casefolio check' to see which artifacts resolve.
Run 'casefolio gen-config' to generate a documented config.toml.")]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct ServeArgs {
    /// Host address to bind the server to (overrides config.toml)
    #[arg(long, short = 'H', env = "HOST")]
    host: Option<String>,

    /// Port to listen on (overrides config.toml)
    #[arg(long, short, env = "PORT")]
    port: Option<u16>,

    /// API key for the email provider; without it the contact form is disabled
    #[arg(long, env = "RESEND_API_KEY", hide_env_values = true)]
    resend_api_key: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site over HTTP
    Serve(ServeArgs),
    /// Render every page to static files
    Export {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Report which content artifacts resolve and which fall back to defaults
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "casefolio=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Serve(args) => serve(cli.source, args).await?,
        Command::Export { output: out } => {
            let site_config = config::load_config(&cli.source)?;
            let store = ContentStore::new(&cli.source);
            println!("==> Exporting {} → {}", cli.source.display(), out.display());
            let pages = export::export(&store, &site_config, &out)?;
            output::print_export_output(&pages);
        }
        Command::Check => {
            config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let audit = ContentStore::new(&cli.source).audit();
            output::print_check_output(&audit);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

async fn serve(source: PathBuf, args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let site_config = config::load_config(&source)?;
    let host = args.host.unwrap_or_else(|| site_config.server.host.clone());
    let port = args.port.unwrap_or(site_config.server.port);

    let mut state = AppState::new(ContentStore::new(&source), site_config);
    match args.resend_api_key.filter(|key| !key.trim().is_empty()) {
        Some(key) => {
            let mailer = ResendMailer::new(state.config.email.api_url.clone(), key);
            state = state.with_mailer(Arc::new(mailer));
        }
        None => tracing::warn!("RESEND_API_KEY not set, contact form submissions will fail"),
    }

    let app = create_app(state);

    let listener = TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!(content = %source.display(), "listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
