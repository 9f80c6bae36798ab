//! CLI entry point for cms-front

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cms-front")]
#[command(version)]
#[command(about = "Server-rendered blog and lessons pages for a headless CMS", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Origin of the CMS API, overriding config.yml
    #[arg(short, long, global = true, env = "BACKEND_URL")]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config.yml and the static directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Render one page, e.g. `/lessons?category=math`
    #[command(alias = "r")]
    Render {
        /// Site path with optional query
        path: String,

        /// Write the HTML to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List CMS content
    List {
        /// Type of content to list (lessons, categories)
        #[arg(default_value = "lessons")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "cms_front=debug,info"
    } else {
        "cms_front=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            cms_front::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Serve { port, ip } => {
            let site = cms_front::Site::new(&base_dir, cli.backend_url)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            cms_front::server::start(site, &ip, port).await?;
        }

        Commands::Render { path, output } => {
            let site = cms_front::Site::new(&base_dir, cli.backend_url)?;
            cms_front::commands::render::run(&site, &path, output.as_deref()).await?;
        }

        Commands::List { r#type } => {
            let site = cms_front::Site::new(&base_dir, cli.backend_url)?;
            cms_front::commands::list::run(&site, &r#type).await?;
        }

        Commands::Version => {
            println!("cms-front version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
