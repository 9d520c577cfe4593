//! CLI entry point for pm-hero

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pm-hero")]
#[command(version)]
#[command(about = "Markdown content service for a gamified portfolio map", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site with sample content
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new blog post
    New {
        /// Title of the new post
        title: String,

        /// Post id (file name without .md); defaults to the slugified title
        #[arg(short, long)]
        id: Option<String>,
    },

    /// Export the JSON API as static files
    #[command(alias = "g")]
    Generate {
        /// Watch for content changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start the API server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Remove exported files
    Clean,

    /// List site content
    List {
        /// Type of content to list (posts, locations, biography)
        #[arg(default_value = "posts")]
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
        "pm_hero=debug,info"
    } else {
        "pm_hero=info"
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
            pm_hero::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, id } => {
            let portfolio = pm_hero::Portfolio::new(&base_dir)?;
            let path = pm_hero::commands::new::create_post(&portfolio, &title, id.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Generate { watch } => {
            let portfolio = pm_hero::Portfolio::new(&base_dir)?;
            tracing::info!("Exporting API files...");

            pm_hero::commands::generate::run(&portfolio)?;
            println!("Generated successfully!");

            if watch {
                pm_hero::commands::generate::watch(&portfolio).await?;
            }
        }

        Commands::Server { port, ip, open } => {
            let portfolio = pm_hero::Portfolio::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            pm_hero::server::start(&portfolio, &ip, port, open).await?;
        }

        Commands::Clean => {
            let portfolio = pm_hero::Portfolio::new(&base_dir)?;
            pm_hero::commands::clean::run(&portfolio)?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let portfolio = pm_hero::Portfolio::new(&base_dir)?;
            pm_hero::commands::list::run(&portfolio, &r#type)?;
        }

        Commands::Version => {
            println!("pm-hero version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
