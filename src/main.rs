use anyhow::{Context, Result};
use bookmarklets::server::DEFAULT_PORT;
use bookmarklets::{Library, LibraryLoader, ServerConfig, bookmarks_file};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "bookmarklets")]
#[command(about = "Turn a folder of scripts into installable bookmarklets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bookmarklet server with links to all the bookmarklets
    Server {
        /// Folder containing the bookmarklet scripts
        folder: Option<PathBuf>,

        /// Open the web page in the browser
        #[arg(short = 'o', long = "open")]
        open_browser: bool,

        /// Port to run the server on
        #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = clap::value_parser!(u16).range(1..))]
        port: u16,

        /// Make the server public
        #[arg(long)]
        public: bool,
    },

    /// Generate bookmarks.html to import into browsers
    Html {
        /// Folder containing the bookmarklet scripts
        folder: Option<PathBuf>,

        /// Output file name
        #[arg(short, long, default_value = "bookmarks.html")]
        output: PathBuf,
    },

    /// Print the bookmarklets found in a folder
    List {
        /// Folder containing the bookmarklet scripts
        folder: Option<PathBuf>,

        /// Print JSON instead of one line per bookmarklet
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Server {
            folder,
            open_browser,
            port,
            public,
        } => {
            let config = ServerConfig {
                port,
                public,
                open_browser,
                ..ServerConfig::new(resolve_folder(folder)?)
            };

            println!("Opening web page with all bookmarklets");
            println!("Drag the bookmarklets to your bookmarks bar to install them");
            println!("Press CTRL+C to stop the server");

            bookmarklets::serve(config).await?;
        }
        Commands::Html { folder, output } => {
            let library = load(folder)?;
            info!("Writing {}", output.display());
            fs::write(&output, bookmarks_file(library.bookmarklets()))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "Wrote {} bookmarklets to {}",
                library.len(),
                output.display()
            );
        }
        Commands::List { folder, json } => {
            let library = load(folder)?;
            if json {
                let out = serde_json::to_string_pretty(library.bookmarklets())
                    .context("Failed to serialize bookmarklets")?;
                println!("{}", out);
            } else {
                for bookmarklet in library.bookmarklets() {
                    match bookmarklet.metadata().author.as_deref() {
                        Some(author) => println!("{} by {}", bookmarklet.name(), author),
                        None => println!("{}", bookmarklet.name()),
                    }
                }
            }
        }
    }

    Ok(())
}

/// Fall back to the working directory when no folder is given
fn resolve_folder(folder: Option<PathBuf>) -> Result<PathBuf> {
    match folder {
        Some(folder) => Ok(folder),
        None => std::env::current_dir().context("Failed to read current directory"),
    }
}

fn load(folder: Option<PathBuf>) -> Result<Library> {
    let folder = resolve_folder(folder)?;
    LibraryLoader::new()
        .load(&folder)
        .with_context(|| format!("Failed to load bookmarklets from {}", folder.display()))
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if verbose {
        EnvFilter::new("bookmarklets=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bookmarklets=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
