use bl_core::{ArticleCatalog, ArticleFilter, ArticleRecord, StaticCatalog};
use bl_web::config::{DEFAULT_HOST, DEFAULT_PORT};
use bl_web::{AppState, ServerConfig};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse news coverage with bias annotations", long_about = None)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. info, debug, bl_web=trace)
    #[arg(long, env = "BIASLENS_LOG", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the web application
    Serve {
        #[arg(long, env = "BIASLENS_HOST", default_value = DEFAULT_HOST)]
        host: String,
        #[arg(long, env = "BIASLENS_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Print catalog articles matching the given filters
    Articles {
        /// Country code or name, or "all"
        #[arg(long)]
        country: Option<String>,
        /// left, centre, right or "all"
        #[arg(long)]
        bias: Option<String>,
        #[arg(long)]
        language: Option<String>,
        /// Substring of title, summary or source
        #[arg(long)]
        search: Option<String>,
        /// List the perspectives on this topic instead of the browse catalog
        #[arg(long)]
        topic: Option<String>,
        /// Print JSON instead of one line per article
        #[arg(long)]
        json: bool,
    },
}

fn print_articles(records: &[ArticleRecord]) {
    println!("Found {} articles", records.len());
    for record in records {
        println!(
            "- [{}] {} ({}, {} {})",
            record.bias,
            record.title,
            record.source,
            record.country.flag(),
            record.country.name
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bl_web::logging::init_logging(&cli.log_level);

    let catalog = Arc::new(StaticCatalog::new());

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ServerConfig::new(host, port);
            info!("📰 Catalog loaded: {} articles", catalog.browse().len());
            bl_web::serve(&config, AppState::new(catalog)).await?;
        }
        Commands::Articles {
            country,
            bias,
            language,
            search,
            topic,
            json,
        } => {
            let filter = ArticleFilter::new()
                .country(country.as_deref())
                .bias(bias.as_deref())
                .language(language.as_deref())
                .text(search.as_deref());
            let records = match topic.as_deref() {
                Some(topic) => filter.apply(&catalog.perspectives(topic)),
                None => catalog.search(&filter),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print_articles(&records);
            }
        }
    }

    Ok(())
}
