//! CLI entry point for the cinegraph movie graph client.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use cinegraph_core::Movie;
use cinegraph_graph::{GraphClient, GraphConfig};

#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(about = "Movie graph client for Neo4j")]
struct Cli {
    /// Config file prefix (default: cinegraph).
    #[arg(short, long, default_value = "cinegraph")]
    config: String,

    /// Target server database (overrides the configured default).
    #[arg(long)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all movies as JSON.
    List,
    /// Fetch a single movie by title.
    Get { title: String },
    /// Create or update a movie from a JSON file ("-" reads stdin).
    Put { file: String },
    /// Delete a movie and its relationships.
    Delete { title: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();

    let mut graph_config = load_graph_config(&cli.config);
    if cli.database.is_some() {
        graph_config.database = cli.database.clone();
    }
    let graph = GraphClient::connect(&graph_config).await?;

    match cli.command {
        Command::List => {
            let movies = graph.find_all().await?;
            println!("{}", serde_json::to_string_pretty(&movies)?);
        }
        Command::Get { title } => match graph.find_one_by_title(&title).await? {
            Some(movie) => println!("{}", serde_json::to_string_pretty(&movie)?),
            None => anyhow::bail!("No movie found with title: {title}"),
        },
        Command::Put { file } => {
            let payload = read_payload(&file)?;
            let movie: Movie = serde_json::from_str(&payload)?;
            graph.save_movie(&movie).await?;
            tracing::info!(title = %movie.title, "Movie saved");
        }
        Command::Delete { title } => {
            let deleted = graph.delete_movie_by_title(&title).await?;
            tracing::info!(title = %title, deleted, "Delete finished");
        }
    }

    Ok(())
}

fn read_payload(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

fn load_graph_config(file_prefix: &str) -> GraphConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("CINEGRAPH")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => GraphConfig {
            uri: c
                .get_string("neo4j.uri")
                .unwrap_or_else(|_| "bolt://localhost:7687".to_string()),
            user: c
                .get_string("neo4j.user")
                .unwrap_or_else(|_| "neo4j".to_string()),
            password: c
                .get_string("neo4j.password")
                .unwrap_or_else(|_| "cinegraph-dev".to_string()),
            database: c.get_string("neo4j.database").ok(),
            ..Default::default()
        },
        Err(_) => GraphConfig::default(),
    }
}
