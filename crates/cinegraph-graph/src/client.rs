//! Neo4j connection management and shared graph client.

use neo4rs::{ConfigBuilder, Graph};

use crate::fetch::QuerySpec;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Query expected at most {expected} result but more were returned")]
    IncorrectResultSize { expected: usize },

    #[error("Record mapping error: {0}")]
    Mapping(String),
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
    /// Default server database for all queries. `None` uses the server's
    /// home database; individual specs can override with `in_database`.
    pub database: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "cinegraph-dev".to_string(),
            max_connections: 16,
            fetch_size: 256,
            database: None,
        }
    }
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// This is the single point of access for all movie graph operations.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
    database: Option<String>,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self {
            graph,
            database: config.database.clone(),
        })
    }

    /// Get a reference to the underlying neo4rs Graph for direct operations.
    pub fn inner(&self) -> &Graph {
        &self.graph
    }

    /// Start a fluent query against the configured database.
    ///
    /// Writes go through [`QuerySpec::run`], reads through `fetch_as` or
    /// `mapped_by`.
    pub fn query(&self, cypher: impl Into<String>) -> QuerySpec<'_> {
        QuerySpec::new(&self.graph, self.database.clone(), cypher)
    }

    /// Begin a transaction.
    pub async fn start_txn(&self) -> Result<neo4rs::Txn, GraphError> {
        Ok(self.graph.start_txn().await?)
    }
}
