//! Fluent query and fetch specs over the neo4rs driver.
//!
//! A [`QuerySpec`] binds parameters and a target database, then turns into a
//! [`RecordFetchSpec`] via `fetch_as` (serde, by field name) or `mapped_by`
//! (caller-supplied row mapper). Fetching follows one/first/all semantics:
//! absence is `Ok(None)`, never an error; only a multiplicity violation or a
//! driver failure is an `Err`.

use neo4rs::{query, Graph, Query, Row};
use serde::de::DeserializeOwned;

use crate::client::GraphError;

type RowMapper<T> = Box<dyn Fn(&Row) -> Result<T, GraphError> + Send + Sync>;

/// A parameterized, not-yet-executed Cypher query.
pub struct QuerySpec<'a> {
    graph: &'a Graph,
    database: Option<String>,
    query: Query,
}

impl<'a> QuerySpec<'a> {
    pub(crate) fn new(graph: &'a Graph, database: Option<String>, cypher: impl Into<String>) -> Self {
        Self {
            graph,
            database,
            query: query(&cypher.into()),
        }
    }

    /// Bind a query parameter.
    pub fn param<T: Into<neo4rs::BoltType>>(mut self, name: &str, value: T) -> Self {
        self.query = self.query.param(name, value);
        self
    }

    /// Scope this query to a named server database.
    ///
    /// Named `in_database` because `in` is a reserved word; forwards
    /// unchanged to the driver's per-database execution.
    pub fn in_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Execute without fetching results (CREATE, MERGE, DELETE, SET).
    pub async fn run(self) -> Result<(), GraphError> {
        match self.database.as_deref() {
            Some(db) => self.graph.run_on(db, self.query).await?,
            None => self.graph.run(self.query).await?,
        }
        Ok(())
    }

    /// Fetch records as `T`, deserialized from each row's returned fields
    /// by name. The turbofish is the explicit type token.
    pub fn fetch_as<T>(self) -> RecordFetchSpec<'a, T>
    where
        T: DeserializeOwned + 'static,
    {
        self.mapped_by(|row| {
            row.to::<T>()
                .map_err(|e| GraphError::Mapping(format!("failed to map record: {e}")))
        })
    }

    /// Fetch records through a caller-supplied row mapper, applied once per
    /// returned row.
    pub fn mapped_by<T, F>(self, mapper: F) -> RecordFetchSpec<'a, T>
    where
        F: Fn(&Row) -> Result<T, GraphError> + Send + Sync + 'static,
    {
        RecordFetchSpec {
            graph: self.graph,
            database: self.database,
            query: self.query,
            mapper: Box::new(mapper),
        }
    }
}

/// A query bound to a row mapper, ready to fetch.
///
/// Holds only the wrapped query and mapper; each fetch consumes the spec.
pub struct RecordFetchSpec<'a, T> {
    graph: &'a Graph,
    database: Option<String>,
    query: Query,
    mapper: RowMapper<T>,
}

impl<'a, T> RecordFetchSpec<'a, T> {
    /// Replace the row mapper ahead of the fetch.
    pub fn mapped_by<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&Row) -> Result<T, GraphError> + Send + Sync + 'static,
    {
        self.mapper = Box::new(mapper);
        self
    }

    /// Fetch exactly zero or one record.
    ///
    /// `Ok(None)` when the query returns nothing. More than one returned row
    /// is [`GraphError::IncorrectResultSize`].
    pub async fn one(self) -> Result<Option<T>, GraphError> {
        let Self {
            graph,
            database,
            query,
            mapper,
        } = self;

        let mut stream = match database.as_deref() {
            Some(db) => graph.execute_on(db, query).await?,
            None => graph.execute(query).await?,
        };

        let Some(row) = stream.next().await? else {
            return Ok(None);
        };
        let value = mapper(&row)?;

        if stream.next().await?.is_some() {
            return Err(GraphError::IncorrectResultSize { expected: 1 });
        }
        Ok(Some(value))
    }

    /// Fetch the first of possibly many records, or `Ok(None)` for an empty
    /// result.
    pub async fn first(self) -> Result<Option<T>, GraphError> {
        let Self {
            graph,
            database,
            query,
            mapper,
        } = self;

        let mut stream = match database.as_deref() {
            Some(db) => graph.execute_on(db, query).await?,
            None => graph.execute(query).await?,
        };

        match stream.next().await? {
            Some(row) => Ok(Some(mapper(&row)?)),
            None => Ok(None),
        }
    }

    /// Fetch all records.
    pub async fn all(self) -> Result<Vec<T>, GraphError> {
        let Self {
            graph,
            database,
            query,
            mapper,
        } = self;

        let mut stream = match database.as_deref() {
            Some(db) => graph.execute_on(db, query).await?,
            None => graph.execute(query).await?,
        };

        let mut results = Vec::new();
        while let Some(row) = stream.next().await? {
            results.push(mapper(&row)?);
        }
        Ok(results)
    }
}
