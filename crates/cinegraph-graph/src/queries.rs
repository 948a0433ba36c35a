//! Read operations for the movie graph.

use cinegraph_core::{Movie, Person, Roles};
use neo4rs::Row;

use crate::client::{GraphClient, GraphError};

/// Row projection for one cast member, before folding into the movie.
#[derive(Debug, serde::Deserialize)]
struct CastEntry {
    name: String,
    born: Option<i64>,
    roles: Option<Vec<String>>,
}

#[derive(Debug, serde::Deserialize)]
struct DirectorEntry {
    name: String,
    born: Option<i64>,
}

impl GraphClient {
    // ── Single Movie Lookups ─────────────────────────────────────

    /// Get a movie by its title, with cast and directors attached.
    pub async fn find_one_by_title(&self, title: &str) -> Result<Option<Movie>, GraphError> {
        self.query(
            "MATCH (m:Movie {title: $title})
             OPTIONAL MATCH (m)<-[r:ACTED_IN]-(a:Person)
             WITH m, [x IN collect({name: a.name, born: a.born, roles: r.roles})
                      WHERE x.name IS NOT NULL] AS cast
             OPTIONAL MATCH (m)<-[:DIRECTED]-(d:Person)
             WITH m, cast, [x IN collect({name: d.name, born: d.born})
                            WHERE x.name IS NOT NULL] AS directors
             RETURN m.title AS title, m.tagline AS tagline, cast, directors",
        )
        .param("title", title.to_string())
        .mapped_by(movie_from_row)
        .one()
        .await
    }

    // ── List Queries ─────────────────────────────────────────────

    /// List all movies, ordered by title.
    pub async fn find_all(&self) -> Result<Vec<Movie>, GraphError> {
        self.query(
            "MATCH (m:Movie)
             OPTIONAL MATCH (m)<-[r:ACTED_IN]-(a:Person)
             WITH m, [x IN collect({name: a.name, born: a.born, roles: r.roles})
                      WHERE x.name IS NOT NULL] AS cast
             OPTIONAL MATCH (m)<-[:DIRECTED]-(d:Person)
             WITH m, cast, [x IN collect({name: d.name, born: d.born})
                            WHERE x.name IS NOT NULL] AS directors
             RETURN m.title AS title, m.tagline AS tagline, cast, directors
             ORDER BY m.title",
        )
        .mapped_by(movie_from_row)
        .all()
        .await
    }

    /// Count all movies.
    pub async fn count_movies(&self) -> Result<i64, GraphError> {
        let count = self
            .query("MATCH (m:Movie) RETURN count(m) AS cnt")
            .mapped_by(|row| {
                row.get::<i64>("cnt")
                    .map_err(|e| GraphError::Mapping(format!("failed to read movie count: {e}")))
            })
            .one()
            .await?;
        Ok(count.unwrap_or(0))
    }
}

/// Fold one result row into a Movie.
fn movie_from_row(row: &Row) -> Result<Movie, GraphError> {
    let title: String = row
        .get("title")
        .map_err(|e| GraphError::Mapping(format!("failed to read movie title: {e}")))?;

    // Absent taglines are stored as the empty string, normalize back.
    let tagline = row
        .get::<Option<String>>("tagline")
        .unwrap_or(None)
        .filter(|t| !t.is_empty());

    let cast: Vec<CastEntry> = row
        .get("cast")
        .map_err(|e| GraphError::Mapping(format!("failed to read cast of {title}: {e}")))?;
    let directors: Vec<DirectorEntry> = row
        .get("directors")
        .map_err(|e| GraphError::Mapping(format!("failed to read directors of {title}: {e}")))?;

    let mut movie = Movie::new(title, tagline);
    for entry in cast {
        movie.actors_and_roles.insert(
            Person {
                name: entry.name,
                born: entry.born,
            },
            Roles(entry.roles.unwrap_or_default()),
        );
    }
    movie.directors = directors
        .into_iter()
        .map(|d| Person {
            name: d.name,
            born: d.born,
        })
        .collect();

    Ok(movie)
}
