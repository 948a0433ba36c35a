//! Write operations for the movie graph.
//!
//! All mutations use MERGE (upsert) semantics keyed on natural keys:
//! movies by title, people by name. Saving a movie replaces its incoming
//! relationships wholesale, so cast members removed from the payload also
//! disappear from the graph.

use cinegraph_core::{Movie, Person};
use neo4rs::{query, Query};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    // ── Movie Upserts ────────────────────────────────────────────

    /// Create or update a movie with its cast and directors, in one
    /// transaction. Saving the same movie twice leaves a single node.
    pub async fn save_movie(&self, movie: &Movie) -> Result<(), GraphError> {
        let mut txn = self.start_txn().await?;

        txn.run(
            query("MERGE (m:Movie {title: $title}) SET m.tagline = $tagline")
                .param("title", movie.title.clone())
                .param("tagline", opt_string(&movie.description)),
        )
        .await?;

        txn.run(
            query("MATCH (m:Movie {title: $title})<-[r:ACTED_IN|DIRECTED]-() DELETE r")
                .param("title", movie.title.clone()),
        )
        .await?;

        for (person, roles) in &movie.actors_and_roles {
            txn.run(upsert_person(person)).await?;
            txn.run(
                query(
                    "MATCH (p:Person {name: $name}), (m:Movie {title: $title})
                     MERGE (p)-[r:ACTED_IN]->(m)
                     SET r.roles = $roles",
                )
                .param("name", person.name.clone())
                .param("title", movie.title.clone())
                .param("roles", roles.0.clone()),
            )
            .await?;
        }

        for director in &movie.directors {
            txn.run(upsert_person(director)).await?;
            txn.run(
                query(
                    "MATCH (p:Person {name: $name}), (m:Movie {title: $title})
                     MERGE (p)-[:DIRECTED]->(m)",
                )
                .param("name", director.name.clone())
                .param("title", movie.title.clone()),
            )
            .await?;
        }

        txn.commit().await?;
        Ok(())
    }

    // ── Deletes ──────────────────────────────────────────────────

    /// Delete a movie and its relationships.
    /// Returns the count of deleted movies (0 or 1).
    pub async fn delete_movie_by_title(&self, title: &str) -> Result<i64, GraphError> {
        let deleted = self
            .query(
                "MATCH (m:Movie {title: $title})
                 DETACH DELETE m
                 RETURN count(m) AS cnt",
            )
            .param("title", title.to_string())
            .mapped_by(|row| {
                row.get::<i64>("cnt")
                    .map_err(|e| GraphError::Mapping(format!("failed to read delete count: {e}")))
            })
            .one()
            .await?;
        Ok(deleted.unwrap_or(0))
    }
}

// ── Helpers ──────────────────────────────────────────────────────

/// Upsert a person node. `born` is only written when known, so a partial
/// person rebuilt from a map key never blanks an existing value.
fn upsert_person(person: &Person) -> Query {
    match person.born {
        Some(born) => query("MERGE (p:Person {name: $name}) SET p.born = $born")
            .param("name", person.name.clone())
            .param("born", born),
        None => query("MERGE (p:Person {name: $name})").param("name", person.name.clone()),
    }
}

fn opt_string(opt: &Option<String>) -> String {
    opt.clone().unwrap_or_default()
}
