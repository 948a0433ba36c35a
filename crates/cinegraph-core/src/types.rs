//! Core domain types for the movie graph.
//!
//! Movies and people are natural-keyed: a movie is identified by its title,
//! a person by their name. There are no surrogate ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── People ────────────────────────────────────────────────────────

/// A person in the movie graph, identified by name.
///
/// `born` is optional: a person reconstructed from a serialized map key
/// carries only the name. Such a partial person must be enriched before
/// being persisted back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Person {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub born: Option<i64>,
}

impl Person {
    pub fn new(name: impl Into<String>, born: i64) -> Self {
        Self {
            name: name.into(),
            born: Some(born),
        }
    }

    /// A person known only by name, e.g. rebuilt from a JSON object key.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            born: None,
        }
    }
}

// ── Roles ─────────────────────────────────────────────────────────

/// The roles one person played in one movie, in billing order.
/// Labels may repeat.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Roles(pub Vec<String>);

impl Roles {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }
}

// ── Movies ────────────────────────────────────────────────────────

/// A movie with its cast and directors.
///
/// JSON policy: optional and empty fields are omitted from the output.
/// The cast map serializes as an object keyed by person name, see
/// [`crate::json::actors_and_roles`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    #[serde(
        with = "crate::json::actors_and_roles",
        skip_serializing_if = "BTreeMap::is_empty",
        default
    )]
    pub actors_and_roles: BTreeMap<Person, Roles>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub directors: Vec<Person>,
}

impl Movie {
    /// A movie with no cast or directors attached yet.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            actors_and_roles: BTreeMap::new(),
            directors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_without_born_omits_the_field() {
        let json = serde_json::to_string(&Person::named("Keanu Reeves")).unwrap();
        assert_eq!(json, r#"{"name":"Keanu Reeves"}"#);

        let json = serde_json::to_string(&Person::new("Keanu Reeves", 1964)).unwrap();
        assert_eq!(json, r#"{"name":"Keanu Reeves","born":1964}"#);
    }

    #[test]
    fn empty_movie_serializes_to_title_only() {
        let movie = Movie::new("The Matrix", None);
        let json = serde_json::to_string(&movie).unwrap();
        assert_eq!(json, r#"{"title":"The Matrix"}"#);
    }

    #[test]
    fn movie_serialization_roundtrip() {
        let mut movie = Movie::new(
            "The Matrix",
            Some("Welcome to the Real World".to_string()),
        );
        movie.actors_and_roles.insert(
            Person::new("Keanu Reeves", 1964),
            Roles::new(["Neo"]),
        );
        movie
            .directors
            .push(Person::new("Lana Wachowski", 1965));

        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();

        assert_eq!(back.title, movie.title);
        assert_eq!(back.description, movie.description);
        assert_eq!(back.directors, movie.directors);
        // Cast keys come back as name-only people.
        let roles = back
            .actors_and_roles
            .get(&Person::named("Keanu Reeves"))
            .unwrap();
        assert_eq!(roles, &Roles::new(["Neo"]));
    }

    #[test]
    fn absent_cast_deserializes_to_empty_map() {
        let movie: Movie = serde_json::from_str(r#"{"title":"The Matrix"}"#).unwrap();
        assert!(movie.actors_and_roles.is_empty());
        assert!(movie.directors.is_empty());
    }
}
