//! Custom JSON shapes for movie payloads.
//!
//! The cast of a movie is a map from [`Person`] to [`Roles`]. On the wire it
//! is a plain JSON object: field names are person names, field values are
//! the role labels as an array. No entity metadata is written, so decoding
//! rebuilds name-only people.

/// Codec for `Movie::actors_and_roles`, for use with `#[serde(with = ..)]`.
///
/// Wire format per entry: `{"<name>": ["role1", "role2"]}`.
pub mod actors_and_roles {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::{Person, Roles};

    pub fn serialize<S>(map: &BTreeMap<Person, Roles>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(map.iter().map(|(person, roles)| (person.name.as_str(), roles)))
    }

    /// Rebuilds each key as a name-only [`Person`]. A value that is not an
    /// array of strings is a decoding error, not a coerced list.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<Person, Roles>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let by_name = BTreeMap::<String, Roles>::deserialize(deserializer)?;
        Ok(by_name
            .into_iter()
            .map(|(name, roles)| (Person::named(name), roles))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::types::{Movie, Person, Roles};

    fn movie_with_cast() -> Movie {
        let mut movie = Movie::new("The Matrix", None);
        movie.actors_and_roles.insert(
            Person::new("Carrie-Anne Moss", 1967),
            Roles::new(["Trinity"]),
        );
        movie.actors_and_roles.insert(
            Person::new("Hugo Weaving", 1960),
            Roles::new(["Agent Smith", "Bane"]),
        );
        movie
    }

    #[test]
    fn cast_is_keyed_by_person_name() {
        let json = serde_json::to_value(movie_with_cast()).unwrap();
        let cast = &json["actors_and_roles"];

        assert_eq!(cast["Carrie-Anne Moss"], serde_json::json!(["Trinity"]));
        assert_eq!(
            cast["Hugo Weaving"],
            serde_json::json!(["Agent Smith", "Bane"])
        );
    }

    #[test]
    fn role_order_survives_the_roundtrip() {
        let json = serde_json::to_string(&movie_with_cast()).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();

        let roles = back
            .actors_and_roles
            .get(&Person::named("Hugo Weaving"))
            .unwrap();
        assert_eq!(roles.0, vec!["Agent Smith", "Bane"]);
    }

    #[test]
    fn decoded_cast_keys_are_name_only() {
        let json = r#"{"title":"The Matrix","actors_and_roles":{"Keanu Reeves":["Neo"]}}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();

        let mut expected = BTreeMap::new();
        expected.insert(Person::named("Keanu Reeves"), Roles::new(["Neo"]));
        assert_eq!(movie.actors_and_roles, expected);
    }

    #[test]
    fn empty_cast_is_omitted_entirely() {
        let json = serde_json::to_value(Movie::new("Cast Away", None)).unwrap();
        assert!(json.get("actors_and_roles").is_none());
    }

    #[test]
    fn non_string_role_fails_to_decode() {
        let json = r#"{"title":"The Matrix","actors_and_roles":{"Keanu Reeves":["Neo",3,"Thomas"]}}"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn non_array_cast_value_fails_to_decode() {
        let json = r#"{"title":"The Matrix","actors_and_roles":{"Keanu Reeves":"Neo"}}"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }
}
