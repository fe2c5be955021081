//! City catalog - the read-only city → cafés dataset
//!
//! Built once at startup, either from the built-in list or from a JSON file,
//! and shared with request handlers through `AppState`.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;

/// Built-in dataset used when no dataset file is configured
const BUILTIN_CITIES: &[(&str, &[&str])] = &[
    (
        "moscow",
        &[
            "Мир кофе",
            "Сладкоежка",
            "Кофе и завтраки",
            "Сытый студент",
            "Ложка и вилка",
        ],
    ),
    ("tula", &["Тульский пряник", "Самовар", "Левша"]),
];

/// Mapping from city key to its ordered list of café names
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CityCatalog {
    cities: HashMap<String, Vec<String>>,
}

impl CityCatalog {
    /// Create a catalog from `(city, cafés)` pairs.
    ///
    /// Café order within each city is kept as given.
    pub fn new<I, C, S>(cities: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (C, Vec<S>)>,
        C: Into<String>,
        S: Into<String>,
    {
        let cities: HashMap<String, Vec<String>> = cities
            .into_iter()
            .map(|(city, cafes)| {
                let cafes = cafes.into_iter().map(Into::into).collect::<Vec<String>>();
                (city.into(), cafes)
            })
            .collect();

        let catalog = Self { cities };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The dataset compiled into the binary
    pub fn builtin() -> Self {
        let cities = BUILTIN_CITIES
            .iter()
            .map(|(city, cafes)| {
                let cafes = cafes.iter().map(|cafe| cafe.to_string()).collect::<Vec<_>>();
                (city.to_string(), cafes)
            })
            .collect();

        Self { cities }
    }

    /// Parse a catalog from a JSON object of `{"city": ["cafe", ...]}`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON dataset file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// Get the cafés of a city (exact, case-sensitive key match)
    pub fn cafes(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// Number of cities in the catalog
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    // City keys are lowercase; café names must not contain commas.
    fn validate(&self) -> Result<(), CatalogError> {
        for (city, cafes) in &self.cities {
            if city.is_empty() {
                return Err(CatalogError::EmptyCity);
            }
            if city.chars().any(char::is_uppercase) {
                return Err(CatalogError::UppercaseCity(city.clone()));
            }
            if let Some(cafe) = cafes.iter().find(|cafe| cafe.contains(',')) {
                return Err(CatalogError::CommaInName {
                    city: city.clone(),
                    cafe: cafe.clone(),
                });
            }
        }
        Ok(())
    }
}
