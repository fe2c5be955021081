//! `/cafe` query parameters and their evaluation against the catalog

use crate::catalog::CityCatalog;
use crate::error::QueryError;

/// Raw parameters of a `/cafe` request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeQuery {
    /// Requested city key
    pub city: Option<String>,

    /// Unparsed result cap
    pub count: Option<String>,

    /// Substring filter; empty means no filtering
    pub search: String,
}

impl CafeQuery {
    /// Decode a urlencoded query string (without the leading `?`).
    ///
    /// The first occurrence of a repeated parameter wins.
    pub fn from_query_string(query: Option<&str>) -> Self {
        let mut city = None;
        let mut count = None;
        let mut search = None;

        for (key, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            let slot = match &*key {
                "city" => &mut city,
                "count" => &mut count,
                "search" => &mut search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self {
            city,
            count,
            search: search.unwrap_or_default(),
        }
    }

    /// Validate the query and select the matching cafés, in catalog order.
    ///
    /// The city is checked before the count.
    pub fn resolve<'a>(&self, catalog: &'a CityCatalog) -> Result<Vec<&'a str>, QueryError> {
        let cafes = self
            .city
            .as_deref()
            .and_then(|city| catalog.cafes(city))
            .ok_or(QueryError::UnknownCity)?;

        // An empty `count=` means no cap, same as an absent one.
        let limit = match self.count.as_deref().filter(|count| !count.is_empty()) {
            Some(count) => count.parse::<usize>().map_err(|_| QueryError::InvalidCount)?,
            None => usize::MAX,
        };

        let needle = fold_case(&self.search);

        Ok(cafes
            .iter()
            .filter(|cafe| needle.is_empty() || fold_case(cafe).contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect())
    }
}

/// Lowercase each character on its own, ignoring its position in the word.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
