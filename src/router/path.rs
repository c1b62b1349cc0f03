//! Path normalization and location parsing.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// Normalize a location path: drop trailing slashes unless the path is the root.
///
/// An empty path is treated as the root. The result is a fixed point:
/// `normalize(&normalize(p)) == normalize(p)`.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// The routable part of a browser location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: String,
}

impl Location {
    /// Parse `path[?query][#fragment]`; the fragment is discarded.
    pub fn parse(url: &str) -> Self {
        let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
        let (path, query) = without_fragment.split_once('?').unwrap_or((without_fragment, ""));
        Self { path: normalize(path), query: query.to_owned() }
    }

    /// Normalized path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string without the leading `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// First value for `key` in the query string, form-decoded: `+` is a
    /// space and `%XX` escapes are expanded. A value that does not decode to
    /// UTF-8 is returned with only the `+` substitution.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| decode_component(v))
    }

    /// Path and query recombined into a URL suitable for `history.pushState`.
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
