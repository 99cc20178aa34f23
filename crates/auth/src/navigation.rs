//! Navigation targets
//!
//! The app routes on the URL fragment (`#/formPostulante?token=...`). Only
//! the part after the first `#` is routed; a query before the fragment is
//! not part of the in-app target.

/// A parsed in-app navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    target: String,
    path: String,
    query: Option<Vec<(String, String)>>,
}

impl Navigation {
    pub fn parse(target: &str) -> Self {
        let route = match target.split_once('#') {
            Some((_, fragment)) => fragment,
            None => target,
        };

        let (path, query) = match route.split_once('?') {
            Some((path, query)) => (
                path,
                Some(
                    url::form_urlencoded::parse(query.as_bytes())
                        .into_owned()
                        .collect(),
                ),
            ),
            None => (route, None),
        };

        Self {
            target: target.to_string(),
            path: path.to_string(),
            query,
        }
    }

    /// The target exactly as navigated to
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the target carried a `?` at all
    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    /// First value for `key`; `None` without a query component
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .as_ref()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
