use crate::spec::{placeholder_name, ApiDescription, Route};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Result of a path lookup: the candidate routes plus the placeholder values
/// captured from the input by the first pattern match.
#[derive(Debug, Clone, Default)]
pub struct Lookup<'a> {
    pub routes: Vec<&'a Route>,
    pub captures: BTreeMap<String, String>,
}

/// Index over an [`ApiDescription`] for exact and pattern path lookups.
#[derive(Debug, Clone)]
pub struct RouteTable {
    description: ApiDescription,
    /// Path template to indices into `description.routes`, in table order.
    by_path: HashMap<String, Vec<usize>>,
}

impl RouteTable {
    #[must_use]
    pub fn new(description: ApiDescription) -> Self {
        let mut by_path: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, route) in description.routes.iter().enumerate() {
            by_path.entry(route.path.clone()).or_default().push(idx);
        }
        Self {
            description,
            by_path,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &ApiDescription {
        &self.description
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.description.routes
    }

    /// Finds every route the input path can refer to.
    ///
    /// An input equal to a declared template returns all methods of that
    /// template. Otherwise every route whose template matches segment by
    /// segment is returned, deduplicated by method and template. An empty
    /// result is not an error here.
    #[must_use]
    pub fn lookup(&self, input_path: &str) -> Vec<&Route> {
        self.lookup_with_captures(input_path).routes
    }

    #[must_use]
    pub fn lookup_with_captures(&self, input_path: &str) -> Lookup<'_> {
        if let Some(indices) = self.by_path.get(input_path) {
            return Lookup {
                routes: indices.iter().map(|&i| &self.description.routes[i]).collect(),
                captures: BTreeMap::new(),
            };
        }

        let mut lookup = Lookup::default();
        let mut seen = HashSet::new();
        for route in &self.description.routes {
            let Some(captures) = match_path(&route.path, input_path) else {
                continue;
            };
            if lookup.routes.is_empty() {
                lookup.captures = captures;
            }
            if seen.insert((route.method, route.path.as_str())) {
                lookup.routes.push(route);
            }
        }
        lookup
    }

    /// Picks the route for a specific method (case-insensitive) among the lookup results.
    #[must_use]
    pub fn lookup_by_method(&self, input_path: &str, method: &str) -> Option<&Route> {
        let method = method.to_uppercase();
        self.lookup(input_path)
            .into_iter()
            .find(|r| r.method.as_str() == method)
    }
}

/// Matches an input path against a route template.
///
/// Both are split on `/` after trimming outer slashes; segment counts must be
/// equal and every template segment must either be a `{name}` placeholder or
/// equal the input segment byte for byte. Returns the captured
/// placeholder values on success.
#[must_use]
pub fn match_path(template: &str, input_path: &str) -> Option<BTreeMap<String, String>> {
    let template_parts: Vec<&str> = template.trim_matches('/').split('/').collect();
    let input_parts: Vec<&str> = input_path.trim_matches('/').split('/').collect();

    if template_parts.len() != input_parts.len() {
        return None;
    }

    let mut captures = BTreeMap::new();
    for (tp, ip) in template_parts.iter().zip(&input_parts) {
        if let Some(name) = placeholder_name(tp) {
            captures.insert(name.to_string(), (*ip).to_string());
        } else if tp != ip {
            return None;
        }
    }
    Some(captures)
}
