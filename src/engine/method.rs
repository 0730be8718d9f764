use crate::spec::{HttpMethod, Route};

/// Outcome of choosing an HTTP method for a set of candidate routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inference {
    /// Upper-cased method name. May name a method none of the candidates offer
    /// when it came from an explicit override.
    Method(String),
    Ambiguous { available: Vec<HttpMethod> },
}

/// Write methods tried, in order, when a payload is present.
const PAYLOAD_PREFERENCE: [HttpMethod; 3] = [HttpMethod::Post, HttpMethod::Patch, HttpMethod::Put];

/// Chooses the HTTP method for a request.
///
/// A non-empty override always wins. Without a payload GET is preferred;
/// with one, POST, then PATCH, then PUT. If the preferred methods are absent
/// and exactly one candidate exists, its method is used.
#[must_use]
pub fn infer_method(
    candidates: &[&Route],
    has_payload: bool,
    method_override: Option<&str>,
) -> Inference {
    if let Some(method) = method_override.map(str::trim).filter(|m| !m.is_empty()) {
        return Inference::Method(method.to_uppercase());
    }

    let offers = |method: HttpMethod| candidates.iter().any(|r| r.method == method);

    let preferred = if has_payload {
        PAYLOAD_PREFERENCE.into_iter().find(|&m| offers(m))
    } else {
        Some(HttpMethod::Get).filter(|&m| offers(m))
    };

    if let Some(method) = preferred {
        return Inference::Method(method.as_str().to_string());
    }

    match candidates {
        [only] => Inference::Method(only.method.as_str().to_string()),
        _ => Inference::Ambiguous {
            available: candidates.iter().map(|r| r.method).collect(),
        },
    }
}
