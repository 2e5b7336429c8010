use crate::flow::Endpoint;

#[cfg(test)]
mod tests;

/// Request selection criteria, fixed for the lifetime of a session.
///
/// All matching is plain substring containment over the rendered
/// `address:port` strings (or the raw payload for `uri`), not CIDR or
/// equality tests. Responses are never filtered; they are emitted whenever
/// they resolve against a pending request.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Substring the rendered source endpoint must contain.
    pub source: Option<String>,
    /// Substrings for the rendered destination endpoint; matching any one
    /// is enough. Empty means no destination restriction.
    pub destinations: Vec<String>,
    /// Substring searched anywhere in the raw request payload, not just
    /// the request-line URI token.
    pub uri: Option<String>,
}

impl FilterConfig {
    pub fn has_address_filters(&self) -> bool {
        self.source.is_some() || !self.destinations.is_empty()
    }

    pub fn matches_request(&self, src: &Endpoint, dst: &Endpoint, payload: &[u8]) -> bool {
        if let Some(needle) = &self.source
            && !src.to_string().contains(needle)
        {
            return false;
        }

        if !self.destinations.is_empty() {
            let rendered = dst.to_string();
            if !self
                .destinations
                .iter()
                .any(|needle| rendered.contains(needle))
            {
                return false;
            }
        }

        if let Some(needle) = &self.uri
            && !contains_bytes(payload, needle.as_bytes())
        {
            return false;
        }

        true
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}
