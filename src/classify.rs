#[cfg(test)]
mod tests;

const REQUEST_METHODS: [&[u8]; 7] = [
    b"GET", b"POST", b"PUT", b"DELETE", b"HEAD", b"OPTIONS", b"PATCH",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Request,
    Response,
    Ignore,
}

/// Classifies one packet's application payload by its leading bytes.
///
/// Only the prefix is inspected; anything that does not open with an HTTP
/// method token or a status line is not HTTP as far as this tool cares.
pub fn classify(payload: &[u8]) -> Classification {
    if payload.starts_with(b"HTTP/") {
        return Classification::Response;
    }
    if REQUEST_METHODS
        .iter()
        .any(|method| payload.starts_with(method))
    {
        return Classification::Request;
    }
    Classification::Ignore
}
