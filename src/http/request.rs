/// HTTP request methods.
///
/// The four verbs the service routes on. Anything else fails to parse
/// as a method and is answered with the catch-all 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - List all records
    GET,
    /// POST - Insert a record
    POST,
    /// PUT - Rename a record
    PUT,
    /// DELETE - Remove a record
    DELETE,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, typically uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a routed verb, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use roster::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("PATCH"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    }

    /// Whether requests with this method carry a JSON payload.
    pub fn expects_payload(&self) -> bool {
        matches!(self, Method::POST | Method::PUT | Method::DELETE)
    }
}

/// Represents a parsed request from a client.
///
/// `method` is `None` when the verb is not one of the four the service
/// routes on. `path` and `version` are parsed and logged but do not
/// influence routing.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request method, if recognized
    pub method: Option<Method>,
    /// The request path (e.g. "/records")
    pub path: String,
    /// Protocol version token (typically "HTTP/1.1")
    pub version: String,
    /// Parsed JSON payload, present only for body-carrying methods
    pub payload: Option<serde_json::Value>,
}
