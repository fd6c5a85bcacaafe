//! HTTP verbs

use std::fmt;
use std::str::FromStr;

use crate::error::HttpError;

/// The HTTP verbs a request can be issued with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
    /// HEAD
    Head,
}

impl Method {
    /// Every supported verb
    pub const ALL: [Method; 6] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Head,
    ];

    /// Uppercase verb name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
        }
    }

    /// Whether the verb helpers accept a body for this method
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| HttpError::RequestConstruction(format!("Unsupported method: {}", s)))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
            Method::Head => reqwest::Method::HEAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("get".parse::<Method>().expect("valid"), Method::Get);
        assert_eq!("Patch".parse::<Method>().expect("valid"), Method::Patch);
        assert_eq!("HEAD".parse::<Method>().expect("valid"), Method::Head);
    }

    #[test]
    fn test_parse_unknown_method() {
        let err = "FETCH".parse::<Method>().expect_err("FETCH is not a verb");
        assert!(matches!(err, HttpError::RequestConstruction(_)));
    }

    #[test]
    fn test_matches_reqwest_names() {
        for method in Method::ALL {
            assert_eq!(reqwest::Method::from(method).as_str(), method.as_str());
            assert_eq!(method.to_string(), method.as_str());
        }
    }

    #[test]
    fn test_allows_body() {
        let with_body: Vec<_> = Method::ALL.into_iter().filter(Method::allows_body).collect();
        assert_eq!(with_body, vec![Method::Post, Method::Put, Method::Patch]);
    }
}
