use std::fmt;

/// HTTP method of an [`ApiRequest`](crate::ApiRequest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Patch,
}

impl Method {
    /// Whether request parameters are encoded into the URL query string.
    ///
    /// Methods that conventionally carry no request body (GET, HEAD,
    /// DELETE) put their parameters in the URL; all others get a JSON
    /// body instead. Pure function of the method, no state involved.
    pub fn encodes_in_query(&self) -> bool {
        matches!(self, Method::Get | Method::Head | Method::Delete)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodyless_methods_encode_in_query() {
        for method in [Method::Get, Method::Head, Method::Delete] {
            assert!(method.encodes_in_query(), "{method} should use the query string");
        }
        for method in [Method::Post, Method::Put, Method::Patch] {
            assert!(!method.encodes_in_query(), "{method} should use a JSON body");
        }
    }

    #[test]
    fn wire_names_are_uppercase() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }
}
