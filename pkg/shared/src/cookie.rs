use crate::session::SESSION_COOKIE_KEY;
use chrono::Duration;
use http::HeaderValue;
use std::fmt;

/// Representation of an HTTP cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cookie {
    /// The cookie's name.
    name: String,

    /// The cookie's value.
    value: String,

    /// The cookie's maximum age.
    max_age: Duration,

    /// The cookie's path domain, if any.
    path: String,

    /// Whether this cookie was marked Secure.
    secure: bool,

    /// Whether this cookie was marked HttpOnly.
    http_only: bool,

    /// The draft `SameSite` attribute.
    same_site: SameSite,
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;

        if self.max_age.num_seconds() >= 0 {
            write!(f, "; Max-Age={}", self.max_age.num_seconds())?;
        }

        if !self.path.is_empty() {
            write!(f, "; Path={}", self.path)?;
        }

        if self.secure {
            write!(f, "; Secure")?;
        }

        if self.http_only {
            write!(f, "; HttpOnly")?;
        }

        write!(f, "; SameSite={}", self.same_site)?;

        Ok(())
    }
}

/// Creates a new session cookie with the given lifetime.
pub fn create_session_cookie<T: Into<String>>(session_id: T, max_age: Duration) -> Cookie {
    build_cookie(SESSION_COOKIE_KEY, session_id, max_age)
}

/// Creates a session cookie that instructs the browser to delete it.
pub fn expire_session_cookie() -> Cookie {
    build_cookie(SESSION_COOKIE_KEY, "", Duration::zero())
}

fn build_cookie<N: Into<String>, V: Into<String>>(name: N, value: V, max_age: Duration) -> Cookie {
    Cookie {
        name: name.into(),
        value: value.into(),
        max_age,
        path: String::from("/"),
        secure: false, // TODO: Enable on production
        http_only: true,
        same_site: SameSite::Lax,
    }
}

/// Extracts the session cookie from a cookie header value.
pub fn extract_session_cookie(value: &HeaderValue) -> Option<String> {
    extract_cookie_by_name(SESSION_COOKIE_KEY, value)
}

/// Extracts a cookie by name from a cookie header value.
pub fn extract_cookie_by_name(name: &str, value: &HeaderValue) -> Option<String> {
    value
        .to_str()
        .ok()?
        .split(';')
        .map(str::trim)
        .filter_map(|cookie| cookie.split_once('='))
        .find_map(|(k, v)| (k == name).then(|| v.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SameSite {
    Lax,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SameSite::Lax => write!(f, "Lax"),
        }
    }
}

/// A helper extension for attaching cookies to HTTP responses.
pub trait ResponseCookies {
    /// Adds a single [`Cookie`] to the response.
    fn with_cookie(self, cookie: Cookie) -> Self;

    /// Adds multiple [`Cookie`]s to the response.
    fn with_cookies(self, cookies: impl IntoIterator<Item = Cookie>) -> Self;
}

impl ResponseCookies for http::response::Builder {
    fn with_cookies(mut self, cookies: impl IntoIterator<Item = Cookie>) -> Self {
        for cookie in cookies {
            self = self.with_cookie(cookie);
        }
        self
    }

    fn with_cookie(mut self, cookie: Cookie) -> Self {
        self = self.header(
            http::header::SET_COOKIE,
            http::HeaderValue::from_str(&cookie.to_string()).expect("valid cookie"),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use axum::response::Response;
    use http::header::SET_COOKIE;

    use super::*;

    #[test]
    fn test_session_cookie() {
        // when
        let cookie = create_session_cookie("opaque-id", Duration::seconds(86400));

        // then
        assert_eq!(
            cookie.to_string(),
            "sessionId=opaque-id; Max-Age=86400; Path=/; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_expired_cookie() {
        // when
        let cookie = expire_session_cookie();

        // then
        assert_eq!(
            cookie.to_string(),
            "sessionId=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_extract_cookie() {
        // given
        let cookie = create_session_cookie("opaque-id", Duration::zero());
        let header = HeaderValue::from_str(&cookie.to_string()).unwrap();

        // when
        let value = extract_session_cookie(&header);

        // then
        assert_eq!(value, Some("opaque-id".to_string()));
    }

    #[test]
    fn test_extract_cookie_among_others() {
        // given
        let header = HeaderValue::from_str("theme=dark; sessionId=opaque-id; lang=en").unwrap();

        // when
        let value = extract_session_cookie(&header);

        // then
        assert_eq!(value, Some("opaque-id".to_string()));
    }

    #[test]
    fn test_response_with_cookie() {
        // given
        let cookie = create_session_cookie("opaque-id", Duration::zero());

        // when
        let response = Response::builder().with_cookie(cookie).body(()).unwrap();

        // then
        assert_eq!(
            response.headers().get(SET_COOKIE).unwrap(),
            "sessionId=opaque-id; Max-Age=0; Path=/; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_response_with_cookies() {
        // given
        let cookie1 = create_session_cookie("first", Duration::zero());
        let cookie2 = expire_session_cookie();

        // when
        let response = Response::builder()
            .with_cookies([cookie1, cookie2])
            .body(())
            .unwrap();

        // then
        let headers: Vec<_> = response.headers().get_all(SET_COOKIE).iter().collect();
        assert_eq!(
            extract_cookie_by_name(SESSION_COOKIE_KEY, headers[0]).unwrap(),
            "first"
        );
        assert_eq!(
            extract_cookie_by_name(SESSION_COOKIE_KEY, headers[1]).unwrap(),
            ""
        );
    }
}
