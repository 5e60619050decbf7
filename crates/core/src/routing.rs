//! Route classification used by the request gate.
//!
//! Every request path maps to exactly one [`RouteClass`]:
//!
//! | Path                          | Class       |
//! |-------------------------------|-------------|
//! | starts with `/todos`          | `Protected` |
//! | exactly `/login`, `/register` | `AuthOnly`  |
//! | anything else                 | `Public`    |

/// Prefix of every page that requires an authenticated subject.
pub const PROTECTED_PREFIX: &str = "/todos";

/// Where unauthenticated visitors of protected pages are sent.
pub const LOGIN_PATH: &str = "/login";

/// Registration page (auth-only, like [`LOGIN_PATH`]).
pub const REGISTER_PATH: &str = "/register";

/// Where authenticated visitors of auth-only pages are sent.
pub const HOME_PATH: &str = "/todos";

/// What identity state a request path requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a valid session; otherwise redirect to [`LOGIN_PATH`].
    Protected,
    /// Requires the absence of a valid session; otherwise redirect to [`HOME_PATH`].
    AuthOnly,
    /// Always allowed, the session cookie is not inspected.
    Public,
}

impl RouteClass {
    /// Classify a request path (without query string).
    pub fn of(path: &str) -> Self {
        if path.starts_with(PROTECTED_PREFIX) {
            RouteClass::Protected
        } else if path == LOGIN_PATH || path == REGISTER_PATH {
            RouteClass::AuthOnly
        } else {
            RouteClass::Public
        }
    }
}
