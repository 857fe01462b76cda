//! One-shot notice cookies.
//!
//! Notices survive exactly one redirect: the gate or a handler sets a
//! short machine code in a cookie, and the next page read clears it and
//! maps the code back to its human message. Codes keep the cookie value
//! free of spaces and punctuation.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Name of the notice cookie.
pub const FLASH_COOKIE: &str = "campushub_flash";

/// Known notice codes and their display messages.
const MESSAGES: &[(&str, &str)] = &[
    ("role-mismatch", "Access denied. Invalid session."),
    ("insufficient-privilege", "Access denied. Insufficient permissions."),
    ("logged-out", "You have been logged out successfully."),
    ("invalid-credentials", "Invalid username or password."),
    ("registered", "Registration successful! Please login."),
];

/// Sets a notice code, replacing any pending one.
pub fn set_flash(jar: CookieJar, code: &'static str) -> CookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, code))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Takes the pending notice, clearing the cookie.
///
/// Unknown codes are dropped rather than echoed back to the client.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = jar.get(FLASH_COOKIE).and_then(|cookie| {
        let code = cookie.value();
        MESSAGES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, message)| message.to_string())
    });

    let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/").build());
    (jar, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_take() {
        let jar = set_flash(CookieJar::new(), "logged-out");
        let (jar, message) = take_flash(jar);
        assert_eq!(message.as_deref(), Some("You have been logged out successfully."));
        assert!(jar.get(FLASH_COOKIE).map(|c| c.value().is_empty()).unwrap_or(true));
    }

    #[test]
    fn test_unknown_code_is_dropped() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "garbage"));
        let (_, message) = take_flash(jar);
        assert!(message.is_none());
    }
}
