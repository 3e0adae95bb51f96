//! Google OAuth entry point and callback parsing.
//!
//! The backend performs the code exchange and redirects back with the issued
//! credential in the `token` query parameter.

use reqwest::Url;

pub const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/auth";
pub const CLIENT_ID: &str =
    "481051508755-f5h7kkq5r1m8i2t87vta31d29biam08t.apps.googleusercontent.com";
pub const REDIRECT_URI: &str = "https://api.pickdong.com/api/login/oauth/google";
pub const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/userinfo.email",
    "https://www.googleapis.com/auth/userinfo.profile",
];

pub fn authorization_url() -> String {
    let scope = SCOPES.join(" ");
    match Url::parse_with_params(
        AUTHORIZATION_ENDPOINT,
        &[
            ("client_id", CLIENT_ID),
            ("redirect_uri", REDIRECT_URI),
            ("response_type", "code"),
            ("scope", scope.as_str()),
        ],
    ) {
        Ok(url) => url.to_string(),
        // The endpoint is a constant; parsing cannot fail.
        Err(_) => AUTHORIZATION_ENDPOINT.to_string(),
    }
}

/// Extract the credential from a callback URL (`…/auth/callback/sign-in?token=…`)
/// or a bare query string (`token=…`). Empty values count as missing.
pub fn callback_token(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(_) => {
            let query = input.trim_start_matches('?');
            Url::parse(&format!("http://localhost/?{}", query)).ok()?
        }
    };
    url.query_pairs()
        .find(|(k, _)| k == "token")
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "tests/oauth_tests.rs"]
mod tests;
