use reqwest::{Client, Url};

use crate::{
    config::{AUTH_SCOPE, Config},
    error::ApiError,
    types::{Token, TokenResponse},
};

use super::expect_ok;

/// Builds the URL the user opens to grant access.
pub fn authorize_url(config: &Config) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        &config.authorize_endpoint(),
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", AUTH_SCOPE),
        ],
    )
}

/// Exchanges an authorization code for a token pair.
///
/// # Errors
///
/// - [`ApiError::Status`] when the token endpoint answers anything but 200;
///   the body is the provider's error text, unchanged
/// - [`ApiError::MissingRefreshToken`] when a 200 body carries no refresh token
/// - [`ApiError::Timeout`], [`ApiError::Network`], [`ApiError::Decode`] for
///   transport and parse failures
pub async fn exchange_code(
    client: &Client,
    config: &Config,
    code: &str,
) -> Result<Token, ApiError> {
    let res = client
        .post(config.token_endpoint())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await?;

    let json = expect_ok(res).await?.json::<TokenResponse>().await?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token: json.refresh_token.ok_or(ApiError::MissingRefreshToken)?,
    })
}

/// Requests a new access token with a refresh token. Single attempt.
pub async fn refresh_access_token(
    client: &Client,
    config: &Config,
    refresh_token: &str,
) -> Result<TokenResponse, ApiError> {
    let res = client
        .post(config.token_endpoint())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await?;

    Ok(expect_ok(res).await?.json::<TokenResponse>().await?)
}
