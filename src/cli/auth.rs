use crate::{
    api::{AuthOutcome, CallbackState},
    config::{self, Config},
    error, info, server, spotify, success, warning,
};

/// Runs the interactive authorization flow.
///
/// Opens the consent page in the browser, waits on the local listener for
/// Spotify's redirect and stores the resulting token pair.
pub async fn auth() {
    let config_path = config::config_path();
    let config = match Config::load(&config_path).await {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    let addr = match config.callback_addr() {
        Ok(addr) => addr,
        Err(e) => error!("{}", e),
    };

    let login_url = match spotify::auth::authorize_url(&config) {
        Ok(url) => url,
        Err(e) => error!("Failed to build authorization URL: {}", e),
    };

    let client = match spotify::http_client() {
        Ok(client) => client,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };

    let state = CallbackState::new(config, client, config::tokens_path(&config_path));

    info!("Open this URL in your browser:\n{}", login_url);
    info!("Waiting for authorization on http://{}/callback ...", addr);

    if webbrowser::open(login_url.as_str()).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
    }

    match server::start_api_server(addr, state).await {
        Ok(Some(AuthOutcome::Authorized)) => success!("Authentication successful!"),
        Ok(Some(AuthOutcome::Failed(reason))) => error!("Authentication failed: {}", reason),
        Ok(None) => error!("Listener stopped before authorization completed."),
        Err(e) => error!("Failed to run callback listener on {}: {}", addr, e),
    }
}
