// contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use secrecy::SecretString;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

const LOG_FILTER_VAR: &str = "CONTACTS_LOG";

/// Loads an optional `.env` file from the current directory or one of its parents.
pub fn load_env() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Logs to stderr, filtered by `CONTACTS_LOG` (defaults to `info`).
pub fn enable_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;

    Ok(())
}

/// An account to create on startup, taken from the command line (`<email> <password>`) or from
/// `CONTACTS_EMAIL` and `CONTACTS_PASSWORD`.
pub fn load_demo_account() -> Option<(String, SecretString)> {
    let mut args = env::args().skip(1);

    if let (Some(email), Some(password)) = (args.next(), args.next()) {
        return Some((email, SecretString::new(password)));
    }

    let email = env::var("CONTACTS_EMAIL").ok()?;
    let password = env::var("CONTACTS_PASSWORD").ok()?;
    Some((email, SecretString::new(password)))
}
