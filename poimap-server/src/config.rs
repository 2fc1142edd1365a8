//! `serve` subcommand options and their resolution into a [`ServeConfig`].

use std::net::SocketAddr;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use poimap_core::TileServerEndpoints;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ServerError;

pub(crate) const ARG_TILESERVER_URL: &str = "tileserver-url";
pub(crate) const ARG_TILESERVER_PUBLIC_URL: &str = "tileserver-public-url";
pub(crate) const ARG_BIND: &str = "bind";
pub(crate) const ENV_TILESERVER_URL: &str = "TILESERVER_URL";
pub(crate) const ENV_TILESERVER_PUBLIC_URL: &str = "TILESERVER_PUBLIC_URL";
pub(crate) const ENV_BIND: &str = "POIMAP_BIND";

/// Tile-service base URL used when none is configured.
pub const DEFAULT_TILESERVER_URL: &str = "http://localhost:8080";
/// Listen address used when none is configured.
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Serve the map page and the points-of-interest API. Tile-service \
                 URLs and the listen address can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Serve the map page and JSON API"
)]
#[ortho_config(prefix = "POIMAP")]
pub struct ServeArgs {
    /// Tile-service base URL used by the server for health checks.
    #[arg(long = ARG_TILESERVER_URL, env = ENV_TILESERVER_URL, value_name = "url")]
    #[serde(default)]
    pub tileserver_url: Option<String>,
    /// Tile-service base URL embedded in the map page for browsers.
    #[arg(
        long = ARG_TILESERVER_PUBLIC_URL,
        env = ENV_TILESERVER_PUBLIC_URL,
        value_name = "url"
    )]
    #[serde(default)]
    pub tileserver_public_url: Option<String>,
    /// Socket address to listen on.
    #[arg(long = ARG_BIND, env = ENV_BIND, value_name = "addr")]
    #[serde(default)]
    pub bind: Option<String>,
}

impl ServeArgs {
    /// Layer configuration files and environment beneath the CLI values and
    /// validate the result.
    ///
    /// # Errors
    /// Returns [`ServerError::Configuration`] when layering fails, or a
    /// validation error from [`ServeConfig::try_from`].
    pub fn into_config(self) -> Result<ServeConfig, ServerError> {
        let merged = self.load_and_merge().map_err(ServerError::Configuration)?;
        ServeConfig::try_from(merged)
    }
}

/// Validated settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    /// Internal and public tile-service base URLs, without trailing slashes.
    pub tileserver: TileServerEndpoints,
    /// Listen address.
    pub bind: SocketAddr,
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = ServerError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let internal = normalise_url(
            args.tileserver_url,
            ARG_TILESERVER_URL,
            ENV_TILESERVER_URL,
        )?;
        let public = normalise_url(
            args.tileserver_public_url,
            ARG_TILESERVER_PUBLIC_URL,
            ENV_TILESERVER_PUBLIC_URL,
        )?;
        let raw_bind = args.bind.unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = raw_bind
            .parse::<SocketAddr>()
            .map_err(|source| ServerError::InvalidBindAddress {
                value: raw_bind.clone(),
                source,
            })?;
        Ok(Self {
            tileserver: TileServerEndpoints { internal, public },
            bind,
        })
    }
}

fn normalise_url(
    value: Option<String>,
    field: &'static str,
    env: &'static str,
) -> Result<String, ServerError> {
    let raw = value.unwrap_or_else(|| DEFAULT_TILESERVER_URL.to_owned());
    let parsed = Url::parse(&raw).map_err(|source| ServerError::InvalidUrl {
        field,
        env,
        url: raw.clone(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ServerError::UnsupportedScheme { field, url: raw });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
