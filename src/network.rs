//! Network constants for the OpenSea API.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.opensea.io";

/// Default request timeout for the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Path prefix shared by every v2 endpoint.
pub const API_V2_PREFIX: &str = "/api/v2";

/// Seaport 1.6 contract, used as `protocol_address` for offers.
pub const SEAPORT_V1_6_ADDRESS: &str = "0x0000000000000068F116a894984e2DB1123eB395";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Environment variable read by `OpenSeaClientBuilder::from_env` for the key.
pub const API_KEY_ENV: &str = "OPENSEA_API_KEY";

/// Environment variable read by `OpenSeaClientBuilder::from_env` for the base URL.
pub const API_URL_ENV: &str = "OPENSEA_API_URL";
