/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const NA_ENDPOINT: &str = "https://sellingpartnerapi-na.amazon.com";
const EU_ENDPOINT: &str = "https://sellingpartnerapi-eu.amazon.com";
const FE_ENDPOINT: &str = "https://sellingpartnerapi-fe.amazon.com";

const NA_REGION: &str = "us-east-1";
const EU_REGION: &str = "eu-west-1";
const FE_REGION: &str = "us-west-2";

/// Region, endpoint and marketplace id of a selling country
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MarketplaceInfo {
    /// AWS region hosting the endpoint
    pub region: String,
    /// Base URL of the SP-API endpoint, without trailing slash
    pub endpoint: String,
    /// Marketplace identifier
    pub marketplace_id: String,
}

static MARKETPLACES: Lazy<HashMap<&'static str, (&'static str, &'static str, &'static str)>> =
    Lazy::new(|| {
        HashMap::from([
            // North America
            ("CA", ("A2EUQ1WTGCTBG2", NA_ENDPOINT, NA_REGION)),
            ("US", ("ATVPDKIKX0DER", NA_ENDPOINT, NA_REGION)),
            ("MX", ("A1AM78C64UM0Y8", NA_ENDPOINT, NA_REGION)),
            ("BR", ("A2Q3Y263D00KWC", NA_ENDPOINT, NA_REGION)),
            // Europe, Middle East and India
            ("ES", ("A1RKKUPIHCS9HS", EU_ENDPOINT, EU_REGION)),
            ("GB", ("A1F83G8C2ARO7P", EU_ENDPOINT, EU_REGION)),
            ("FR", ("A13V1IB3VIYZZH", EU_ENDPOINT, EU_REGION)),
            ("BE", ("AMEN7PMS3EDWL", EU_ENDPOINT, EU_REGION)),
            ("NL", ("A1805IZSGTT6HS", EU_ENDPOINT, EU_REGION)),
            ("DE", ("A1PA6795UKMFR9", EU_ENDPOINT, EU_REGION)),
            ("IT", ("APJ6JRA9NG5V4", EU_ENDPOINT, EU_REGION)),
            ("SE", ("A2NODRKZP88ZB9", EU_ENDPOINT, EU_REGION)),
            ("PL", ("A1C3SOZRARQ6R3", EU_ENDPOINT, EU_REGION)),
            ("EG", ("ARBP9OOSHTCHU", EU_ENDPOINT, EU_REGION)),
            ("TR", ("A33AVAJ2PDY3EV", EU_ENDPOINT, EU_REGION)),
            ("SA", ("A17E79C6D8DWNP", EU_ENDPOINT, EU_REGION)),
            ("AE", ("A2VIGQ35RCS4UG", EU_ENDPOINT, EU_REGION)),
            ("IN", ("A21TJRUUN4KGV", EU_ENDPOINT, EU_REGION)),
            // Far East
            ("SG", ("A19VAU5U5O7RUS", FE_ENDPOINT, FE_REGION)),
            ("AU", ("A39IBJ37TRP1C6", FE_ENDPOINT, FE_REGION)),
            ("JP", ("A1VC38T7YXB528", FE_ENDPOINT, FE_REGION)),
        ])
    });

/// Resolves the marketplace data of a country
///
/// # Arguments
/// * `country_code` - ISO 3166-1 alpha-2 code, case insensitive
///
/// # Returns
/// * `Ok(MarketplaceInfo)` - Region, endpoint and marketplace id
/// * `Err(AppError::UnknownCountry)` - If the country is not an SP-API marketplace
pub fn get_marketplace_data(country_code: &str) -> Result<MarketplaceInfo, AppError> {
    let key = country_code.trim().to_ascii_uppercase();
    MARKETPLACES
        .get(key.as_str())
        .map(|(marketplace_id, endpoint, region)| MarketplaceInfo {
            region: (*region).to_string(),
            endpoint: (*endpoint).to_string(),
            marketplace_id: (*marketplace_id).to_string(),
        })
        .ok_or_else(|| AppError::UnknownCountry(country_code.to_string()))
}

/// Country codes with a known marketplace, sorted
#[must_use]
pub fn supported_countries() -> Vec<&'static str> {
    let mut countries: Vec<&'static str> = MARKETPLACES.keys().copied().collect();
    countries.sort_unstable();
    countries
}
