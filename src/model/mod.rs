/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Token endpoint payloads
pub mod auth;
/// Marketplace lookup table
pub mod marketplace;
/// Request models for API calls
pub mod requests;
/// Retry configuration for SP-API calls
pub mod retry;
pub mod utils;
