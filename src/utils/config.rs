/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is unset or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}

/// Gets a string environment variable, treating blank values as unset
pub fn get_env_non_empty(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Gets a required string environment variable, logging when it is missing
///
/// Returns an empty string when unset so that client construction reports the
/// missing credential instead of this helper.
pub fn get_env_required(env_var: &str) -> String {
    get_env_non_empty(env_var).unwrap_or_else(|| {
        warn!("{} not found in environment variables or .env file", env_var);
        String::new()
    })
}
