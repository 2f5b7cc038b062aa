use sp_api_client::utils::config::{
    get_env_non_empty, get_env_or_default, get_env_or_none, get_env_required,
};
use std::env;

#[test]
fn test_get_env_or_default_parses_value() {
    unsafe { env::set_var("SP_API_TEST_TIMEOUT_PARSE", "45") };
    assert_eq!(get_env_or_default("SP_API_TEST_TIMEOUT_PARSE", 30u64), 45);
}

#[test]
fn test_get_env_or_default_falls_back() {
    unsafe { env::set_var("SP_API_TEST_TIMEOUT_BAD", "soon") };
    assert_eq!(get_env_or_default("SP_API_TEST_TIMEOUT_BAD", 30u64), 30);
    assert_eq!(
        get_env_or_default("SP_API_TEST_UNSET_VARIABLE", String::from("US")),
        "US"
    );
}

#[test]
fn test_get_env_or_none() {
    unsafe { env::set_var("SP_API_TEST_RETRIES", "3") };
    assert_eq!(get_env_or_none::<u32>("SP_API_TEST_RETRIES"), Some(3));
    assert_eq!(get_env_or_none::<u32>("SP_API_TEST_UNSET_VARIABLE"), None);
}

#[test]
fn test_get_env_non_empty_trims() {
    unsafe { env::set_var("SP_API_TEST_BLANK", "   ") };
    unsafe { env::set_var("SP_API_TEST_PADDED", "  arn:aws:iam::1:role/x  ") };
    assert_eq!(get_env_non_empty("SP_API_TEST_BLANK"), None);
    assert_eq!(
        get_env_non_empty("SP_API_TEST_PADDED").as_deref(),
        Some("arn:aws:iam::1:role/x")
    );
}

#[test]
fn test_get_env_required_missing_is_empty() {
    assert_eq!(get_env_required("SP_API_TEST_UNSET_VARIABLE"), "");
}
