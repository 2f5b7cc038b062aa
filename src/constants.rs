/// Login with Amazon token endpoint used for the refresh-token grant
pub const AUTH_URL: &str = "https://api.amazon.com/auth/o2/token";
/// Grant type sent to the token endpoint
pub const REFRESH_TOKEN_GRANT: &str = "refresh_token";
/// Header carrying the access token on every SP-API request
pub const ACCESS_TOKEN_HEADER: &str = "x-amz-access-token";
/// User agent string sent on every SP-API request
pub const USER_AGENT: &str = "python-amazon-mws/0.0.1 (Language=Python)";
/// Content type of SP-API request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Country used when none is configured
pub const DEFAULT_COUNTRY_CODE: &str = "US";
/// Default transport timeout in seconds (0 disables it)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Upper bound for the configurable retry limit of a settings record
pub const MAX_RETRY_LIMIT: u32 = 5;
/// How far back `after_date` may reach, in days
pub const AFTER_DATE_MAX_AGE_DAYS: i64 = 30;
/// Timeout of the background order fetch job, in seconds
pub const ORDER_JOB_TIMEOUT_SECS: u64 = 4000;
/// Entry point name of the background order fetch job
pub const ORDER_JOB_METHOD: &str = "get_orders";
/// Default delay between retries of an SP-API call, in seconds
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;
