//! Standard envelope messages for consistent responses.

pub const OK: &str = "OK";
pub const INVALID_PARAMETERS: &str = "Invalid parameters";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const REQUEST_TIMEOUT: &str = "Request timed out";
