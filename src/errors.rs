pub const ERR_INVALID_CONFIG: &str = "invalid pool configuration";
pub const ERR_UNAUTHORIZED: &str = "caller is not the pool authority";
pub const ERR_ROUND_CLOSED: &str = "round is closed";
pub const ERR_ROUND_STILL_OPEN: &str = "round is still open";
pub const ERR_INVALID_AMOUNT: &str = "deposit amount must be positive";
pub const ERR_NO_CONTRIBUTION: &str = "no contribution in this round";
pub const ERR_ALREADY_SETTLED: &str = "contribution already settled";
pub const ERR_TRANSFER_FAILED: &str = "vault transfer failed";
pub const ERR_MINT_FAILED: &str = "claim token mint failed";
pub const ERR_POOL_NOT_FOUND: &str = "pool does not exist";
pub const ERR_WRONG_TOKEN: &str = "payment token is not the pool base asset";
pub const ERR_UNKNOWN_ROUND: &str = "round has not been archived";
