//! Placeholder values shared by every test.
//!
//! None of these are real credentials.

/// User agent of the test Blizzard client.
pub static TEST_USER_AGENT: &str = "blackwater-tests/1.0";

/// Mock OAuth2 client ID.
pub static TEST_CLIENT_ID: &str = "blizzard_client_id";

/// Mock OAuth2 client secret.
pub static TEST_CLIENT_SECRET: &str = "blizzard_client_secret";

/// Bearer token pre-seeded into the test client, so no token exchange happens.
pub static TEST_ACCESS_TOKEN: &str = "test_token";

/// Connected realm ID used by fixtures when the test does not care.
pub const TEST_REALM_ID: i64 = 4466;

/// Faction row IDs seeded by the auction tables (Alliance, Horde, Neutral).
pub const TEST_FACTION_IDS: [i32; 3] = [0, 1, 2];

/// Auction house IDs of the Alliance, Horde and Neutral houses.
pub const TEST_AUCTION_HOUSE_IDS: [i64; 3] = [2, 6, 7];
