mod json_store;
pub mod marbles;
mod memory;

pub use json_store::JsonFileStore;
pub use memory::InMemoryStore;

/// Host variable holding each user's gold balance.
pub const GOLD_VARIABLE: &str = "points";
/// Host variable holding each user's watch time in seconds.
pub const WATCHTIME_VARIABLE: &str = "watchtime";
/// Host variable holding the points-system blob with coinflip and duel records.
pub const POINTS_PROFILE_VARIABLE: &str = "tawmae_data_TWITCH POINTS";
