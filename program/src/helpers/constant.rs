pub const GAME_SEED: &[u8] = b"game";
pub const PARK_MINT_SEED: &[u8] = b"park_mint";

pub const MAX_PLAYERS: usize = 4;
pub const MIN_PLAYERS_TO_START: usize = 2;
pub const MAX_MAPS: usize = 8;

/// A waiting room stays joinable for half an hour.
pub const ROOM_TTL_SECONDS: i64 = 1800;

/// Entry fee in base units of the GOR mint (1 token at 6 decimals).
pub const ENTRY_FEE: u64 = 1_000_000;

pub const PARK_DECIMALS: u8 = 6;
pub const PARK_TOKEN_UNIT: u64 = 1_000_000;
