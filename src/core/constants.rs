// Energy economy
pub const ENERGY_CAP: u32 = 100;
pub const STARTING_ENERGY: u32 = 100;
pub const ENERGY_REGEN_PER_TURN: u32 = 20;

// Summon costs by rank ordinal, highest tier first. Anything below or
// outside the table costs DEFAULT_SUMMON_COST.
pub const SUMMON_COST_TABLE: [(u8, u32); 4] = [(4, 100), (3, 75), (2, 50), (1, 25)];
pub const DEFAULT_SUMMON_COST: u32 = 10;

// Scoring
pub const SCORE_PER_RANK: u32 = 100;

// Match defaults
pub const DEFAULT_MAX_TURNS: u32 = 10;
pub const DEFAULT_TURN_DURATION_SECONDS: f64 = 30.0;
pub const DEFAULT_MAX_ROSTER_SIZE: usize = 5;

// Host loop timing
pub const TICK_INTERVAL_MS: u64 = 100;
