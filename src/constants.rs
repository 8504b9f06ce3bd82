// Roster and player generation
pub const ROSTER_SIZE: usize = 5;
pub const SKILL_GEN_MIN: u32 = 50;
pub const SKILL_GEN_MAX: u32 = 70;
pub const POTENTIAL_MIN: u32 = 80;
pub const POTENTIAL_MAX: u32 = 98;

// Training
pub const BOOTCAMP_COST_PER_PLAYER: u32 = 50;
pub const BOOTCAMP_GAIN_MIN: u32 = 1;
pub const BOOTCAMP_GAIN_MAX: u32 = 5;

// Match resolution: each side's average skill swings by up to this much
pub const FORM_SWING: i32 = 5;

// League
pub const POINTS_PER_WIN: u32 = 3;
pub const POINTS_PER_DRAW: u32 = 1;
pub const LEAGUE_INCOME: u32 = 500;
pub const MIN_AI_TEAMS_FOR_ROUND: usize = 4;

// Tournament
pub const TOURNAMENT_ENTRY_FEE: u32 = 1_000;
pub const TOURNAMENT_PRIZE: u32 = 5_000;
pub const TOURNAMENT_BRACKET_SIZE: usize = 4;

// Transfer economy
pub const PRICE_PER_SKILL_POINT: u32 = 20;
pub const SELL_BELOW_BALANCE: u32 = 1_000;
pub const BUY_ABOVE_BALANCE: u32 = 3_000;
pub const AI_ACT_CHANCE_IN_TEN: u32 = 7;

// Session setup and market churn
pub const STARTING_MONEY: u32 = 5_000;
pub const AI_STARTING_MONEY_BASE: u32 = 1_000;
pub const AI_STARTING_MONEY_SPREAD: u32 = 2_000;
pub const INITIAL_MARKET_STOCK: usize = 10;
pub const MARKET_RESTOCK_PER_CYCLE: usize = 2;
pub const MARKET_CAP: usize = 15;
