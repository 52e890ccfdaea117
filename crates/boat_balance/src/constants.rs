/// Exhaustive search materialises N! arrangements
pub const MAX_EXHAUSTIVE_ITEMS: usize = 10; // above this a scaling warning is logged

/// Largest n whose factorial fits in a u64 (20! = 2_432_902_008_176_640_000)
pub const MAX_FACTORIAL_INPUT: u64 = 20;

/// Weights used by the command line runner when none are given
pub const DEMO_WEIGHTS: [i64; 3] = [73, 85, 81];
