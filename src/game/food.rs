//! The food progression table: which critter the pellet shows at a given
//! score

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FoodLevel {
    /// The lowest score at which this food is served
    pub(crate) min_score: u32,
    pub(crate) name: &'static str,
    /// Glyph used to draw the pellet
    pub(crate) symbol: char,
}

const WORM: FoodLevel = FoodLevel {
    min_score: 0,
    name: "Worm",
    symbol: '≈',
};

/// Ordered by ascending `min_score`; the first entry must have a `min_score`
/// of zero.
static FOOD_LEVELS: [FoodLevel; 4] = [
    WORM,
    FoodLevel {
        min_score: 3,
        name: "Cricket",
        symbol: 'ж',
    },
    FoodLevel {
        min_score: 6,
        name: "Snail",
        symbol: '@',
    },
    FoodLevel {
        min_score: 9,
        name: "Frog",
        symbol: 'ö',
    },
];

/// Return the food served at `score`: the entry with the greatest
/// `min_score` not exceeding `score`
pub(crate) fn current_food(score: u32) -> &'static FoodLevel {
    FOOD_LEVELS
        .iter()
        .rev()
        .find(|lvl| lvl.min_score <= score)
        .unwrap_or(&WORM)
}
