mod ingredient_intersection;
mod match_accumulator;

pub use ingredient_intersection::{IngredientIntersection, LookupOutcome};
pub use match_accumulator::MatchAccumulator;
