pub mod category;
pub mod ingredient;
pub mod match_result;
pub mod recipe;
pub mod recipe_detail;
pub mod regional;

pub use category::Category;
pub use ingredient::{IngredientList, IngredientQuery};
pub use match_result::{FailedLookup, MatchResult};
pub use recipe::RecipeSummary;
pub use recipe_detail::{IngredientLine, RecipeDetail};
pub use regional::{RegionalDataset, RegionalIngredient, RegionalRecipe};
