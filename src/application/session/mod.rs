//! Working-set state for interactive use
mod ingredient_session;
mod search_debouncer;

pub use ingredient_session::{EvaluationTicket, IngredientSession};
pub use search_debouncer::SearchDebouncer;
