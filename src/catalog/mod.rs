pub mod foods;
pub mod meals;

pub use foods::{categories, foods, foods_in_category, lookup, lookup_ignore_case, suggest_food, FOOD_TABLE};
pub use meals::{find_meal, list_meals, MEALS};
