pub mod export;
pub mod prompts;
pub mod render;

pub use export::{
    calculation_to_csv, calculation_to_json, foods_to_csv, foods_to_json, meals_to_csv,
    meals_to_json,
};
pub use prompts::{prompt_food, prompt_quantity, resolve_food, validate_quantity};
pub use render::{render_about, render_calculation, render_food_table, render_meal_card, render_meals};
