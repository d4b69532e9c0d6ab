pub mod calculation;
pub mod food;
pub mod meal;

pub use calculation::CalculationResult;
pub use food::FoodItem;
pub use meal::Meal;
