use crate::calculator::{format_carbon, format_distance};
use crate::error::Result;
use crate::models::{CalculationResult, FoodItem, Meal};

const TAGLINE: &str = "Sustainable Eating Made Simple";
const HEADLINE: &str = "Eat Better, For You & The Planet";
const PITCH: &str = "Discover delicious, eco-friendly meals tailored to your taste. \
Track your carbon footprint and make sustainable choices effortlessly.";
const FOOTER: &str = "© 2025 EcoMeal. Making sustainable eating simple and delicious.";

/// Render a calculation result as the calculator card.
pub fn render_calculation(result: &CalculationResult) -> String {
    let impact = result.impact();

    format!(
        "\n=== Food Carbon Calculator ===\n\n\
         Food: {} ({} kg)\n\
         Total Carbon Footprint: {} kg CO₂\n\
         {} {}\n\n\
         Equivalent to driving approximately {} km in a car\n",
        result.food_name,
        result.quantity,
        format_carbon(result.total_carbon),
        impact.trend().arrow(),
        impact.label(),
        format_distance(result.driving_equivalent_km())
    )
}

/// Render reference foods as an aligned table.
pub fn render_food_table(foods: &[&FoodItem], title: &str) -> String {
    if foods.is_empty() {
        return format!("{}: (none)\n", title);
    }

    let name_width = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);
    let category_width = foods.iter().map(|f| f.category.len()).max().unwrap_or(10);

    let mut out = format!("\n=== {} ({} items) ===\n\n", title, foods.len());
    for food in foods {
        out.push_str(&format!(
            "  {:<nw$}  {:<cw$}  {:>5.1} kg CO₂/kg\n",
            food.name,
            food.category,
            food.carbon_per_unit,
            nw = name_width,
            cw = category_width
        ));
    }
    out.push('\n');
    out
}

/// Render a single meal card.
pub fn render_meal_card(meal: &Meal) -> Result<String> {
    let badge = meal.badge()?;

    Ok(format!(
        "#{} {}  [{}]\n    {}\n    Tags: {}\n    \
         Carbon: {} kg | Calories: {} | Health: {}/10\n    \
         Key Ingredients: {}\n",
        meal.id,
        meal.name,
        badge.label(),
        meal.description,
        meal.tags.join(", "),
        meal.carbon_footprint,
        meal.calories,
        meal.health_score,
        meal.ingredients.join(", ")
    ))
}

/// Render the meal catalog, one card per meal.
pub fn render_meals(meals: &[&Meal]) -> Result<String> {
    let mut out = String::new();

    if meals.is_empty() {
        out.push_str("No meals match.\n");
        return Ok(out);
    }

    out.push_str("\n=== Sustainable & Delicious Meals ===\n\n");
    for meal in meals {
        out.push_str(&render_meal_card(meal)?);
        out.push('\n');
    }
    Ok(out)
}

/// Render the introduction and footer text.
pub fn render_about() -> String {
    format!("{}\n\n{}\n\n{}\n\n{}\n", TAGLINE, HEADLINE, PITCH, FOOTER)
}
