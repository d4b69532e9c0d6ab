use crate::models::Meal;

/// Curated sustainable meals, in display order.
pub static MEALS: [Meal; 6] = [
    Meal {
        id: 1,
        name: "Mediterranean Chickpea Bowl",
        description: "A vibrant mix of roasted chickpeas, fresh vegetables, and tahini dressing",
        carbon_footprint: 0.8,
        calories: 420,
        health_score: 9,
        tags: &["Vegan", "High Protein", "Gluten-Free"],
        ingredients: &["Chickpeas", "Tomatoes", "Cucumber", "Tahini", "Olive Oil"],
    },
    Meal {
        id: 2,
        name: "Lentil & Sweet Potato Curry",
        description: "Warming curry with red lentils, sweet potatoes, and aromatic spices",
        carbon_footprint: 0.9,
        calories: 380,
        health_score: 9,
        tags: &["Vegan", "High Fiber", "Low Carbon"],
        ingredients: &["Red Lentils", "Sweet Potato", "Coconut Milk", "Spinach", "Curry Spices"],
    },
    Meal {
        id: 3,
        name: "Quinoa Buddha Bowl",
        description: "Nutrient-packed bowl with quinoa, roasted vegetables, and avocado",
        carbon_footprint: 1.2,
        calories: 450,
        health_score: 10,
        tags: &["Vegetarian", "Balanced", "Protein-Rich"],
        ingredients: &["Quinoa", "Broccoli", "Avocado", "Chickpeas", "Pumpkin Seeds"],
    },
    Meal {
        id: 4,
        name: "Grilled Tofu Stir-Fry",
        description: "Asian-inspired stir-fry with crispy tofu and seasonal vegetables",
        carbon_footprint: 1.5,
        calories: 340,
        health_score: 8,
        tags: &["Vegan", "Low Calorie", "Quick"],
        ingredients: &["Tofu", "Bell Peppers", "Bok Choy", "Ginger", "Soy Sauce"],
    },
    Meal {
        id: 5,
        name: "Black Bean Tacos",
        description: "Delicious tacos filled with seasoned black beans and fresh toppings",
        carbon_footprint: 1.1,
        calories: 380,
        health_score: 8,
        tags: &["Vegetarian", "Mexican", "High Fiber"],
        ingredients: &["Black Beans", "Corn Tortillas", "Avocado", "Salsa", "Cilantro"],
    },
    Meal {
        id: 6,
        name: "Mushroom & Barley Risotto",
        description: "Creamy, comforting risotto made with hearty barley and wild mushrooms",
        carbon_footprint: 1.0,
        calories: 410,
        health_score: 7,
        tags: &["Vegetarian", "Comfort Food", "Seasonal"],
        ingredients: &["Barley", "Mushrooms", "Vegetable Broth", "Parmesan", "Thyme"],
    },
];

/// All meals in authored order.
pub fn list_meals() -> &'static [Meal] {
    &MEALS
}

/// Find a meal by id.
pub fn find_meal(id: u32) -> Option<&'static Meal> {
    MEALS.iter().find(|m| m.id == id)
}
