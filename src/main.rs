use clap::Parser;

use eco_meal_rs::calculator::calculate;
use eco_meal_rs::catalog::{self, suggest_food};
use eco_meal_rs::cli::{Cli, Command, OutputFormat};
use eco_meal_rs::error::{EcoError, Result};
use eco_meal_rs::interface::{
    calculation_to_csv, calculation_to_json, foods_to_csv, foods_to_json, meals_to_csv,
    meals_to_json, prompt_food, prompt_quantity, render_about, render_calculation,
    render_food_table, render_meal_card, render_meals, resolve_food, validate_quantity,
};
use eco_meal_rs::models::{FoodItem, Meal};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let EcoError::FoodNotFound(name) = &e {
            match suggest_food(name) {
                Some(food) => eprintln!("Did you mean '{}'?", food.name),
                None => eprintln!("Run 'eco_meal foods' to see the reference table."),
            }
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr; RUST_LOG overrides the default `warn` filter.
fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calculate { food, quantity } => cmd_calculate(food, quantity, format),
        Command::Foods { category } => cmd_foods(category.as_deref(), format),
        Command::Meals { tag } => cmd_meals(tag.as_deref(), format),
        Command::Meal { id } => cmd_meal(id, format),
        Command::About => {
            print!("{}", render_about());
            Ok(())
        }
    }
}

/// Calculate a footprint, prompting for any missing input.
fn cmd_calculate(food: Option<String>, quantity: Option<String>, format: OutputFormat) -> Result<()> {
    let food = match food {
        Some(name) => resolve_food(&name)?,
        None => prompt_food()?,
    };

    let quantity = match quantity {
        Some(raw) => validate_quantity(&raw)?,
        None => prompt_quantity()?,
    };

    let result = calculate(food.name, quantity)?;

    match format {
        OutputFormat::Text => print!("{}", render_calculation(&result)),
        OutputFormat::Json => println!("{}", calculation_to_json(&result)?),
        OutputFormat::Csv => print!("{}", calculation_to_csv(&result)?),
    }

    Ok(())
}

/// List the reference table, optionally filtered by category.
fn cmd_foods(category: Option<&str>, format: OutputFormat) -> Result<()> {
    let foods: Vec<&FoodItem> = match category {
        Some(c) => catalog::foods_in_category(c),
        None => catalog::foods().iter().collect(),
    };

    if foods.is_empty() {
        if let Some(c) = category {
            eprintln!("No foods in category '{}'.", c);
            eprintln!("Categories: {}", catalog::categories().join(", "));
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => print!("{}", render_food_table(&foods, category.unwrap_or("Foods"))),
        OutputFormat::Json => println!("{}", foods_to_json(&foods)?),
        OutputFormat::Csv => print!("{}", foods_to_csv(&foods)?),
    }

    Ok(())
}

/// List meals in catalog order, optionally filtered by tag.
fn cmd_meals(tag: Option<&str>, format: OutputFormat) -> Result<()> {
    let meals: Vec<&Meal> = catalog::list_meals()
        .iter()
        .filter(|m| tag.is_none_or(|t| m.has_tag(t)))
        .collect();

    print_meals(&meals, format)
}

/// Show one meal.
fn cmd_meal(id: u32, format: OutputFormat) -> Result<()> {
    let meal = catalog::find_meal(id).ok_or(EcoError::MealNotFound(id))?;

    match format {
        OutputFormat::Text => print!("{}", render_meal_card(meal)?),
        _ => print_meals(&[meal], format)?,
    }

    Ok(())
}

fn print_meals(meals: &[&Meal], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_meals(meals)?),
        OutputFormat::Json => println!("{}", meals_to_json(meals)?),
        OutputFormat::Csv => print!("{}", meals_to_csv(meals)?),
    }
    Ok(())
}
