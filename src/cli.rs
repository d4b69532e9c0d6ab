use clap::{Parser, Subcommand, ValueEnum};

/// EcoMeal: look up the carbon footprint of food and browse sustainable meals.
#[derive(Parser, Debug)]
#[command(name = "eco_meal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Show debug logs on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors on stderr.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate the carbon footprint of a food. Prompts for anything missing.
    Calculate {
        /// Food name from the reference table (case-insensitive).
        #[arg(short, long)]
        food: Option<String>,

        /// Quantity in kg.
        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,
    },

    /// List the food reference table.
    Foods {
        /// Only show foods in this category.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the sustainable meal recommendations.
    Meals {
        /// Only show meals with this tag.
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show a single meal by id.
    Meal {
        /// Meal id as shown in the catalog (1-6).
        id: u32,
    },

    /// Show what EcoMeal is about.
    About,
}

impl Default for Command {
    fn default() -> Self {
        Command::Calculate {
            food: None,
            quantity: None,
        }
    }
}
