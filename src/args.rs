use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cellar")]
#[command(about = "Catalogue your wine collection from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a bottle to the collection
    #[command(alias = "a")]
    Add(AddArgs),

    /// List the collection
    #[command(alias = "ls")]
    List {
        /// Sort order: added or name
        #[arg(long)]
        sort: Option<String>,
    },

    /// View one wine in full
    #[command(alias = "v")]
    View {
        /// Wine id, or a unique prefix of one
        id: String,
    },

    /// Search and filter the collection
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Update fields on an existing wine
    #[command(alias = "e")]
    Update(UpdateArgs),

    /// Remove a wine from the collection
    #[command(alias = "rm")]
    Delete {
        /// Wine id, or a unique prefix of one
        id: String,
    },

    /// Delete the entire collection
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show collection statistics
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Wine name
    #[arg(long)]
    pub name: String,

    /// Producer or winery
    #[arg(long)]
    pub producer: String,

    /// Style: red, white, rose, sparkling, dessert, fortified
    #[arg(long = "type", value_name = "TYPE")]
    pub wine_type: String,

    /// Vintage year (free text, e.g. 2015 or NV)
    #[arg(long, default_value = "")]
    pub vintage: String,

    #[arg(long, default_value = "")]
    pub region: String,

    #[arg(long, default_value = "")]
    pub country: String,

    /// Grape varieties
    #[arg(long, default_value = "")]
    pub grapes: String,

    /// Rating from 0 to 5
    #[arg(long, default_value_t = 0)]
    pub rating: u8,

    #[arg(long, default_value = "")]
    pub price: String,

    /// Purchase date (free text)
    #[arg(long = "purchased", default_value = "")]
    pub purchase_date: String,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// URI of a bottle photo
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text matched against name, producer, region, country and grapes
    #[arg(default_value = "")]
    pub query: String,

    /// Restrict to styles (repeatable)
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Earliest vintage year
    #[arg(long)]
    pub min_year: Option<i32>,

    /// Latest vintage year
    #[arg(long)]
    pub max_year: Option<i32>,

    /// Minimum rating, 1-5 (0 disables)
    #[arg(long, default_value_t = 0)]
    pub min_rating: u8,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Wine id, or a unique prefix of one
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub producer: Option<String>,

    /// Style: red, white, rose, sparkling, dessert, fortified
    #[arg(long = "type", value_name = "TYPE")]
    pub wine_type: Option<String>,

    #[arg(long)]
    pub vintage: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub grapes: Option<String>,

    /// Rating from 0 to 5
    #[arg(long)]
    pub rating: Option<u8>,

    #[arg(long)]
    pub price: Option<String>,

    #[arg(long = "purchased")]
    pub purchase_date: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// URI of a bottle photo
    #[arg(long)]
    pub image: Option<String>,
}
