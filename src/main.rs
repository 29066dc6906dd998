use cellar::api::{CellarApi, CmdMessage, CollectionStats, ConfigAction, MessageLevel};
use cellar::config::{CellarConfig, SortOrder};
use cellar::error::{CellarError, Result};
use cellar::filter::WineFilters;
use cellar::model::{Wine, WineType};
use cellar::store::fs::FileBackend;
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::Write;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{AddArgs, Cli, Commands, SearchArgs, UpdateArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CellarApi<FileBackend>,
    sort: SortOrder,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&ctx, args),
        Some(Commands::List { sort }) => handle_list(&ctx, sort),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Search(args)) => handle_search(&ctx, args),
        Some(Commands::Update(args)) => handle_update(&ctx, args),
        Some(Commands::Delete { id }) => handle_delete(&ctx, &id),
        Some(Commands::Clear { yes }) => handle_clear(&ctx, yes),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // Data dir resolution: explicit flag, then the env override (primarily
    // for testing), then the OS data directory.
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var("CELLAR_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| {
            let proj_dirs = ProjectDirs::from("com", "cellar", "cellar")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        });

    let config = CellarConfig::load(&data_dir).unwrap_or_default();
    let backend = FileBackend::new(data_dir.clone());
    let api = CellarApi::new(backend, data_dir);

    Ok(AppContext {
        api,
        sort: config.sort,
    })
}

fn handle_add(ctx: &AppContext, args: AddArgs) -> Result<()> {
    let details = cellar::model::WineDetails {
        name: args.name,
        producer: args.producer,
        vintage: args.vintage,
        wine_type: args.wine_type.parse()?,
        region: args.region,
        country: args.country,
        grapes: args.grapes,
        rating: args.rating,
        price: args.price,
        purchase_date: args.purchase_date,
        notes: args.notes,
        image_uri: args.image,
    };

    let result = ctx.api.add_wine(details)?;
    print_messages(&result.messages);
    if let Some(wine) = result.affected_wines.first() {
        println!("{}", format!("id: {}", wine.id).dimmed());
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, sort: Option<String>) -> Result<()> {
    let sort = match sort {
        Some(raw) => raw.parse()?,
        None => ctx.sort,
    };

    let result = ctx.api.list_wines(sort)?;
    if result.listed_wines.is_empty() {
        println!("Your wine collection is empty.");
    } else {
        print_wines(&result.listed_wines);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let id = resolve_id(ctx, id)?;
    let result = ctx.api.view_wine(&id)?;
    if let Some(wine) = result.listed_wines.first() {
        print_full_wine(wine);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, args: SearchArgs) -> Result<()> {
    let types = args
        .types
        .iter()
        .map(|raw| raw.parse::<WineType>())
        .collect::<Result<Vec<_>>>()?;
    let filters = WineFilters {
        types,
        min_year: args.min_year,
        max_year: args.max_year,
        min_rating: args.min_rating,
    };

    let result = ctx.api.search_wines(&args.query, &filters)?;
    if result.listed_wines.is_empty() {
        println!("No wines found. Try adjusting your search or filters.");
    } else {
        print_wines(&result.listed_wines);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &AppContext, args: UpdateArgs) -> Result<()> {
    let id = resolve_id(ctx, &args.id)?;
    let existing = ctx
        .api
        .view_wine(&id)?
        .listed_wines
        .into_iter()
        .next()
        .ok_or_else(|| CellarError::WineNotFound(id.clone()))?;

    // Load-edit-save: start from the stored record and overlay whatever
    // flags were given, then replace the record wholly.
    let mut details = existing.details();
    if let Some(name) = args.name {
        details.name = name;
    }
    if let Some(producer) = args.producer {
        details.producer = producer;
    }
    if let Some(raw) = args.wine_type {
        details.wine_type = raw.parse()?;
    }
    if let Some(vintage) = args.vintage {
        details.vintage = vintage;
    }
    if let Some(region) = args.region {
        details.region = region;
    }
    if let Some(country) = args.country {
        details.country = country;
    }
    if let Some(grapes) = args.grapes {
        details.grapes = grapes;
    }
    if let Some(rating) = args.rating {
        details.rating = rating;
    }
    if let Some(price) = args.price {
        details.price = price;
    }
    if let Some(purchase_date) = args.purchase_date {
        details.purchase_date = purchase_date;
    }
    if let Some(notes) = args.notes {
        details.notes = notes;
    }
    if let Some(image) = args.image {
        details.image_uri = Some(image);
    }

    let result = ctx.api.update_wine(&id, details)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: &str) -> Result<()> {
    // Deleting an unknown id stays a successful no-op, so an unresolvable
    // reference falls through to the store as-is instead of erroring here.
    let id = match resolve_id(ctx, id) {
        Ok(id) => id,
        Err(CellarError::WineNotFound(_)) => id.to_string(),
        Err(err) => return Err(err),
    };

    let result = ctx.api.delete_wine(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &AppContext, yes: bool) -> Result<()> {
    if !yes && !confirm("Delete your entire wine collection? This cannot be undone.")? {
        println!("Cancelled.");
        return Ok(());
    }

    let result = ctx.api.clear_collection()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.collection_stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("sort"), None) => ConfigAction::ShowKey("sort".to_string()),
        (Some("sort"), Some(raw)) => ConfigAction::SetSort(raw.parse()?),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("sort = {}", config.sort);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Accept a full id or a unique prefix of one. The store itself only knows
/// exact ids; prefixes are a CLI convenience resolved against the listing.
fn resolve_id(ctx: &AppContext, input: &str) -> Result<String> {
    let wines = ctx.api.list_wines(SortOrder::Added)?.listed_wines;

    if wines.iter().any(|wine| wine.id == input) {
        return Ok(input.to_string());
    }

    let matches: Vec<&Wine> = wines
        .iter()
        .filter(|wine| wine.id.starts_with(input))
        .collect();
    match matches.len() {
        1 => Ok(matches[0].id.clone()),
        0 => Err(CellarError::WineNotFound(input.to_string())),
        n => Err(CellarError::Api(format!(
            "id prefix '{}' is ambiguous ({} matches)",
            input, n
        ))),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush().map_err(CellarError::Io)?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(CellarError::Io)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const SHORT_ID_LEN: usize = 8;

fn print_wines(wines: &[Wine]) {
    for wine in wines {
        let short_id: String = wine.id.chars().take(SHORT_ID_LEN).collect();
        let title = display_title(wine);
        let title_producer = format!("{} ({})", title, wine.producer);

        let type_col = format!("{:<9}", wine.wine_type.label());
        let stars = render_stars(wine.rating);
        let time_ago = format_time_ago(wine.date_added);

        // short id + gaps + type column + stars + timestamp are fixed; the
        // title/producer column flexes into the rest of the line.
        let fixed = 2 + SHORT_ID_LEN + 2 + type_col.width() + 2 + stars.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title_display = truncate_to_width(&title_producer, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "  {}  {}{}  {}  {}  {}",
            short_id.dimmed(),
            title_display,
            " ".repeat(padding),
            type_col,
            stars.yellow(),
            time_ago.dimmed()
        );
    }
}

fn print_full_wine(wine: &Wine) {
    println!("{}", display_title(wine).bold());
    println!("{}", wine.producer);
    println!("{}", render_stars(wine.rating).yellow());
    println!();

    print_field("Type", wine.wine_type.label());
    print_field("Region", &wine.region);
    print_field("Country", &wine.country);
    print_field("Grapes", &wine.grapes);
    print_field("Price", &wine.price);
    print_field("Purchased", &wine.purchase_date);
    print_field("Added", &wine.date_added.format("%Y-%m-%d").to_string());
    if let Some(uri) = &wine.image_uri {
        print_field("Photo", uri);
    }

    if !wine.notes.is_empty() {
        println!();
        println!("{}", wine.notes);
    }

    println!();
    println!("{}", format!("id: {}", wine.id).dimmed());
}

fn print_field(label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    println!("  {} {}", format!("{:<10}", label).dimmed(), value);
}

fn print_stats(stats: &CollectionStats) {
    if stats.total == 0 {
        println!("Your wine collection is empty.");
        return;
    }

    let noun = if stats.total == 1 { "wine" } else { "wines" };
    println!("You have {} {} in your collection", stats.total, noun);
    println!();
    println!("  {:<10} {}", "Red", stats.red);
    println!("  {:<10} {}", "White", stats.white);
    println!("  {:<10} {}", "Rosé", stats.rose);
    println!("  {:<10} {}", "Sparkling", stats.sparkling);
    println!("  {:<10} {}", "Other", stats.other);
    println!();
    println!("  Average rating: {}/5", stats.average_rating);
}

fn display_title(wine: &Wine) -> String {
    if wine.vintage.is_empty() {
        wine.name.clone()
    } else {
        format!("{} {}", wine.name, wine.vintage)
    }
}

fn render_stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
