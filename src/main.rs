use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use convo::app::App;
use convo::catalog::{Catalog, ALL_KEY};
use convo::config::Config;
use convo::selector::{self, History, RandomSource, SeededRandom, ThreadRandom};
use convo::theme::ThemeVariant;
use convo::ui;

/// Get the config directory path (~/.config/convo/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("convo"))
}

#[derive(Parser, Debug)]
#[command(
    name = "convo",
    version,
    about = "Random conversation starters for couples, by category"
)]
struct Args {
    /// Category key to pick from ("all" for every category)
    #[arg(long, short = 'c', value_name = "KEY")]
    category: Option<String>,

    /// Print topics to stdout instead of opening the interactive UI
    #[arg(long)]
    print: bool,

    /// Number of topics to print with --print
    #[arg(long, short = 'n', value_name = "N", default_value_t = 1)]
    count: usize,

    /// Seed the random source for reproducible picks
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Load topics from a TOML catalog file instead of the built-in list
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Config file (default: ~/.config/convo/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List category keys, names and topic counts, then exit
    #[arg(long)]
    list_categories: bool,
}

/// Print `key<TAB>name<TAB>count` for every filter option.
fn write_categories(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    for key in catalog.options() {
        writeln!(
            out,
            "{}\t{}\t{}",
            key,
            catalog.display_name(key),
            catalog.candidates(key).len()
        )?;
    }
    Ok(())
}

/// Print `count` picks for `category`, one per line, sharing one history.
fn write_topics<R>(
    catalog: &Catalog,
    category: &str,
    count: usize,
    rng: &mut R,
    out: &mut impl Write,
) -> Result<()>
where
    R: RandomSource + ?Sized,
{
    let mut history = History::new();
    for _ in 0..count {
        let pick = selector::pick(catalog, category, &history, rng)?;
        writeln!(out, "{}", pick.topic)?;
        history = pick.history;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout belongs to the UI; logs go to stderr and only when requested
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let catalog = match args.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };

    if args.list_categories {
        let stdout = std::io::stdout();
        write_categories(&catalog, &mut stdout.lock())?;
        return Ok(());
    }

    let category = args
        .category
        .clone()
        .unwrap_or_else(|| config.default_category.clone());
    if !catalog.is_known(&category) {
        tracing::warn!(category = %category, "Unknown category");
        eprintln!(
            "Warning: unknown category '{}' (see --list-categories)",
            category
        );
    }

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    if args.print {
        let stdout = std::io::stdout();
        write_topics(
            &catalog,
            &category,
            args.count,
            rng.as_mut(),
            &mut stdout.lock(),
        )?;
        return Ok(());
    }

    let mut app = App::new(catalog, rng);

    match ThemeVariant::from_str_name(&config.theme) {
        Some(variant) => app.set_theme(variant),
        None => tracing::warn!(theme = %config.theme, "Unknown theme, using dark"),
    }

    for warning in app.keybindings.apply_overrides(&config.keybindings) {
        tracing::warn!("{}", warning);
    }

    if !app.select_key(&category) {
        app.select_key(ALL_KEY);
        app.set_status(format!("Unknown category '{}', showing all topics", category));
    }

    ui::run(&mut app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use convo::catalog::Category;
    use convo::selector::ScriptedRandom;
    use pretty_assertions::assert_eq;

    fn sample() -> Catalog {
        Catalog::from_categories(vec![
            Category::new("sports", "Sports", ["A", "B"]),
            Category::new("food", "Food & Cooking", ["C"]),
        ])
    }

    #[test]
    fn test_write_categories() {
        let mut out = Vec::new();
        write_categories(&sample(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "all\tAll Topics\t3\nsports\tSports\t2\nfood\tFood & Cooking\t1\n"
        );
    }

    #[test]
    fn test_write_topics_walks_without_repeats_then_resets() {
        let mut out = Vec::new();
        let mut rng = ScriptedRandom::fixed(0);
        write_topics(&sample(), "sports", 3, &mut rng, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A\nB\nA\n");
    }

    #[test]
    fn test_write_topics_unknown_category_fails() {
        let mut out = Vec::new();
        let err = write_topics(&sample(), "travel", 1, &mut ThreadRandom, &mut out).unwrap_err();
        assert!(err.to_string().contains("No topics available"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["convo", "--print", "-n", "3", "-c", "food", "--seed", "7"]);
        assert!(args.print);
        assert_eq!(args.count, 3);
        assert_eq!(args.category.as_deref(), Some("food"));
        assert_eq!(args.seed, Some(7));
    }
}
