// UI layer: the interactive search-and-download flow. Prompts use
// `dialoguer`, downloads show an `indicatif` spinner. Everything runs on
// the calling thread, one request at a time.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::api::ApiClient;
use crate::models::{ContentItem, Preset, SearchResultItem};
use crate::query::build_query;
use crate::transport::Transport;

/// What to search for and where downloads go.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Game name; prompted for when absent.
    pub name: Option<String>,
    pub kind: String,
    pub category: String,
    pub output_dir: PathBuf,
}

/// Run the full flow: presets, search, pick a result, download its files.
pub fn run<T: Transport>(api: &ApiClient<T>, options: &SearchOptions) -> Result<()> {
    let presets = api.presets().context("Failed to fetch presets")?;
    print_presets(&presets);

    let name = match &options.name {
        Some(name) => name.clone(),
        None => Input::new()
            .with_prompt("Give name of game")
            .interact_text()?,
    };

    let query = build_query(search_filters(&name, &options.kind, &options.category));
    info!(%query, "searching");
    let results = api.search(&query).context("Search request failed")?;
    if results.is_empty() {
        println!("No results for '{name}'.");
        return Ok(());
    }
    for line in result_lines(&results) {
        println!("{line}");
    }

    let count = results.len();
    let index: usize = Input::new()
        .with_prompt("Your choice")
        .validate_with(|n: &usize| {
            if *n < count {
                Ok(())
            } else {
                Err(format!("choose a number between 0 and {}", count - 1))
            }
        })
        .interact_text()?;
    let choice = &results[index];
    debug!(?choice, "selected result");

    let downloaded = download_entries(api, choice, &options.output_dir)?;
    if downloaded.is_empty() {
        println!("'{}' has no downloadable content.", choice.label());
    }
    Ok(())
}

/// Filters for a title search, in the order the query lists them.
pub fn search_filters<'a>(name: &'a str, kind: &'a str, category: &'a str) -> [(&'static str, &'a str); 3] {
    [("name", name), ("type", kind), ("category", category)]
}

/// `index: name (group)` lines for the result listing.
pub fn result_lines(results: &[SearchResultItem]) -> Vec<String> {
    results
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{i}: {}", item.label()))
        .collect()
}

fn print_presets(presets: &[Preset]) {
    println!("Presets:");
    for preset in presets {
        match &preset.description {
            Some(description) => println!(
                "  {} - {} ({} values)",
                preset.kind,
                description,
                preset.values.len()
            ),
            None => println!("  {} ({} values)", preset.kind, preset.values.len()),
        }
    }
}

/// Fetch the content entries of `choice` and write each one under
/// `output_dir`. Returns the written paths with their sizes.
pub fn download_entries<T: Transport>(
    api: &ApiClient<T>,
    choice: &SearchResultItem,
    output_dir: &Path,
) -> Result<Vec<(PathBuf, usize)>> {
    let (id, category) = choice
        .locator()
        .with_context(|| format!("'{}' has no id or category to download from", choice.label()))?;
    let entries = api
        .entries(id, category)
        .with_context(|| format!("Failed to fetch entries for {id}"))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut written = Vec::with_capacity(entries.content_entry.len());
    for item in &entries.content_entry {
        spinner.set_message(format!("Downloading {}...", item.path));
        let data = api
            .download(id, category, item.id)
            .with_context(|| format!("Failed to download {}", item.path))?;
        let path = save_content(output_dir, item, &data)?;
        spinner.suspend(|| println!("{} {}", item.path, data.len()));
        written.push((path, data.len()));
    }
    spinner.finish_and_clear();
    Ok(written)
}

/// Write `data` to the item's reported path below `output_dir`, replacing
/// any existing file. The path must be relative and stay inside `output_dir`.
pub fn save_content(output_dir: &Path, item: &ContentItem, data: &[u8]) -> Result<PathBuf> {
    let relative = Path::new(&item.path);
    let mut components = relative.components().peekable();
    if components.peek().is_none() {
        bail!("Content item {} has an empty path", item.id);
    }
    if !components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir)) {
        bail!("Refusing to write {:?} outside {}", item.path, output_dir.display());
    }
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(&path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = data.len(), "content saved");
    Ok(path)
}
