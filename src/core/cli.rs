//! CLI-only commands: one-shot models listing.
//!
//! Runs without opening the TUI and produces plain text output.

use crate::core::config;
use crate::core::models::{self, ModelRecord};
use crate::core::providers::ProviderConfig;

/// Column headers shared with the TUI table.
pub const COLUMNS: [&str; 4] = ["#", "Model", "Owner / Provider", "Created"];

/// Options for the `models` command.
pub struct ModelsOptions<'a> {
    pub provider: ProviderConfig,
    pub api_key: Option<&'a str>,
    pub query: Option<&'a str>,
    pub json: bool,
    pub endpoint: Option<&'a str>,
}

/// Render records as an aligned text table with a numbered first column.
pub fn format_table(records: &[&ModelRecord]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                (i + 1).to_string(),
                r.identifier.clone(),
                r.owner.clone(),
                models::format_timestamp(r.created_at),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let [idx_w, model_w, owner_w, created_w] = widths;
    let line = |cells: [&str; 4]| {
        let [idx, model, owner, created] = cells;
        format!("{idx:>idx_w$}  {model:<model_w$}  {owner:<owner_w$}  {created:<created_w$}")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(COLUMNS));
    out.push('\n');
    out.push_str(&format!(
        "{}  {}  {}  {}\n",
        "-".repeat(idx_w),
        "-".repeat(model_w),
        "-".repeat(owner_w),
        "-".repeat(created_w)
    ));
    for row in &rows {
        out.push_str(&line(row.each_ref().map(String::as_str)));
        out.push('\n');
    }
    out
}

/// Run the `models` command: fetch from the provider, print a table (or JSON).
pub async fn run_models(opts: ModelsOptions<'_>) {
    let provider = match opts.endpoint {
        Some(url) => opts.provider.with_endpoint(url.to_string()),
        None => opts.provider,
    };

    let credential = match config::resolve_credential(&provider, opts.api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = models::fetch_models(&provider, &credential).await;
    drop(credential);

    let records = match result {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            if let Some(body) = e.detail() {
                eprintln!("{}", body);
            }
            std::process::exit(1);
        }
    };

    let filtered = models::filter_records(&records, opts.query.unwrap_or(""));

    if opts.json {
        match serde_json::to_string_pretty(&filtered) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Showing {} models\n", filtered.len());
    if !filtered.is_empty() {
        print!("{}", format_table(&filtered));
    }
}
