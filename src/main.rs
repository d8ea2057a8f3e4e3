use clap::{Parser, Subcommand};
use doxidx_core::{entities, writer, IndexEntry, SymbolCategory};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doxidx", about = "Query Doxygen search-index fragments from the terminal")]
struct Cli {
    /// Docs root (or the search/ directory itself).
    #[arg(long, short = 'd', global = true, default_value = "docs/html")]
    docs: PathBuf,

    /// Load only one fragment family (all, classes, functions, …).
    #[arg(long, short = 'c', global = true)]
    category: Option<SymbolCategory>,

    /// Write debug logs to /tmp/doxidx-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up symbols by key prefix (or substring with --substring).
    Query {
        term: String,
        /// Match anywhere in the key instead of at the start.
        #[arg(long)]
        substring: bool,
        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
        /// Stop after this many matches.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List every key in the merged index, sorted.
    Keys {
        #[arg(long)]
        json: bool,
    },
    /// Show fragment file and record counts per category.
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Re-serialize the merged index to fragment format on stdout.
    Dump {
        /// JS variable name for the emitted fragment.
        #[arg(long, default_value = "searchData")]
        var: String,
    },
    /// Interactive incremental search.
    Tui {
        /// Rebuild the index whenever the docs are regenerated.
        #[arg(long)]
        watch: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    match cli.command {
        Command::Query { term, substring, json, limit } => {
            let index = doxidx_scan::load_dir(&cli.docs, cli.category)?;
            let limit = limit.unwrap_or(usize::MAX);
            let entries: Vec<&IndexEntry> = if substring {
                index.find(&term).take(limit).collect()
            } else {
                index.query(&term).take(limit).collect()
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_entries(&entries)?;
            }
        }

        Command::Keys { json } => {
            let index = doxidx_scan::load_dir(&cli.docs, cli.category)?;
            if json {
                let keys: Vec<&str> = index.iter().map(|e| e.key.as_str()).collect();
                println!("{}", serde_json::to_string_pretty(&keys)?);
            } else {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                for entry in &index {
                    writeln!(out, "{}", entry.key)?;
                }
            }
        }

        Command::Stats { json } => print_stats(&cli.docs, json)?,

        Command::Dump { var } => {
            let index = doxidx_scan::load_dir(&cli.docs, cli.category)?;
            let stdout = std::io::stdout();
            writer::write_fragment(&mut stdout.lock(), &var, &index)?;
        }

        Command::Tui { watch } => doxidx_tui::run(cli.docs, cli.category, watch)?,
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Output helpers
// ---------------------------------------------------------------------------

fn print_entries(entries: &[&IndexEntry]) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in entries {
        writeln!(out, "{}  {}", entry.key, entry.name)?;
        for target in &entry.targets {
            if target.label.is_empty() {
                writeln!(out, "    {}", target.url)?;
            } else {
                writeln!(out, "    {}  {}", entities::decode(&target.label), target.url)?;
            }
        }
    }
    Ok(())
}

fn print_stats(docs: &std::path::Path, json: bool) -> anyhow::Result<()> {
    let search_dir = doxidx_scan::resolve_search_dir(docs)?;
    let files = doxidx_scan::discover(&search_dir)?;

    let mut rows: BTreeMap<SymbolCategory, (usize, usize)> = BTreeMap::new();
    for file in &files {
        let fragments = doxidx_scan::load_files(std::slice::from_ref(file))?;
        let records: usize = fragments.iter().map(|f| f.entries.len()).sum();
        let row = rows.entry(file.category).or_default();
        row.0 += 1;
        row.1 += records;
    }

    if json {
        let mut map = serde_json::Map::new();
        for (category, (file_count, records)) in &rows {
            map.insert(
                category.to_string(),
                serde_json::json!({ "files": file_count, "records": records }),
            );
        }
        println!("{}", serde_json::to_string_pretty(&serde_json::Value::Object(map))?);
    } else {
        println!("{:<12} {:>6} {:>8}", "category", "files", "records");
        let mut total = (0, 0);
        for (category, (file_count, records)) in &rows {
            println!("{:<12} {:>6} {:>8}", category.to_string(), file_count, records);
            total.0 += file_count;
            total.1 += records;
        }
        println!("{:<12} {:>6} {:>8}", "total", total.0, total.1);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/doxidx-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("doxidx debug log started — tail -f /tmp/doxidx-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}
