// src/main.rs
//
// foldgroups — make category groups collapsible, append word categories
//
// collapse:
// - Every `<h4 class="group-title">Title</h4>` becomes an annotated heading with a
//   collapse icon, followed on the next line by an open `category-items` wrapper.
// - One line scan closes that wrapper right before the `</div>` ending each
//   category group that holds at least one `category-label` line. Groups without
//   labels get no closing line.
// - Wrapper lines never count as a group's closing `</div>`, so running the tool
//   twice changes nothing the second time.
// - The whole file is rewritten in memory; nothing is written if a pass fails.
//
// append:
// - Reads categories from a JSON file and splices them into a `words.js`-style
//   catalog in front of its final `};`.
//
// CLI flags (collapse):
//   --strict        : fail on nested or unclosed groups, and on wrappers with no items
//   --dry-run       : print the result instead of writing it
//   --heading-pattern, --heading-template, --open-marker, --close-marker,
//   --group-open, --item, --close, --wrapper, --indent : markup overrides
// Default: overwrite the input file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use foldgroups::markup::{self, MarkupOptions};
use foldgroups::{catalog, document};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Log every pass (same as RUST_LOG=debug)
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Make category groups in an HTML file collapsible
    Collapse {
        /// Fail on malformed group nesting instead of a best-effort pass
        #[arg(long, action = ArgAction::SetTrue)]
        strict: bool,

        /// Print the result to stdout and leave the file untouched
        #[arg(long = "dry-run", action = ArgAction::SetTrue)]
        dry_run: bool,

        #[command(flatten)]
        markup: MarkupArgs,

        /// Input file
        input: PathBuf,

        /// Output file (default: overwrite input)
        output: Option<PathBuf>,
    },

    /// Append categories from a JSON file to a word catalog
    Append {
        /// Catalog file, rewritten in place
        catalog: PathBuf,

        /// JSON array of {key, title, records: [{word, chord}]}
        records: PathBuf,
    },
}

#[derive(Args)]
struct MarkupArgs {
    /// Regex matching a heading; capture 1 (or `title`) is the title
    #[arg(long, default_value = markup::HEADING_PATTERN)]
    heading_pattern: String,

    /// Replacement for a heading (`${1}` / `$title` expand to the title)
    #[arg(long, default_value = markup::HEADING_TEMPLATE)]
    heading_template: String,

    /// Wrapper line opened after each heading
    #[arg(long, default_value = markup::OPEN_MARKER)]
    open_marker: String,

    /// Wrapper line closed before the end of a group with items
    #[arg(long, default_value = markup::CLOSE_MARKER)]
    close_marker: String,

    /// Text marking a group-open line
    #[arg(long, default_value = markup::GROUP_OPEN)]
    group_open: String,

    /// Text marking an item line
    #[arg(long, default_value = markup::ITEM)]
    item: String,

    /// Text marking a closing line
    #[arg(long, default_value = markup::CLOSE)]
    close: String,

    /// Text marking wrapper lines, which never close a group
    #[arg(long, default_value = markup::WRAPPER)]
    wrapper: String,

    /// Indentation put in front of wrapper lines
    #[arg(long, default_value = markup::INDENT)]
    indent: String,
}

impl From<MarkupArgs> for MarkupOptions {
    fn from(a: MarkupArgs) -> Self {
        MarkupOptions {
            heading_pattern: a.heading_pattern,
            heading_template: a.heading_template,
            open_marker: a.open_marker,
            close_marker: a.close_marker,
            group_open: a.group_open,
            item: a.item,
            close: a.close,
            wrapper: a.wrapper,
            indent: a.indent,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose.
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Collapse {
            strict,
            dry_run,
            markup,
            input,
            output,
        } => {
            let markup = MarkupOptions::from(markup)
                .compile()
                .context("bad markup options")?;
            let opts = document::Options { strict };

            if dry_run {
                let src = fs::read_to_string(&input)
                    .with_context(|| format!("cannot read {}", input.display()))?;
                let (out, report) = document::collapse(&src, &markup, opts)?;
                print!("{out}");
                log::info!("{report:?}");
                return Ok(());
            }

            let report = document::collapse_file(&input, output.as_deref(), &markup, opts)?;
            let out_path = output.as_ref().unwrap_or(&input);
            println!(
                "Collapsed {} of {} groups ({} headings) in {}",
                report.wrapped,
                report.groups,
                report.headings,
                out_path.display()
            );
        }
        Command::Append { catalog: path, records } => {
            let json = fs::read_to_string(&records)
                .with_context(|| format!("cannot read {}", records.display()))?;
            let categories = catalog::parse_categories(&json)
                .with_context(|| format!("bad records in {}", records.display()))?;
            let report = catalog::append_to_file(&path, &categories)?;
            println!(
                "Appended {} categories to {} ({} -> {} records)",
                report.categories,
                path.display(),
                report.before,
                report.after
            );
        }
    }
    Ok(())
}
