//! pinyin-scaffold CLI: generate one of the three project sets, or verify an archive.
//!
//! Each generator writes 42 folders named after the class roster and one zip archive
//! into the output directory. Run without a subcommand to pick a generator
//! interactively.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::Select;

use pinyin_scaffold_cli::{commands, init_tracing, RunArgs};
use pinyin_scaffold_core::generators::GeneratorKind;

#[derive(Parser)]
#[command(
    name = "pinyin-scaffold",
    about = "Scaffold 42 pinyin-named Java or static-site projects and bundle them into a zip",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// One Java collections exercise per name (java_collections_42.zip)
    Collections,

    /// Bubble sort and quicksort per name (java_sorts_42.zip)
    Sorts,

    /// A personal static web page per name (pinyin_folders_42.zip)
    Sites,

    /// Check a generator's archive against the folders on disk
    Verify {
        /// Which generator's archive to check: collections, sorts or sites
        #[arg(value_parser = GeneratorKind::from_name)]
        generator: GeneratorKind,
    },
}

fn prompt_generator() -> Result<GeneratorKind> {
    let descriptions = &[
        "Java collections: one of 14 collection exercises per name",
        "Java sorts: bubble sort + quicksort over a seeded sample",
        "Static sites: index.html, styles, script and avatar per name",
    ];

    let selection = Select::new()
        .with_prompt("Select generator")
        .items(descriptions)
        .default(0)
        .interact()?;

    Ok(GeneratorKind::ALL[selection])
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.args.verbose);

    match cli.command {
        Some(Commands::Collections) => {
            commands::generate::run(GeneratorKind::JavaCollections, &cli.args)?;
        }
        Some(Commands::Sorts) => {
            commands::generate::run(GeneratorKind::JavaSorts, &cli.args)?;
        }
        Some(Commands::Sites) => {
            commands::generate::run(GeneratorKind::Sites, &cli.args)?;
        }
        Some(Commands::Verify { generator }) => {
            commands::verify::run(generator, &cli.args)?;
        }
        None => {
            let kind = prompt_generator()?;
            commands::generate::run(kind, &cli.args)?;
        }
    }

    Ok(())
}
