use anyhow::Result;
use clap::Parser;

use pinyin_scaffold_cli::{commands, init_tracing, RunArgs};
use pinyin_scaffold_core::generators::GeneratorKind;

#[derive(Parser)]
#[command(
    name = "generate-java-collections",
    about = "Generate 42 Java collections exercise projects and java_collections_42.zip",
    version
)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.args.verbose);
    commands::generate::run(GeneratorKind::JavaCollections, &cli.args)?;
    Ok(())
}
