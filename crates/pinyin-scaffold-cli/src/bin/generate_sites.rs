use anyhow::Result;
use clap::Parser;

use pinyin_scaffold_cli::{commands, init_tracing, RunArgs};
use pinyin_scaffold_core::generators::GeneratorKind;

#[derive(Parser)]
#[command(
    name = "generate-sites",
    about = "Generate 42 static personal sites and pinyin_folders_42.zip",
    version
)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.args.verbose);
    commands::generate::run(GeneratorKind::Sites, &cli.args)?;
    Ok(())
}
