use anyhow::Result;
use clap::Parser;
use placeholder_icons::icon_gen::{self, DEFAULT_SIZES};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "create-icons",
    about = "Write placeholder PNG icons for extension development"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Icon sizes to write, one icon<SIZE>.png per entry.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Option<Vec<u32>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        sizes: args.sizes.unwrap_or_else(|| DEFAULT_SIZES.to_vec()),
    })
}
