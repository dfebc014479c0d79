use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "badge-icons",
    about = "Generate text-badge tab bar icons (colored circle with a centered label)"
)]
struct Args {
    /// Output directory for the generated icons.
    #[clap(short, long, value_name = "DIR", default_value = tabbar_icon_gen::DEFAULT_ICON_DIR)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tabbar_icon_gen::badge::generate(&args.output)
}
