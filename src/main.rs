use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "tabbar-icon-gen",
    about = "Generate placeholder pictogram tab bar icons for the mini program"
)]
struct Args {
    /// Output directory for the generated icons.
    #[clap(short, long, value_name = "DIR", default_value = tabbar_icon_gen::DEFAULT_ICON_DIR)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tabbar_icon_gen::pictogram::generate(&args.output)
}
