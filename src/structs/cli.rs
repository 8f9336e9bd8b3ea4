use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "revostay")]
#[clap(about = "RevoStay seller console", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
