#[macro_use]
extern crate log;

use anyhow::Result;
use structopt::StructOpt;

use model::HotRoutes;

#[derive(StructOpt)]
#[structopt(
    name = "converter",
    about = "Converts a traffic simulation log to the hot routes format"
)]
struct Args {
    /// The path to a traffic simulation CSV export
    input: String,
    /// The directory where the converted JSON is written
    #[structopt(long, default_value = "out")]
    out_dir: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::from_args();

    info!("Reading {}", args.input);
    let routes = HotRoutes::import(&args.input)?;
    routes.save(&args.input, &args.out_dir)?;
    Ok(())
}
