use clap::Parser;
use anyhow::Result;

use randstr::cli::init_logging;
use randstr::cli::Verbosity;
use randstr::cli::GeneratorArguments;


#[derive(Debug, Parser)]
#[command(name = "randstr")]
#[command(author, version, about = "Generate a random string from a character pattern")]
pub struct Cli {
    #[command(flatten)]
    pub generator: GeneratorArguments,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity.verbose);

    let random_string = cli.generator.generate()?;
    println!("{}", random_string);
    Ok(())
}
