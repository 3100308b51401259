use std::error::Error;

use coursedb::cli::run_cli;

fn main() -> Result<(), Box<dyn Error>> {
    run_cli()
}
