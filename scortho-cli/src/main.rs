mod score;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "scortho";
    pub const BIN_NAME: &str = "scortho";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Dietzlab (TUM)")
        .about("Evaluate the orthogonality of two DNA-origami scaffold strands to quantify their cross-hybridization risk.")
        .subcommand_required(true)
        .subcommand(score::cli::create_score_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SCORE
        //
        Some((score::cli::SCORE_CMD, matches)) => {
            score::handlers::run_score(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
