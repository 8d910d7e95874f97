use clap::{Arg, ArgAction, Command};

pub const SCORE_CMD: &str = "score";

pub fn create_score_cli() -> Command {
    Command::new(SCORE_CMD)
        .author("Dietzlab (TUM)")
        .about("Score the orthogonality of two scaffold strands.")
        .arg(
            Arg::new("scaffold1")
                .short('s')
                .long("scaffold1")
                .required(true)
                .help("Name of the first scaffold file, expects .txt"),
        )
        .arg(
            Arg::new("scaffold2")
                .short('c')
                .long("scaffold2")
                .required(true)
                .help("Name of the second scaffold file, expects .txt"),
        )
        .arg(
            Arg::new("folder")
                .short('f')
                .long("folder")
                .help("Input folder (defaults to the working directory)"),
        )
        .arg(
            Arg::new("segment-length")
                .short('n')
                .long("segment-length")
                .help("Segment length"),
        )
        .arg(
            Arg::new("linear")
                .short('l')
                .long("linear")
                .help("Scaffolds are linear instead of circular")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rev-compl")
                .short('r')
                .long("rev-compl")
                .help("Also count reverse-complementary segments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Write the report to a file instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Report format: text or json"),
        )
}
