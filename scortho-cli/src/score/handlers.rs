use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Error, Result};
use clap::ArgMatches;

use scortho_core::models::Scaffold;
use scortho_core::utils::read_scaffold_file;
use scortho_scoring::consts::DEFAULT_SEGMENT_LENGTH;
use scortho_scoring::{OrthoConfig, OrthoReport, score_orthogonality};

pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(Error::msg(format!("Invalid report format: {}", s))),
        }
    }
}

pub fn run_score(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let scaffold1 = matches
        .get_one::<String>("scaffold1")
        .expect("A path to the first scaffold file is required.");

    let scaffold2 = matches
        .get_one::<String>("scaffold2")
        .expect("A path to the second scaffold file is required.");

    let default_folder = "./".to_string();
    let folder = matches
        .get_one::<String>("folder")
        .unwrap_or(&default_folder);

    let segment_length = match matches.get_one::<String>("segment-length") {
        Some(n) => n
            .parse::<usize>()
            .with_context(|| format!("Invalid segment length: {}", n))?,
        None => DEFAULT_SEGMENT_LENGTH,
    };

    let format = match matches.get_one::<String>("format") {
        Some(format) => ReportFormat::from_str(format)?,
        None => ReportFormat::Text,
    };

    let config = OrthoConfig {
        segment_length,
        is_linear: matches.get_flag("linear"),
        include_rev_compl: matches.get_flag("rev-compl"),
    };

    // coerce arguments to types
    let folder = PathBuf::from(folder);
    let sc1 = read_scaffold(&folder.join(scaffold1))?;
    let sc2 = read_scaffold(&folder.join(scaffold2))?;

    let report = score_orthogonality(&sc1, &sc2, &config)?;

    let rendered = render_report(&report, &format)?;
    match matches.get_one::<String>("output") {
        Some(output) => fs::write(output, rendered + "\n")
            .with_context(|| format!("Failed to write report to: {}", output))?,
        None => println!("{}", rendered),
    }

    Ok(())
}

fn read_scaffold(path: &Path) -> Result<Scaffold> {
    let raw = read_scaffold_file(path)?;
    let scaffold: Scaffold = raw
        .parse()
        .with_context(|| format!("Faulty sequence in: {:?}", path))?;

    Ok(scaffold)
}

fn render_report(report: &OrthoReport, format: &ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
