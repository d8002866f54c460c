use soillab::{PhaseInput, PhaseReport, PhaseRelations, StrError};
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "soillab_report",
    about = "Computes soil phase relations from a JSON file with laboratory measurements"
)]
struct Options {
    /// Path to the JSON file with the laboratory measurements
    input_file: String,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load measurements
    let input = PhaseInput::read_json(&options.input_file)?;

    // compute phase relations
    let relations = PhaseRelations::new(&input)?;

    // print grouped report
    let report = PhaseReport::new(&relations);
    let thin_line = format!("{:─^1$}", "", options.input_file.len());
    println!("\n{}", thin_line);
    println!("{}", options.input_file);
    println!("{}\n", thin_line);
    println!("{}", report);
    Ok(())
}
