use crate::cli::ConvertArgs;
use crate::config::PartialConvertConfig;
use crate::display;
use crate::error::{CliError, Result};
use mopacviz::workflows;
use tracing::info;

pub fn run(args: ConvertArgs) -> Result<()> {
    let partial_config = PartialConvertConfig::load(&args)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    println!("Reading MOPAC output from {}...", config.input_path.display());
    let report = workflows::convert::run(&config)?;

    info!(
        "Extraction finished with {} atom(s).",
        report.extraction.molecule.len()
    );
    display::print_conversion_report(&mut std::io::stdout().lock(), &report)?;

    if !report.coordinates_written() {
        return Err(CliError::Output(format!(
            "the coordinate file '{}' was not written",
            config.output.xyz_path.display()
        )));
    }
    Ok(())
}
