use crate::cli::InspectArgs;
use crate::display;
use crate::error::Result;
use mopacviz::core::mopac::extract_from_path;
use std::io::Write;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    report(&args, &mut std::io::stdout().lock())
}

fn report(args: &InspectArgs, out: &mut impl Write) -> Result<()> {
    info!("Inspecting {:?}", &args.input);
    let extraction = extract_from_path(&args.input)?;

    display::print_extraction_notices(out, &extraction)?;
    display::print_extraction_table(out, &extraction)?;
    Ok(())
}
