use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "mopacviz",
    author = "Tony Kan, Ted Yu",
    version,
    about = "mopacviz - Extract the final geometry and Mulliken charges from MOPAC output and generate XYZ files and interactive 3D viewer documents.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a MOPAC output file into an XYZ file and a 3D viewer document.
    Convert(ConvertArgs),
    /// Print the extracted atoms and charges without writing any file.
    Inspect(InspectArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    // --- Core Arguments ---
    /// Path to the MOPAC output file (e.g., job.out).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Output Overrides ---
    /// Path for the XYZ coordinate file [default: molecule.xyz].
    #[arg(short = 'o', long = "xyz", value_name = "PATH")]
    pub xyz: Option<PathBuf>,

    /// Path for the 3D viewer document [default: molecule.html].
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Do not generate the 3D viewer document.
    #[arg(long, conflicts_with = "html")]
    pub no_html: bool,

    /// Also write a CSV table of atoms and charges to this path.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    // --- Viewer Overrides ---
    /// Override the title of the viewer document.
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S viewer.sphere-scale=0.25
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the MOPAC output file (e.g., job.out).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_parses_outputs_and_overrides() {
        let cli = Cli::parse_from([
            "mopacviz", "-vv", "convert", "-i", "job.out", "-o", "final.xyz", "--csv",
            "charges.csv", "-S", "viewer.title=Water",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Convert(args) = cli.command else {
            panic!("Expected 'convert' subcommand");
        };
        assert_eq!(args.input, PathBuf::from("job.out"));
        assert_eq!(args.xyz, Some(PathBuf::from("final.xyz")));
        assert_eq!(args.csv, Some(PathBuf::from("charges.csv")));
        assert_eq!(args.html, None);
        assert!(!args.no_html);
        assert_eq!(args.set_values, vec!["viewer.title=Water".to_string()]);
    }

    #[test]
    fn html_and_no_html_conflict() {
        let result = Cli::try_parse_from([
            "mopacviz", "convert", "-i", "job.out", "--html", "a.html", "--no-html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["mopacviz", "inspect"]).is_err());
    }
}
