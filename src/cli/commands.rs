use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Extract code artifacts from AI assistant responses
#[derive(Parser, Debug)]
#[command(
    name = "codeharvest",
    about = "Extract code artifacts from AI assistant responses",
    version,
    author,
    long_about = "codeharvest scans free-form assistant replies for embedded code files \
                  (Java, React/TypeScript, TypeScript, CSS, HTML) declared via fenced \
                  blocks or path comments, and reports the extracted artifacts with \
                  validity and classification details."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Extract artifacts from a response",
        long_about = "Runs every applicable extractor over the input and reports the \
                      aggregated outcome.\n\n\
                      Examples:\n  \
                      codeharvest extract response.md\n  \
                      codeharvest extract - < response.md\n  \
                      codeharvest extract response.md --format json\n  \
                      codeharvest extract response.md --extractor Java"
    )]
    Extract(ExtractArgs),

    #[command(
        about = "Detect which extractors claim the input",
        long_about = "Prints the producer ids of every extractor whose applicability \
                      check matches the input, in registration order. More than one id \
                      means several artifact kinds coexist in the response."
    )]
    Detect(DetectArgs),

    #[command(about = "List registered extractors")]
    Extractors(ExtractorsArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(
        value_name = "FILE",
        help = "Input file containing the response ('-' or omitted for stdin)"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'e',
        long,
        value_name = "ID",
        help = "Force a specific extractor by producer id, bypassing applicability"
    )]
    pub extractor: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        help = "Output format (defaults to CODEHARVEST_FORMAT, then human)"
    )]
    pub format: Option<OutputFormatArg>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "FILE",
        help = "Input file containing the response ('-' or omitted for stdin)"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        help = "Output format (defaults to CODEHARVEST_FORMAT, then human)"
    )]
    pub format: Option<OutputFormatArg>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractorsArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        help = "Output format (defaults to CODEHARVEST_FORMAT, then human)"
    )]
    pub format: Option<OutputFormatArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
