use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quotes")]
#[command(about = "Generate random inspiring quotes")]
#[command(
    long_about = "A CLI tool to generate random inspiring quotes with various output formats"
)]
#[command(version)]
pub struct Cli {
    #[arg(short, long, default_value = "text", help = "Output format: text|json|markdown")]
    pub format: String,

    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        allow_negative_numbers = true,
        help = "Number of quotes (1-100)"
    )]
    pub count: i64,

    #[arg(long, allow_negative_numbers = true, help = "Random seed for reproducibility")]
    pub seed: Option<i64>,

    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub debug: bool,
}
