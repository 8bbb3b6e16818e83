use clap::Parser;

/// Docket — a desktop shell for the Docket legal-practice mini app.
#[derive(Parser, Debug)]
#[command(name = "docket", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Directory holding the shell document and page fragments.
    #[arg(long)]
    pub assets: Option<String>,

    /// Page to open at startup (cases, hearings, tasks, profile).
    #[arg(short = 'p', long)]
    pub page: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
