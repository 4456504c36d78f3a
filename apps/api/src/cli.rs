use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "navigator", version, about = "Career roadmap API and terminal wizard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API (default).
    Serve,
    /// Walk through the roadmap wizard in the terminal.
    Wizard {
        /// Base URL of a running API; defaults to NAVIGATOR_API_URL.
        #[arg(long)]
        api_url: Option<String>,
        /// Initial display language (en, es, fr, pt).
        #[arg(long)]
        lang: Option<String>,
    },
}
