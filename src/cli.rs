use crate::constants::DEFAULT_TIMEOUT_SECS;
use clap::{Args, Parser, Subcommand};

/// Ask a vision-capable GPT model about a local image.
#[derive(Parser, Debug)]
#[command(name = "gpt-vision", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an image using GPT-4 Vision capabilities
    ///
    /// Provide an image and a user prompt to analyze the image content.
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Path to the image file
    #[arg(short, long, default_value = "")]
    pub image: String,

    /// User prompt message
    #[arg(short, long, default_value = "")]
    pub prompt: String,

    /// OpenAI API key (falls back to OPENAI_API_KEY)
    #[arg(short = 'k', long = "apikey", default_value = "")]
    pub api_key: String,

    /// Seconds to wait for the API before giving up
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}
