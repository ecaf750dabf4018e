use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Graph or maze document (.toml or .json)
    pub input: PathBuf,

    /// Start vertex (maze cells are written x,y)
    #[arg(long)]
    pub from: String,

    /// Target vertex
    #[arg(long)]
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct WeightArgs {
    /// Graph or maze document (.toml or .json)
    pub input: PathBuf,

    /// Source vertex
    pub from: String,

    /// Destination vertex
    pub to: String,
}
