use clap::Parser;

#[derive(Parser)]
pub struct HistoryArgs {
    /// Number of the most recent entries to show.
    #[clap(long, default_value = "10")]
    pub limit: usize,
}
