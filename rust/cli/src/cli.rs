use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "rojak",
    version,
    about = "Rojak: word-fusion trivia flashcards in the terminal"
)]
pub struct RojakCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session
    Play {
        /// Card file (`front,back` per line after a header); defaults to the bundled deck
        #[arg(long)]
        cards: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the shuffled deck order for a seed
    Deal {
        #[arg(long)]
        cards: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check a card file and report malformed lines
    Verify {
        #[arg(long)]
        cards: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
    /// Print a ChaCha20 sample for a seed
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}
