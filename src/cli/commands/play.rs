//! Play command - Interactive game in the terminal

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::TerminalPresentation,
    app::{App, SeatKind, SessionConfig},
    tictactoe::Dimensionality,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game in the terminal")]
pub struct PlayArgs {
    /// JSON session configuration; flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Board dimensionality (2 or 3)
    #[arg(long, short = 'd')]
    pub dimensions: Option<usize>,

    /// Who plays X
    #[arg(long, value_enum)]
    pub x: Option<SeatKind>,

    /// Who plays O
    #[arg(long, value_enum)]
    pub o: Option<SeatKind>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of cached positions per engine
    #[arg(long)]
    pub cache_capacity: Option<usize>,
}

impl PlayArgs {
    /// Merge the optional config file with the command-line overrides.
    pub fn resolve_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SessionConfig::default(),
        };

        if let Some(dimensions) = self.dimensions {
            config.dimensions = Dimensionality::try_from(dimensions)?;
        }
        if let Some(x) = self.x {
            config.x = x;
        }
        if let Some(o) = self.o {
            config.o = o;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(capacity) = self.cache_capacity {
            config.search = config.search.with_cache_capacity(capacity);
        }
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let app = App::new(config);
    let mut session = app.session(TerminalPresentation::stdio());
    session.run().context("Game aborted")?;
    Ok(())
}
