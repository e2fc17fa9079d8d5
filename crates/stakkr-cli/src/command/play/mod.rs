use stakkr_engine::{GameConfig, GameSession};
use tick_runtime::Runtime;

use crate::command::play::app::PlayApp;

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Board width in cells (3 to 16)
    #[clap(long)]
    cols: Option<usize>,
    /// Board height in cells
    #[clap(long)]
    rows: Option<usize>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let mut config = GameConfig::default();
    if let Some(cols) = arg.cols {
        config.cols = cols;
    }
    if let Some(rows) = arg.rows {
        config.rows = rows;
    }

    let mut app = PlayApp::new(GameSession::new(config)?);
    Runtime::new().run(&mut app)?;

    Ok(())
}
