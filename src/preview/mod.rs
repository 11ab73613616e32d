pub mod visual;

pub use visual::{render, PreviewPage, ScoreTableView, WarningBlock};
