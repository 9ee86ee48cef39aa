mod line;
mod lines;
mod state;

pub use line::NormalizedLine;
pub use lines::{LineReader, SourceLines};
pub use state::{Classification, LineClassifier, ScanState, classify, classify_reader};
