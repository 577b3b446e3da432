pub mod options;
pub mod position;
pub mod report;

pub use options::*;
pub use position::LineIndex;
pub use report::*;
