//! Output rendering (Freeplane mind map, JSON report)

pub mod mindmap;
pub mod report;

pub use mindmap::{render_mindmap, write_mindmap};
pub use report::{build_report, write_report};
