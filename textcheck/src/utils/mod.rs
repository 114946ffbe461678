pub mod sanitize;
pub use sanitize::{FilterError, Sanitize};

pub mod terminal;
pub use terminal::Terminal;
