pub mod aggregate;
pub mod logic;
pub mod options;
pub mod range;
pub mod report;
