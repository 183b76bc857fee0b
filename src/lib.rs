pub mod analyzers;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod report;
pub mod segment;
pub mod stats;
