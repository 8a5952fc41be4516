pub mod projection;
pub mod report;
pub mod sequence;
