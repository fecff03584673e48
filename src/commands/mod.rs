pub mod generate;
pub mod init;
pub mod pareto;
pub mod report;
