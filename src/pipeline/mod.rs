pub mod datasource;
pub mod input;
pub mod processor;
