pub mod export;
pub mod id;
pub mod output;
pub mod scan;
