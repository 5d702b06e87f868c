pub mod coin;
pub mod experiment;
pub mod sort;
pub mod opts;
pub mod errors;
pub mod logger;
pub mod util;
