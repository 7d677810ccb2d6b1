pub mod manifest;
pub mod run;
