pub mod info;
pub mod input;
pub mod run;
pub mod world;
