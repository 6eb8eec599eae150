pub mod group;
pub mod region;
pub mod subexport;
