pub mod controls;
pub mod pointer;
