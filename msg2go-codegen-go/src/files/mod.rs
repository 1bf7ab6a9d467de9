//! Files written into the output directory.

mod go_mod;
mod main_go;

pub use go_mod::GoMod;
pub use main_go::MainGo;
