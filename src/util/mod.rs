pub mod hash;
pub mod trace;
