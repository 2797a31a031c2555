pub mod envs;
pub mod ops;
pub mod pick;
