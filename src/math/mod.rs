pub mod auc;
pub mod optimum;

pub use auc::auc;
pub use optimum::{OptimalPoint, optimum};
