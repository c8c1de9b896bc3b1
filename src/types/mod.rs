pub mod analysis;
pub mod candle;
pub mod quote;

pub use analysis::*;
pub use candle::*;
pub use quote::*;
