pub mod catalog;
pub mod error;
pub mod interpret;
pub mod peers;
pub mod range;
pub mod report;
pub mod score;
pub mod session;
pub mod synth;

pub use catalog::*;
pub use error::CoreError;
pub use interpret::*;
pub use peers::*;
pub use range::*;
pub use report::*;
pub use score::*;
pub use session::*;
pub use synth::*;
