pub mod catalog;
pub mod coins;
pub mod conversion;
pub mod lifestyle;
pub mod observation;
pub mod period;
pub mod purchasing;
pub mod text;

pub use catalog::*;
pub use coins::*;
pub use conversion::*;
pub use lifestyle::*;
pub use observation::*;
pub use period::*;
pub use purchasing::*;
pub use text::*;
