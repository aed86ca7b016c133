pub mod advanced;
pub mod basic;

pub use advanced::AdvancedPage;
pub use basic::BasicPage;
