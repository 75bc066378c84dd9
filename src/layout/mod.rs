pub mod element;
pub mod settings;

pub use element::*;
pub use settings::*;
