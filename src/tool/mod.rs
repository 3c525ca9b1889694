mod direction;
mod read;
mod write;

pub use direction::direction;
pub use read::read;
pub use write::write;
