pub mod handler;

pub use handler::KeyAction;
