pub mod fake;
pub mod groq;
pub mod traits;

pub use fake::FakeProvider;
pub use groq::groq::GroqProvider;
pub use traits::ChatProvider;
