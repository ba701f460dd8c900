// Services module - injected external capabilities

pub mod generation;
pub mod theme;
pub mod verification;

pub use generation::{CannedGenerator, GenerationError, OpenAiGenerator, TextGenerator};
pub use theme::{Accent, ThemeMode, ThemePreferences};
pub use verification::{CodeVerifier, FixedCodeVerifier};
