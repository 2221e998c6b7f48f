mod context;
pub mod image_flow;
mod prompt;
mod shortcuts;
pub mod transcript;

pub use context::{CONTEXT_WINDOW, build_context, single_turn};
pub use image_flow::ImageIntent;
pub use prompt::{creator_attribution, primary_profile_sentence, system_prompt};
pub use shortcuts::Shortcuts;
