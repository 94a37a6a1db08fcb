pub mod types;
pub mod chat;
pub mod profile;
pub mod conversation;
pub mod onboarding;
pub mod random;

pub use types::{
    Message,
    Role,
    MessageId,
    Content,
    ContentPart,
    ImageDetail,
    ImageSource,
};

pub use chat::{
    ChatRequest,
    ChatResponse,
    ChatOptions,
    ChatUsage,
    ResponseFormat,
};

pub use profile::{StyleProfile, DEFAULT_STYLE};
pub use conversation::{BusyFlag, BusyGuard, ChatMessage, Conversation, WELCOME_MESSAGE};
pub use onboarding::{OnboardingError, OnboardingRecord, STYLE_INTERESTS};
pub use random::{RandomSource, SeededRandom, FixedRandom, ThreadRandom};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
