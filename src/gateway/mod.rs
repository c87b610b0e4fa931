mod provider;
mod providers;

pub use provider::{CompletionGateway, CompletionRequest, GatewayError};
pub use providers::offline::{OfflineGateway, PLACEHOLDER_ART};
pub use providers::openai::OpenAiGateway;
