//! Offline demo gateway, selected when no API credential is configured.
//!
//! A deliberate fallback rather than an error path: the session behaves
//! normally but every prompt gets the same canned art back, with no network
//! access at all.

use async_trait::async_trait;
use log::info;

use crate::gateway::{CompletionGateway, CompletionRequest, GatewayError};

/// The fixed reply handed out in offline mode.
pub const PLACEHOLDER_ART: &str = r#"```
    _____\    _______
   /      \  |      /\
  /_______/  |_____/  \
 |   \   /        /   /
  \   \ MISSING \/   /
   \  /   API    \__/_
    \/ ___KEY_ /\
      /  \    /  \
     /\   \  /   /
       \   \/   /
        \___\__/
```"#;

pub struct OfflineGateway;

#[async_trait]
impl CompletionGateway for OfflineGateway {
    fn name(&self) -> &str {
        "offline"
    }

    async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String, GatewayError> {
        info!("offline mode: returning placeholder art");
        Ok(PLACEHOLDER_ART.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::art::extract_fenced_block;

    #[test]
    fn test_placeholder_is_a_complete_fenced_block() {
        // The canned reply must itself trigger art capture.
        assert_eq!(extract_fenced_block(PLACEHOLDER_ART), Some(PLACEHOLDER_ART));
    }
}
