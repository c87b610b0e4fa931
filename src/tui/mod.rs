//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::SessionEvent values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event loop
//!
//! One cooperative loop: draw, poll (up to 500ms), fold the event into the
//! session, perform whatever `Effect` comes back. A poll timeout becomes a
//! `TimerTick` driving the cursor blink. The completion request runs to
//! completion inside the loop via `Runtime::block_on`, so no input or
//! scrolling is processed while a request is outstanding.

mod event;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::core::action::{Effect, SessionEvent, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Session;
use crate::gateway::{CompletionGateway, CompletionRequest, OfflineGateway, OpenAiGateway};

/// Poll timeout; doubles as the cursor-blink cadence.
const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Build a gateway from the resolved config. Without an API credential the
/// session runs in offline demo mode against canned art.
pub fn build_gateway(config: &ResolvedConfig) -> Arc<dyn CompletionGateway> {
    match config.api_key.clone() {
        Some(api_key) => Arc::new(OpenAiGateway::new(
            api_key,
            config.model.clone(),
            Some(config.base_url.clone()),
        )),
        None => {
            info!("no API key configured, serving placeholder art");
            Arc::new(OfflineGateway)
        }
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let gateway = build_gateway(config);
    let mut session = Session::new(gateway, config);

    let mut terminal = ratatui::init();
    let size = terminal.size()?;
    update(
        &mut session,
        SessionEvent::Resize { width: size.width, height: size.height },
    );

    info!("session started (gateway: {})", session.gateway.name());

    let final_line = loop {
        terminal.draw(|f| ui::draw_ui(f, &session))?;

        let Some(session_event) = event::poll_event(TICK_INTERVAL)? else {
            update(&mut session, SessionEvent::TimerTick);
            continue;
        };

        match update(&mut session, session_event) {
            Effect::None => {}
            Effect::SendPrompt(prompt) => dispatch_prompt(&mut session, prompt, &runtime),
            Effect::Quit(text) => break text,
        }
    };

    ratatui::restore();

    // The in-flight input buffer is the program's last observable line.
    println!("{final_line}");
    Ok(())
}

/// Runs one completion exchange and folds the outcome back into the session.
///
/// Blocks the calling thread (and with it the whole event loop) until the
/// gateway answers.
fn dispatch_prompt(session: &mut Session, prompt: String, runtime: &tokio::runtime::Runtime) {
    let gateway = Arc::clone(&session.gateway);
    let request = CompletionRequest {
        prompt: &prompt,
        max_tokens: session.max_tokens,
    };
    let result = runtime.block_on(gateway.complete(request));
    if session.apply_completion(prompt, result) {
        info!("fenced art block captured");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingGateway, test_config, test_session};

    #[test]
    fn test_build_gateway_without_key_is_offline() {
        let config = test_config();
        assert_eq!(build_gateway(&config).name(), "offline");
    }

    #[test]
    fn test_build_gateway_with_key_is_openai() {
        let config = ResolvedConfig {
            api_key: Some("sk-test".to_string()),
            ..test_config()
        };
        assert_eq!(build_gateway(&config).name(), "openai");
    }

    #[test]
    fn test_dispatch_prompt_records_both_turns() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = test_session();

        dispatch_prompt(&mut session, "hello".to_string(), &runtime);

        assert_eq!(session.transcript.len(), 2);
        assert_eq!(session.transcript.messages()[0].text, "hello");
        assert_eq!(session.transcript.messages()[1].text, "hi there");
    }

    #[test]
    fn test_dispatch_prompt_failure_keeps_transcript_empty() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut session = test_session();
        session.gateway = Arc::new(FailingGateway);

        dispatch_prompt(&mut session, "hello".to_string(), &runtime);

        assert!(session.transcript.is_empty());
        assert!(session.status_message.contains("Completion error"));
    }
}
