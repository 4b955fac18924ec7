use std::sync::Arc;

use tokio::sync::Mutex;

use taxa_core::chat::{ChatLog, ChatMessage};
use taxa_core::i18n::{Language, Translator};
use taxa_core::ports::{ChatApiPort, LanguageStorePort, SessionStorePort};
use taxa_core::remote::ApiError;

/// The chat panel: an append-only conversation with the assistant, cached in
/// the runtime so it survives across command invocations.
///
/// The log mutex is held for the whole send, so exactly one message is in
/// flight at a time; the screen disables its input while a send is pending.
pub struct ChatPanel {
    log: Mutex<Option<ChatLog>>,
    chat_api: Arc<dyn ChatApiPort>,
    session_store: Arc<dyn SessionStorePort>,
    language_store: Arc<dyn LanguageStorePort>,
    translator: Arc<Translator>,
}

impl ChatPanel {
    pub fn new(
        chat_api: Arc<dyn ChatApiPort>,
        session_store: Arc<dyn SessionStorePort>,
        language_store: Arc<dyn LanguageStorePort>,
        translator: Arc<Translator>,
    ) -> Self {
        Self {
            log: Mutex::new(None),
            chat_api,
            session_store,
            language_store,
            translator,
        }
    }

    /// Create the panel from cloned `Arc<dyn Port>` references.
    pub fn from_ports(
        chat_api: Arc<dyn ChatApiPort>,
        session_store: Arc<dyn SessionStorePort>,
        language_store: Arc<dyn LanguageStorePort>,
        translator: Arc<Translator>,
    ) -> Self {
        Self::new(chat_api, session_store, language_store, translator)
    }

    /// The conversation so far, seeding the localized greeting on first use.
    pub async fn history(&self) -> Vec<ChatMessage> {
        let greeting = self.greeting().await;
        let mut guard = self.log.lock().await;
        guard
            .get_or_insert_with(|| ChatLog::with_greeting(greeting))
            .messages()
            .to_vec()
    }

    /// Send one message and return the updated conversation.
    ///
    /// Blank input appends nothing and issues no request. Otherwise the user
    /// entry is appended immediately (optimistic), and exactly one assistant
    /// entry follows: the reply text, or a localized error string. Entries
    /// are never edited or removed afterwards; there is no retry.
    pub async fn send(&self, input: &str) -> anyhow::Result<Vec<ChatMessage>> {
        let Some(session) = self.session_store.load().await? else {
            anyhow::bail!("not signed in");
        };
        let language = self.current_language().await;
        let greeting = self.translator.translate(language, "ai.welcome");

        let mut guard = self.log.lock().await;
        let log = guard.get_or_insert_with(|| ChatLog::with_greeting(greeting));

        let Some(message) = log.push_user(input) else {
            return Ok(log.messages().to_vec());
        };

        let reply = match self.chat_api.send(&session.token, &message).await {
            Ok(text) => text,
            Err(ApiError::Transport(err)) => {
                log::warn!("chat request failed to reach the backend: {err}");
                self.translator.translate(language, "ai.error_connection")
            }
            Err(err) => {
                log::warn!("chat request rejected: {err}");
                self.translator.translate(language, "ai.error_retry")
            }
        };
        log.push_assistant(reply);
        Ok(log.messages().to_vec())
    }

    async fn greeting(&self) -> String {
        let language = self.current_language().await;
        self.translator.translate(language, "ai.welcome")
    }

    async fn current_language(&self) -> Language {
        match self.language_store.load().await {
            Ok(Some(language)) => language,
            Ok(None) => Language::default(),
            Err(err) => {
                log::warn!("language store read failed: {err}");
                Language::default()
            }
        }
    }
}
