use crate::catalog::Item;
use crate::translation::prompt::build_item_prompt;
use crate::translation::response::parse_response;
use crate::utils::Result;
use async_trait::async_trait;

/// The only piece a vendor implements: deliver a prompt, return the model's
/// raw text.
#[async_trait]
pub trait PromptTransport: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send_prompt(&self, prompt: &str) -> Result<String>;
}

/// A vendor transport combined with the shared prompt and response handling.
pub struct Provider {
    transport: Box<dyn PromptTransport>,
}

impl Provider {
    pub fn new<T>(transport: T) -> Self
    where
        T: PromptTransport + 'static,
    {
        Self {
            transport: Box::new(transport),
        }
    }

    pub fn name(&self) -> &'static str {
        self.transport.name()
    }

    /// Translates one chunk. The result has exactly `items.len()` entries,
    /// entry `i` belonging to `items[i]`, or the call fails as a whole.
    pub async fn translate(
        &self,
        items: &[Item],
        target_lang_name: &str,
        source_lang_name: &str,
    ) -> Result<Vec<String>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = build_item_prompt(items, target_lang_name, source_lang_name);
        let raw = self.transport.send_prompt(&prompt).await?;
        parse_response(&raw, items.len())
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("transport", &self.transport.name())
            .finish()
    }
}
