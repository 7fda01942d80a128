/*!
 * Directive template for single-sentence translation.
 */

use crate::language::TargetLanguage;

/// Directive template sent to the provider
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default directive. Placeholders: {target_language}, {text}
    pub const SENTENCE_TRANSLATOR: &'static str = "Translate this text to {target_language}.
Output ONLY the translated sentence, no extra text, quotes, or explanation.
Text: {text}";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Render the template for one source text.
    ///
    /// The language's data value is substituted, not its label.
    pub fn render(&self, text: &str, language: TargetLanguage) -> String {
        self.template
            .replace("{target_language}", language.value())
            .replace("{text}", text)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(Self::SENTENCE_TRANSLATOR)
    }
}

/// Build the default directive for `text` and `language`
pub fn build_directive(text: &str, language: TargetLanguage) -> String {
    PromptTemplate::default().render(text, language)
}
