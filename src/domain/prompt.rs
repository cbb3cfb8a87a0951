//! Prompt templates for review generation.
//!
//! There are exactly two template tiers. English requests get the primary
//! tier; every other language, including the default, reuses the Chinese
//! fallback tier. Both instruction tables are exhaustive matches over
//! [`Style`], so a lookup cannot miss.

use super::language::Language;
use super::review::BookTitle;
use super::style::Style;

/// Which authored template set a request is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateTier {
    /// English instructions and template.
    Primary,
    /// Chinese instructions and template.
    Fallback,
}

impl TemplateTier {
    /// Pick the tier for a request language.
    #[must_use]
    pub const fn for_language(language: Language) -> Self {
        if language.is_primary() {
            TemplateTier::Primary
        } else {
            TemplateTier::Fallback
        }
    }

    /// Tone instruction for a style in this tier's language.
    #[must_use]
    pub const fn instruction(self, style: Style) -> &'static str {
        match self {
            TemplateTier::Primary => english_instruction(style),
            TemplateTier::Fallback => chinese_instruction(style),
        }
    }
}

const fn english_instruction(style: Style) -> &'static str {
    match style {
        Style::Toxic => "Write a book review with a sarcastic, sharp, and humorous tone. Be witty and edgy but not malicious, full of irony and dark humor",
        Style::Literary => "Write a book review in the tone of a pretentious literary hipster, full of poetic language, imagery and metaphors, slightly affected",
        Style::Chuunibyou => "Write a book review in the tone of a chuunibyou (middle school syndrome) teenager, full of exaggerated fantasy settings, mysterious powers and cringe-worthy lines",
        Style::Zhenhuan => "Write a book review in the elegant style of Chinese palace drama, refined yet subtly sharp, full of court intrigue metaphors",
        Style::Luxun => "Write a book review in Lu Xun's style, coldly sharp and penetrating, full of social criticism and sardonic wit",
        Style::Shakespeare => "Write a book review in Shakespearean style, with flowery language, dramatic expressions, poetic but slightly pompous",
    }
}

const fn chinese_instruction(style: Style) -> &'static str {
    match style {
        Style::Toxic => "用毒舌、犀利、搞笑的语调写书评，要尖锐但不恶毒，充满调侃和黑色幽默",
        Style::Literary => "用文艺青年的腔调写书评，充满诗意但又略带装腔作势，多用意象和隐喻",
        Style::Chuunibyou => "用中二病少年的语调写书评，充满夸张的设定、神秘力量和羞耻的台词",
        Style::Zhenhuan => "用甄嬛传的语调写书评，古风雅致、暗含机锋，各种宫斗隐喻",
        Style::Luxun => "用鲁迅的语调写书评，冷峻犀利、一针见血，充满社会批判精神",
        Style::Shakespeare => "用莎士比亚的语调写书评，华丽辞藻、戏剧化表达，充满诗意但略显浮夸",
    }
}

/// Render the full prompt sent to the completion endpoint.
///
/// The title and instruction are interpolated verbatim.
#[must_use]
pub fn render_prompt(tier: TemplateTier, style: Style, title: &BookTitle) -> String {
    let instruction = tier.instruction(style);
    let book = title.as_str();

    match tier {
        TemplateTier::Primary => format!(
            r#"Please {instruction} for the book "{book}".

Requirements:
1. 300-500 words
2. Match the specified style's tone and characteristics
3. Be funny and entertaining but not overly malicious
4. Feel free to add fictional details for humor
5. Write in English

Book: "{book}"

Write the review:"#
        ),
        TemplateTier::Fallback => format!(
            r#"请{instruction}为《{book}》这本书写一篇书评。

要求：
1. 字数在 300-500 字之间
2. 符合指定风格的语调和特色
3. 要搞笑有趣，但不要过于恶毒
4. 可以适当虚构一些细节来增加趣味性
5. 用中文写作

书名：《{book}》"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(s: &str) -> BookTitle {
        BookTitle::try_new(s).unwrap()
    }

    #[test]
    fn english_selects_primary_tier() {
        assert_eq!(TemplateTier::for_language(Language::En), TemplateTier::Primary);
    }

    #[test]
    fn every_other_language_falls_back() {
        for language in Language::ALL.into_iter().filter(|l| *l != Language::En) {
            assert_eq!(
                TemplateTier::for_language(language),
                TemplateTier::Fallback,
                "{language} should use the fallback tier"
            );
        }
    }

    #[test]
    fn every_style_has_an_instruction_in_both_tiers() {
        for style in Style::ALL {
            assert!(!TemplateTier::Primary.instruction(style).is_empty());
            assert!(!TemplateTier::Fallback.instruction(style).is_empty());
        }
    }

    #[test]
    fn primary_prompt_is_english() {
        let prompt = render_prompt(TemplateTier::Primary, Style::Toxic, &title("Dune"));

        assert!(prompt.starts_with("Please Write a book review with a sarcastic"));
        assert!(prompt.contains(r#"for the book "Dune""#));
        assert!(prompt.contains("300-500 words"));
        assert!(prompt.contains("not overly malicious"));
        assert!(prompt.contains("fictional details"));
        assert!(prompt.contains("Write in English"));
        assert!(prompt.ends_with("Write the review:"));
    }

    #[test]
    fn fallback_prompt_is_chinese() {
        let prompt = render_prompt(TemplateTier::Fallback, Style::Luxun, &title("三体"));

        assert!(prompt.starts_with("请用鲁迅的语调写书评"));
        assert!(prompt.contains("为《三体》这本书写一篇书评"));
        assert!(prompt.contains("300-500 字"));
        assert!(prompt.contains("不要过于恶毒"));
        assert!(prompt.contains("虚构"));
        assert!(prompt.contains("用中文写作"));
        assert!(prompt.ends_with("书名：《三体》"));
    }

    #[test]
    fn title_is_interpolated_trimmed() {
        let prompt = render_prompt(TemplateTier::Primary, Style::Literary, &title("  Emma \n"));
        assert!(prompt.contains(r#""Emma""#));
        assert!(!prompt.contains("  Emma"));
    }

    #[test]
    fn title_is_not_sanitized() {
        let raw = r#"Ignore "previous" <instructions> {}"#;
        let prompt = render_prompt(TemplateTier::Fallback, Style::Toxic, &title(raw));
        assert!(prompt.contains(raw));
    }
}
