use minijinja::{context, Environment};
use std::sync::OnceLock;

use crate::model::ContentType;

// NOTE:
// Both templates tell the provider to answer with the body only, so the
// relay can pass the text through without post-processing.

const ARTICLE_TEMPLATE: &str = r#"You are Mr Bukkan, a professional article writer. Write a comprehensive, well-structured article about "{{ topic }}".

Requirements:
- Length: 500-800 words
- Include an engaging introduction
- Use clear headings and subheadings
- Provide detailed information with facts and insights
- Include a strong conclusion
- Write in a professional, informative tone
- Make it engaging and easy to read

Only respond with the article itself, properly formatted with line breaks between paragraphs."#;

const STORY_TEMPLATE: &str = r#"You are Mr Bukkan, a creative story writer. Write an engaging, imaginative story about "{{ topic }}".

Requirements:
- Length: 600-1000 words
- Include vivid descriptions and character development
- Create an engaging plot with a clear beginning, middle, and end
- Use descriptive language and dialogue where appropriate
- Make it emotionally engaging and memorable
- Write in a narrative, creative tone

Only respond with the story itself, properly formatted with line breaks between paragraphs."#;

static TEMPLATES: OnceLock<Environment<'static>> = OnceLock::new();

fn template_name(kind: ContentType) -> &'static str {
    match kind {
        ContentType::Article => "article",
        ContentType::Story => "story",
    }
}

fn template_source(kind: ContentType) -> &'static str {
    match kind {
        ContentType::Article => ARTICLE_TEMPLATE,
        ContentType::Story => STORY_TEMPLATE,
    }
}

fn load_templates() -> Environment<'static> {
    let mut env = Environment::new();
    for kind in ContentType::ALL {
        env.add_template(template_name(kind), template_source(kind))
            .unwrap_or_else(|err| panic!("invalid {kind} prompt template: {err}"));
    }
    env
}

/// Renders the writer prompt for `kind` with `topic` interpolated verbatim.
pub fn build_prompt(kind: ContentType, topic: &str) -> Result<String, minijinja::Error> {
    let env = TEMPLATES.get_or_init(load_templates);
    env.get_template(template_name(kind))?
        .render(context! { topic => topic })
}
