//! Handlebars-based renderer for template bodies.
//!
//! Before handing a body to Handlebars, every `{{key}}` it references is checked
//! against the substitution set, so a missing value surfaces as
//! [`ScaffoldError::MissingSubstitution`] naming the template and the key. Handlebars
//! runs in **strict mode** as a backstop: a variable absent from the data context is
//! an error, never an empty string.
//!
//! Two registries are kept. Markup templates (HTML, SVG) use Handlebars' default HTML
//! escaping; everything else is rendered with [`handlebars::no_escape`] so Java and
//! CSS come out byte-for-byte.

use handlebars::Handlebars;

use super::placeholder::{Placeholder, Substitutions};
use super::pool::{Escape, Template, TemplatePool};
use crate::error::{Result, ScaffoldError};

/// Template renderer used by every generator.
pub struct TemplateRenderer {
    text: Handlebars<'static>,
    markup: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut text = Handlebars::new();
        text.set_strict_mode(true);
        text.register_escape_fn(handlebars::no_escape);

        let mut markup = Handlebars::new();
        markup.set_strict_mode(true);

        Self { text, markup }
    }

    /// Render one template with the given substitutions.
    pub fn render(&self, template: &Template, subs: &Substitutions) -> Result<String> {
        for key in template.referenced_keys() {
            let supplied = Placeholder::from_key(key).is_some_and(|p| subs.contains(p));
            if !supplied {
                return Err(ScaffoldError::MissingSubstitution {
                    template: template.id.to_string(),
                    placeholder: key.to_string(),
                });
            }
        }

        let hbs = match template.escape {
            Escape::None => &self.text,
            Escape::Markup => &self.markup,
        };
        let rendered = hbs
            .render_template(template.body, &subs.to_context())
            .map_err(|e| ScaffoldError::TemplateRender(format!("{}: {e}", template.id)))?;

        tracing::trace!(template = template.id, bytes = rendered.len(), "rendered");
        Ok(rendered)
    }

    /// Render the template at `index` in `pool`.
    pub fn render_from_pool(
        &self,
        pool: &TemplatePool,
        index: usize,
        subs: &Substitutions,
    ) -> Result<String> {
        self.render(pool.get(index)?, subs)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
