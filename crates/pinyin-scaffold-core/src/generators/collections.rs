//! Java collections: one `Main.java` per name, chosen from a pool of 14 demos.

use std::num::{NonZeroU32, NonZeroUsize};

use super::{Generator, GeneratorKind, RenderedFile};
use crate::error::Result;
use crate::selector::Selection;
use crate::templates::placeholder::{Placeholder, Substitutions};
use crate::templates::pool::{COLLECTIONS_POOL, COLLECTIONS_README};
use crate::templates::renderer::TemplateRenderer;

/// Bound for the seed passed to `Collections.shuffle`.
const SEED_BOUND: NonZeroU32 = match NonZeroU32::new(97) {
    Some(n) => n,
    None => unreachable!(),
};

/// Values bound into the collections templates.
struct JavaContext<'a> {
    student: &'a str,
    seed: u32,
    template_index: usize,
    template_label: &'static str,
}

impl JavaContext<'_> {
    fn substitutions(&self) -> Substitutions {
        Substitutions::new()
            .with(Placeholder::Student, self.student)
            .with(Placeholder::Seed, self.seed)
            .with(Placeholder::TemplateIndex, self.template_index)
            .with(Placeholder::TemplateLabel, self.template_label)
    }
}

/// Java console programs demonstrating one collection type each.
pub struct JavaCollections;

impl Default for JavaCollections {
    fn default() -> Self {
        Self
    }
}

impl JavaCollections {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for JavaCollections {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::JavaCollections
    }

    fn display_name(&self) -> &'static str {
        "Java collections demos"
    }

    fn pool_size(&self) -> NonZeroUsize {
        COLLECTIONS_POOL.size()
    }

    fn seed_bound(&self) -> NonZeroU32 {
        SEED_BOUND
    }

    fn render_project(
        &self,
        name: &str,
        selection: Selection,
        renderer: &TemplateRenderer,
    ) -> Result<Vec<RenderedFile>> {
        let template = COLLECTIONS_POOL.get(selection.index)?;
        let subs = JavaContext {
            student: name,
            seed: selection.seed,
            template_index: selection.index,
            template_label: template.label,
        }
        .substitutions();

        Ok(vec![
            RenderedFile::new("src/Main.java", renderer.render(template, &subs)?),
            RenderedFile::new("README.md", renderer.render(&COLLECTIONS_README, &subs)?),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::select;

    fn render(name: &str) -> Vec<RenderedFile> {
        let generator = JavaCollections::new();
        let sel = select(name, generator.pool_size(), generator.seed_bound());
        generator.render_project(name, sel, &TemplateRenderer::new())
            .unwrap()
    }

    #[test]
    fn test_fanli_gets_lru_cache() {
        let files = render("fanli");
        assert_eq!(files[0].relative_path.to_str(), Some("src/Main.java"));
        assert!(files[0].contents.contains("new LinkedHashMap<>(16, 0.75f, true)"));
        assert!(files[0].contents.contains("fanli 的伪 LRU 缓存初始"));
    }

    #[test]
    fn test_readme_names_template() {
        let files = render("fanli");
        let readme = &files[1].contents;
        assert!(readme.contains("模板 #4：LinkedHashMap 伪 LRU 缓存"));
    }

    #[test]
    fn test_shuffle_template_gets_seed() {
        let generator = JavaCollections::new();
        let sel = Selection { index: 11, seed: 37 };
        let files = generator
            .render_project("xubo", sel, &TemplateRenderer::new())
            .unwrap();
        assert!(files[0].contents.contains("new java.util.Random(37)"));
        assert!(files[0].contents.contains("shuffle(37) 后"));
    }

    #[test]
    fn test_java_braces_are_single() {
        for index in 0..collections_pool_len() {
            let sel = Selection { index, seed: 1 };
            let files = JavaCollections::new()
                .render_project("hutao", sel, &TemplateRenderer::new())
                .unwrap();
            assert!(files[0].contents.starts_with("import java.util."));
            assert!(files[0].contents.contains("public class Main {\n"));
            assert!(!files[0].contents.contains("{{"));
            assert!(!files[0].contents.contains("}}"));
        }
    }

    fn collections_pool_len() -> usize {
        JavaCollections::new().pool_size().get()
    }
}
