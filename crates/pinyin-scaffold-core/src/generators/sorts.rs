//! Java sorts: bubble sort, quick sort, and a driver that sorts a fixed sample.

use std::num::{NonZeroU32, NonZeroUsize};

use super::{Generator, GeneratorKind, RenderedFile};
use crate::error::Result;
use crate::java_random;
use crate::selector::Selection;
use crate::templates::placeholder::{Placeholder, Substitutions};
use crate::templates::pool::{SORTS_BUBBLE, SORTS_POOL, SORTS_QUICK, SORTS_README};
use crate::templates::renderer::TemplateRenderer;

/// Seed the driver passes to `java.util.Random`.
pub const SAMPLE_SEED: i64 = 42;
/// Number of values in the driver's sample.
pub const SAMPLE_LEN: usize = 12;
/// Exclusive bound passed to `nextInt`.
pub const SAMPLE_BOUND: i32 = 100;

/// Identical sorting sources for every name.
pub struct JavaSorts {
    /// The sample formatted like `Arrays.toString`.
    sample: String,
}

impl Default for JavaSorts {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaSorts {
    pub fn new() -> Self {
        let values = java_random::sample(SAMPLE_SEED, SAMPLE_LEN, SAMPLE_BOUND);
        let joined = values
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            sample: format!("[{joined}]"),
        }
    }

    /// The array the driver prints as its unsorted input.
    pub fn sample(&self) -> &str {
        &self.sample
    }
}

impl Generator for JavaSorts {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::JavaSorts
    }

    fn display_name(&self) -> &'static str {
        "Java sorting demos"
    }

    fn pool_size(&self) -> NonZeroUsize {
        SORTS_POOL.size()
    }

    fn seed_bound(&self) -> NonZeroU32 {
        NonZeroU32::MIN
    }

    fn render_project(
        &self,
        name: &str,
        selection: Selection,
        renderer: &TemplateRenderer,
    ) -> Result<Vec<RenderedFile>> {
        let subs = Substitutions::new()
            .with(Placeholder::Student, name)
            .with(Placeholder::SampleSeed, SAMPLE_SEED)
            .with(Placeholder::SampleLen, SAMPLE_LEN)
            .with(Placeholder::SampleBound, SAMPLE_BOUND)
            .with(Placeholder::Sample, &self.sample);
        let none = Substitutions::new();

        Ok(vec![
            RenderedFile::new("src/BubbleSort.java", renderer.render(&SORTS_BUBBLE, &none)?),
            RenderedFile::new("src/QuickSort.java", renderer.render(&SORTS_QUICK, &none)?),
            RenderedFile::new(
                "src/Main.java",
                renderer.render_from_pool(&SORTS_POOL, selection.index, &subs)?,
            ),
            RenderedFile::new("README.md", renderer.render(&SORTS_README, &subs)?),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::select;

    fn render(name: &str) -> Vec<RenderedFile> {
        let generator = JavaSorts::new();
        let sel = select(name, generator.pool_size(), generator.seed_bound());
        generator.render_project(name, sel, &TemplateRenderer::new())
            .unwrap()
    }

    #[test]
    fn test_layout() {
        let paths: Vec<String> = render("wuhan")
            .iter()
            .map(|f| f.relative_path.display().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "src/BubbleSort.java",
                "src/QuickSort.java",
                "src/Main.java",
                "README.md"
            ]
        );
    }

    #[test]
    fn test_driver_uses_fixed_seed() {
        let files = render("wuhan");
        let main = &files[2].contents;
        assert!(main.contains("new Random(42)"));
        assert!(main.contains("int n = 12;"));
        assert!(main.contains("r.nextInt(100)"));
    }

    #[test]
    fn test_sample_is_identical_across_names() {
        let a = render("wuhan");
        let b = render("caichunmei");
        // Only the name differs between the two drivers.
        assert_eq!(
            a[2].contents.replace("wuhan", "X"),
            b[2].contents.replace("caichunmei", "X")
        );
        assert_eq!(a[0], b[0]);
        assert_eq!(a[1], b[1]);
    }

    #[test]
    fn test_readme_lists_sample() {
        let generator = JavaSorts::new();
        let files = render("hutao");
        assert!(files[3].contents.contains(&format!("原数组: {}", generator.sample())));
        assert_eq!(generator.sample(), "[30, 63, 48, 84, 70, 25, 5, 18, 19, 93, 82, 2]");
        assert_eq!(generator.sample().matches(", ").count(), SAMPLE_LEN - 1);
    }
}
