//! Static sites: a page, stylesheet, script, and generated avatar per name.

use std::num::{NonZeroU32, NonZeroUsize};

use super::{Generator, GeneratorKind, RenderedFile};
use crate::error::Result;
use crate::selector::Selection;
use crate::templates::placeholder::{Placeholder, Substitutions};
use crate::templates::pool::{SITES_POOL, SITE_APP, SITE_AVATAR, SITE_README, SITE_STYLES};
use crate::templates::renderer::TemplateRenderer;

/// Hues cover the whole color wheel.
const HUE_BOUND: NonZeroU32 = match NonZeroU32::new(360) {
    Some(n) => n,
    None => unreachable!(),
};

/// Values bound into the site templates.
struct SiteContext<'a> {
    student: &'a str,
    hue: u32,
}

impl SiteContext<'_> {
    /// First two characters of the name, upper-cased.
    fn initials(&self) -> String {
        self.student.chars().take(2).collect::<String>().to_uppercase()
    }

    fn substitutions(&self) -> Substitutions {
        Substitutions::new()
            .with(Placeholder::Student, self.student)
            .with(Placeholder::Hue, self.hue)
            .with(Placeholder::Initials, self.initials())
    }
}

/// Single-page personal sites in HTML5, CSS3 and vanilla JS.
pub struct StaticSites;

impl Default for StaticSites {
    fn default() -> Self {
        Self
    }
}

impl StaticSites {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for StaticSites {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Sites
    }

    fn display_name(&self) -> &'static str {
        "Static sites"
    }

    fn pool_size(&self) -> NonZeroUsize {
        SITES_POOL.size()
    }

    fn seed_bound(&self) -> NonZeroU32 {
        HUE_BOUND
    }

    fn render_project(
        &self,
        name: &str,
        selection: Selection,
        renderer: &TemplateRenderer,
    ) -> Result<Vec<RenderedFile>> {
        let subs = SiteContext {
            student: name,
            hue: selection.seed,
        }
        .substitutions();

        Ok(vec![
            RenderedFile::new(
                "index.html",
                renderer.render_from_pool(&SITES_POOL, selection.index, &subs)?,
            ),
            RenderedFile::new("styles.css", renderer.render(&SITE_STYLES, &subs)?),
            RenderedFile::new("app.js", renderer.render(&SITE_APP, &subs)?),
            RenderedFile::new("assets/avatar.svg", renderer.render(&SITE_AVATAR, &subs)?),
            RenderedFile::new("README.md", renderer.render(&SITE_README, &subs)?),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(name: &str, hue: u32) -> Vec<RenderedFile> {
        StaticSites::new()
            .render_project(name, Selection { index: 0, seed: hue }, &TemplateRenderer::new())
            .unwrap()
    }

    fn file<'a>(files: &'a [RenderedFile], path: &str) -> &'a str {
        &files
            .iter()
            .find(|f| f.relative_path.to_str() == Some(path))
            .unwrap()
            .contents
    }

    #[test]
    fn test_initials() {
        let ctx = SiteContext {
            student: "luoyi",
            hue: 0,
        };
        assert_eq!(ctx.initials(), "LU");
        let short = SiteContext {
            student: "x",
            hue: 0,
        };
        assert_eq!(short.initials(), "X");
    }

    #[test]
    fn test_hue_flows_into_css_and_svg() {
        let files = render("luoyi", 217);
        assert!(file(&files, "styles.css").contains("--h: 217;"));
        assert!(file(&files, "assets/avatar.svg").contains("fill=\"hsl(217 70% 55%)\""));
        assert!(file(&files, "assets/avatar.svg").contains(">LU</text>"));
    }

    #[test]
    fn test_page_links_assets() {
        let files = render("renran", 10);
        let html = file(&files, "index.html");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>renran - 个人静态站</title>"));
        assert!(html.contains("href=\"styles.css\""));
        assert!(html.contains("src=\"app.js\""));
        assert!(html.contains("src=\"assets/avatar.svg\""));
    }

    #[test]
    fn test_script_is_static() {
        let a = render("renran", 10);
        let b = render("hehao", 300);
        assert_eq!(file(&a, "app.js"), file(&b, "app.js"));
    }
}
