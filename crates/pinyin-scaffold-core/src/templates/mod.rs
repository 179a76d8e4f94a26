//! Template system for project generation.
//!
//! Template bodies are embedded into the binary at compile-time via [`include_str!`] in
//! the [`embedded`] module, grouped into per-generator pools in [`pool`], and rendered at
//! runtime with [Handlebars](https://handlebarsjs.com/) via [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Bodies reference [`placeholder::Placeholder`] keys with Handlebars syntax:
//! - `{{student}}`: the project name
//! - `{{seed}}`: checksum-derived seed (collections generator)
//! - `{{hue}}`, `{{initials}}`: site color scheme and avatar text
//!
//! ## Adding a new template
//!
//! 1. Create the file under `templates/` (suffix `.hbs` if it has placeholders)
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Add a [`pool::Template`] entry in [`pool`]
//!
//! The `pool` tests fail if a body references a key with no [`placeholder::Placeholder`].

pub mod embedded;
pub mod placeholder;
pub mod pool;
pub mod renderer;
