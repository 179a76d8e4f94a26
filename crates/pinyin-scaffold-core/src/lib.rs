//! Core library for the pinyin-scaffold toolkit.
//!
//! Turns a fixed registry of 42 pinyin names into 42 project folders and one zip archive.
//! Each name is mapped to a template by a checksum of its characters
//! ([`selector::select`]), the template is rendered with the name substituted in
//! ([`templates::renderer::TemplateRenderer`]), the files are written to disk
//! ([`project::Materializer`]), and the folders are packed into an archive
//! ([`archive::archive`]).
//!
//! Three generators implement [`generators::Generator`]:
//! - [`generators::JavaCollections`]: one of 14 Java collection exercises
//! - [`generators::JavaSorts`]: bubble sort and quicksort over a seeded sample
//! - [`generators::StaticSites`]: a personal static web page
//!
//! [`orchestrator::Orchestrator`] runs one generator over a [`config::RunConfig`].

pub mod archive;
pub mod config;
pub mod error;
pub mod generators;
pub mod java_random;
pub mod orchestrator;
pub mod project;
pub mod registry;
pub mod selector;
pub mod templates;
