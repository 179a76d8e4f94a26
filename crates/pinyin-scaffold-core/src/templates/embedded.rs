//! Compile-time embedded template bodies.
//!
//! Each constant loads a file from `templates/` via [`include_str!`]. The paths are
//! relative to this source file (`crates/pinyin-scaffold-core/src/templates/embedded.rs`).
//!
//! Files ending in `.hbs` contain Handlebars placeholders; the rest are emitted as-is.
//! Do NOT rename or move a template file without updating its path here.

// -------------------------------------------------------
// Java collections: one Main.java per name, picked by checksum
// -------------------------------------------------------

pub const COLLECTIONS_ARRAY_LIST: &str = include_str!("../../../../templates/java_collections/00_array_list_todo.java.hbs");
pub const COLLECTIONS_HASH_MAP: &str = include_str!("../../../../templates/java_collections/01_hash_map_grades.java.hbs");
pub const COLLECTIONS_HASH_SET: &str = include_str!("../../../../templates/java_collections/02_hash_set_unique.java.hbs");
pub const COLLECTIONS_PRIORITY_QUEUE: &str = include_str!("../../../../templates/java_collections/03_priority_queue_tasks.java.hbs");
pub const COLLECTIONS_LINKED_HASH_MAP: &str = include_str!("../../../../templates/java_collections/04_linked_hash_map_lru.java.hbs");
pub const COLLECTIONS_TREE_MAP: &str = include_str!("../../../../templates/java_collections/05_tree_map_contacts.java.hbs");
pub const COLLECTIONS_DEQUE: &str = include_str!("../../../../templates/java_collections/06_deque_history.java.hbs");
pub const COLLECTIONS_MULTI_MAP: &str = include_str!("../../../../templates/java_collections/07_multi_map.java.hbs");
pub const COLLECTIONS_FREQUENCY: &str = include_str!("../../../../templates/java_collections/08_word_frequency.java.hbs");
pub const COLLECTIONS_LINKED_LIST: &str = include_str!("../../../../templates/java_collections/09_linked_list_deque.java.hbs");
pub const COLLECTIONS_TREE_SET: &str = include_str!("../../../../templates/java_collections/10_tree_set_sorted.java.hbs");
pub const COLLECTIONS_SHUFFLE: &str = include_str!("../../../../templates/java_collections/11_shuffle_seeded.java.hbs");
pub const COLLECTIONS_STREAM_FILTER: &str = include_str!("../../../../templates/java_collections/12_stream_filter.java.hbs");
pub const COLLECTIONS_CONCURRENT_QUEUE: &str = include_str!("../../../../templates/java_collections/13_concurrent_queue.java.hbs");
pub const COLLECTIONS_README: &str = include_str!("../../../../templates/java_collections/README.md.hbs");

// -------------------------------------------------------
// Java sorts: the same three sources for every name
// -------------------------------------------------------

pub const SORTS_BUBBLE: &str = include_str!("../../../../templates/java_sorts/BubbleSort.java");
pub const SORTS_QUICK: &str = include_str!("../../../../templates/java_sorts/QuickSort.java");
pub const SORTS_MAIN: &str = include_str!("../../../../templates/java_sorts/Main.java.hbs");
pub const SORTS_README: &str = include_str!("../../../../templates/java_sorts/README.md.hbs");

// -------------------------------------------------------
// Static sites
// -------------------------------------------------------

pub const SITE_INDEX: &str = include_str!("../../../../templates/sites/index.html.hbs");
pub const SITE_STYLES: &str = include_str!("../../../../templates/sites/styles.css.hbs");
pub const SITE_APP: &str = include_str!("../../../../templates/sites/app.js");
pub const SITE_AVATAR: &str = include_str!("../../../../templates/sites/avatar.svg.hbs");
pub const SITE_README: &str = include_str!("../../../../templates/sites/README.md.hbs");
