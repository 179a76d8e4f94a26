//! Template definitions and the fixed per-generator pools.

use std::num::NonZeroUsize;

use super::embedded;
use crate::error::{Result, ScaffoldError};

/// How substituted values are escaped when a template is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Source code and plain text: values are inserted verbatim.
    None,
    /// HTML and SVG: values are HTML-escaped.
    Markup,
}

/// An immutable, parameterized text body.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Stable identifier used in diagnostics, e.g. `collections/linked-list`.
    pub id: &'static str,
    /// Short description written into READMEs.
    pub label: &'static str,
    pub body: &'static str,
    pub escape: Escape,
}

impl Template {
    const fn text(id: &'static str, label: &'static str, body: &'static str) -> Self {
        Self {
            id,
            label,
            body,
            escape: Escape::None,
        }
    }

    const fn markup(id: &'static str, label: &'static str, body: &'static str) -> Self {
        Self {
            id,
            label,
            body,
            escape: Escape::Markup,
        }
    }

    /// Keys of every `{{key}}` expression in the body, in order of first appearance.
    pub fn referenced_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        let mut rest = self.body;
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                break;
            };
            let key = after[..end].trim();
            if !keys.contains(&key) {
                keys.push(key);
            }
            rest = &after[end + 2..];
        }
        keys
    }
}

/// A fixed, enumerable set of templates selected by index.
#[derive(Debug, Clone, Copy)]
pub struct TemplatePool {
    pub name: &'static str,
    templates: &'static [Template],
}

impl TemplatePool {
    pub fn templates(&self) -> &'static [Template] {
        self.templates
    }

    /// Number of templates; pools are never empty.
    pub fn size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.templates.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> Result<&'static Template> {
        self.templates
            .get(index)
            .ok_or(ScaffoldError::UnknownTemplate {
                pool: self.name,
                index,
                size: self.templates.len(),
            })
    }
}

// -------------------------------------------------------
// Java collections
// -------------------------------------------------------

const COLLECTIONS: [Template; 14] = [
    Template::text("collections/array-list", "ArrayList 待办事项", embedded::COLLECTIONS_ARRAY_LIST),
    Template::text("collections/hash-map", "HashMap 成绩登记", embedded::COLLECTIONS_HASH_MAP),
    Template::text("collections/hash-set", "HashSet 唯一性检测", embedded::COLLECTIONS_HASH_SET),
    Template::text("collections/priority-queue", "PriorityQueue 任务调度", embedded::COLLECTIONS_PRIORITY_QUEUE),
    Template::text("collections/linked-hash-map", "LinkedHashMap 伪 LRU 缓存", embedded::COLLECTIONS_LINKED_HASH_MAP),
    Template::text("collections/tree-map", "TreeMap 有序联系人", embedded::COLLECTIONS_TREE_MAP),
    Template::text("collections/deque", "Deque 命令历史", embedded::COLLECTIONS_DEQUE),
    Template::text("collections/multi-map", "MultiMap 分组", embedded::COLLECTIONS_MULTI_MAP),
    Template::text("collections/frequency", "Collections.frequency 词频统计", embedded::COLLECTIONS_FREQUENCY),
    Template::text("collections/linked-list", "LinkedList 双向队列", embedded::COLLECTIONS_LINKED_LIST),
    Template::text("collections/tree-set", "TreeSet 排序去重", embedded::COLLECTIONS_TREE_SET),
    Template::text("collections/shuffle", "Collections.shuffle 固定种子洗牌", embedded::COLLECTIONS_SHUFFLE),
    Template::text("collections/stream-filter", "Map + Stream 过滤", embedded::COLLECTIONS_STREAM_FILTER),
    Template::text("collections/concurrent-queue", "ConcurrentLinkedQueue 演示", embedded::COLLECTIONS_CONCURRENT_QUEUE),
];

/// The `Main.java` variants of the collections generator.
pub const COLLECTIONS_POOL: TemplatePool = TemplatePool {
    name: "java-collections",
    templates: &COLLECTIONS,
};

pub const COLLECTIONS_README: Template =
    Template::text("collections/readme", "README", embedded::COLLECTIONS_README);

// -------------------------------------------------------
// Java sorts
// -------------------------------------------------------

const SORTS: [Template; 1] = [Template::text("sorts/main", "排序演示驱动", embedded::SORTS_MAIN)];

/// The sorting driver; a single-entry pool.
pub const SORTS_POOL: TemplatePool = TemplatePool {
    name: "java-sorts",
    templates: &SORTS,
};

pub const SORTS_BUBBLE: Template = Template::text("sorts/bubble", "冒泡排序", embedded::SORTS_BUBBLE);
pub const SORTS_QUICK: Template = Template::text("sorts/quick", "快速排序", embedded::SORTS_QUICK);
pub const SORTS_README: Template = Template::text("sorts/readme", "README", embedded::SORTS_README);

// -------------------------------------------------------
// Static sites
// -------------------------------------------------------

const SITES: [Template; 1] = [Template::markup("sites/index", "主页", embedded::SITE_INDEX)];

/// The site home page; a single-entry pool.
pub const SITES_POOL: TemplatePool = TemplatePool {
    name: "sites",
    templates: &SITES,
};

pub const SITE_STYLES: Template = Template::text("sites/styles", "样式", embedded::SITE_STYLES);
pub const SITE_APP: Template = Template::text("sites/app", "前端交互", embedded::SITE_APP);
pub const SITE_AVATAR: Template = Template::markup("sites/avatar", "占位头像", embedded::SITE_AVATAR);
pub const SITE_README: Template = Template::text("sites/readme", "README", embedded::SITE_README);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::placeholder::Placeholder;

    fn all_templates() -> Vec<Template> {
        let mut all = Vec::new();
        for pool in [COLLECTIONS_POOL, SORTS_POOL, SITES_POOL] {
            all.extend_from_slice(pool.templates());
        }
        all.extend([
            COLLECTIONS_README,
            SORTS_BUBBLE,
            SORTS_QUICK,
            SORTS_README,
            SITE_STYLES,
            SITE_APP,
            SITE_AVATAR,
            SITE_README,
        ]);
        all
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(COLLECTIONS_POOL.size().get(), 14);
        assert_eq!(SORTS_POOL.size().get(), 1);
        assert_eq!(SITES_POOL.size().get(), 1);
    }

    #[test]
    fn test_collections_pool_order() {
        let ids: Vec<&str> = COLLECTIONS_POOL.templates().iter().map(|t| t.id).collect();
        assert_eq!(ids[4], "collections/linked-hash-map");
        assert_eq!(ids[9], "collections/linked-list");
        assert_eq!(ids[10], "collections/tree-set");
        assert!(COLLECTIONS_POOL.get(9).unwrap().body.contains("LinkedList<Integer>"));
        assert!(COLLECTIONS_POOL.get(10).unwrap().body.contains("TreeSet"));
    }

    #[test]
    fn test_get_out_of_range() {
        let err = COLLECTIONS_POOL.get(14).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::UnknownTemplate { index: 14, size: 14, .. }
        ));
    }

    #[test]
    fn test_every_key_is_a_known_placeholder() {
        for tmpl in all_templates() {
            for key in tmpl.referenced_keys() {
                assert!(
                    Placeholder::from_key(key).is_some(),
                    "{} references unknown key '{key}'",
                    tmpl.id
                );
            }
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let all = all_templates();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_referenced_keys_dedups_in_order() {
        let tmpl = Template::text("t", "t", "{{b}} {{ a }} {{b}}");
        assert_eq!(tmpl.referenced_keys(), vec!["b", "a"]);
    }

    #[test]
    fn test_static_sources_have_no_keys() {
        assert!(SORTS_BUBBLE.referenced_keys().is_empty());
        assert!(SORTS_QUICK.referenced_keys().is_empty());
        assert!(SITE_APP.referenced_keys().is_empty());
    }

    #[test]
    fn test_only_shuffle_uses_seed() {
        let seeded: Vec<&str> = COLLECTIONS_POOL
            .templates()
            .iter()
            .filter(|t| t.referenced_keys().contains(&"seed"))
            .map(|t| t.id)
            .collect();
        assert_eq!(seeded, vec!["collections/shuffle"]);
    }
}
