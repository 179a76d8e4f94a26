//! The fixed, ordered list of project names shared by every generator.

use std::collections::HashSet;

use crate::error::{Result, ScaffoldError};

/// Built-in names, in the order projects are generated and archived.
pub const NAMES: [&str; 42] = [
    "liting",
    "ganrourou",
    "panjincheng",
    "huhao",
    "wangxinyu",
    "tanziqiang",
    "zhangxinghuo",
    "tanjierong",
    "fanli",
    "laishuanggui",
    "hehao",
    "liujunli",
    "zhongyupeng",
    "menghangxu",
    "xubo",
    "yuzhuokun",
    "shijiaxue",
    "zouyuxiang",
    "wuhan",
    "zhangyixin",
    "liuhongcheng",
    "zhouziyi",
    "renran",
    "zhengjiezhong",
    "chengyanping",
    "luoyi",
    "zhengronglei",
    "hemeilin",
    "yanghaoran",
    "dengxiaoyan",
    "wangjingsheng",
    "liaojiayu",
    "zhangjingxi",
    "zhangjieyi",
    "tangqiang",
    "huangjiajun",
    "hutao",
    "yangxiling",
    "xieyucan",
    "luoyifeng",
    "guwencai",
    "caichunmei",
];

/// An ordered set of unique, non-empty names.
///
/// Order matters only for the archive's enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRegistry {
    names: Vec<String>,
}

impl NameRegistry {
    /// Validate and wrap a list of names.
    ///
    /// Names become folder names, so path separators and `.`/`..` are rejected along
    /// with empty and duplicated entries.
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.is_empty() {
                return Err(ScaffoldError::InvalidRegistry("empty name".into()));
            }
            if !is_plain_file_name(name) {
                return Err(ScaffoldError::InvalidRegistry(format!(
                    "'{name}' is not a valid folder name"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ScaffoldError::InvalidRegistry(format!(
                    "duplicate name '{name}'"
                )));
            }
        }
        Ok(Self { names })
    }

    /// The built-in 42-name registry.
    pub fn builtin() -> Self {
        Self {
            names: NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A single, non-empty path component: not `.`/`..` and free of separators.
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
