use std::fmt;
use std::path::Path;

/// Source languages recognised by extension.
///
/// Ordering follows declaration order and is only used to keep per-language
/// maps stable; output documents are keyed by [`SourceLanguage::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceLanguage {
    C,
    Cpp,
    Assembly,
    Python,
    Bash,
    Lua,
    Perl,
}

impl SourceLanguage {
    pub const ALL: [SourceLanguage; 7] = [
        SourceLanguage::C,
        SourceLanguage::Cpp,
        SourceLanguage::Assembly,
        SourceLanguage::Python,
        SourceLanguage::Bash,
        SourceLanguage::Lua,
        SourceLanguage::Perl,
    ];

    /// Classify an extension (without the leading dot). Matching is
    /// case-sensitive: `S` is assembly, `s` is not registered.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "c" | "h" => Some(SourceLanguage::C),
            "cpp" | "hpp" | "cppm" => Some(SourceLanguage::Cpp),
            "S" => Some(SourceLanguage::Assembly),
            "py" => Some(SourceLanguage::Python),
            "sh" => Some(SourceLanguage::Bash),
            "lua" => Some(SourceLanguage::Lua),
            "pl" | "pm" => Some(SourceLanguage::Perl),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Stable identifier used as the key in output documents.
    pub fn id(self) -> &'static str {
        match self {
            SourceLanguage::C => "c",
            SourceLanguage::Cpp => "cpp",
            SourceLanguage::Assembly => "asm",
            SourceLanguage::Python => "python",
            SourceLanguage::Bash => "bash",
            SourceLanguage::Lua => "lua",
            SourceLanguage::Perl => "perl",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            SourceLanguage::C => &["c", "h"],
            SourceLanguage::Cpp => &["cpp", "hpp", "cppm"],
            SourceLanguage::Assembly => &["S"],
            SourceLanguage::Python => &["py"],
            SourceLanguage::Bash => &["sh"],
            SourceLanguage::Lua => &["lua"],
            SourceLanguage::Perl => &["pl", "pm"],
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
