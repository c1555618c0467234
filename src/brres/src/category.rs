//! NW4R resource category detection
//!
//! An archive's folder tags (`Textures(NW4R)`, `AnmChr(NW4R)`, ...) are
//! plain ASCII inside its bytes, so finding one anywhere in the chunk is
//! enough to say the archive holds that kind of resource.

use std::collections::BTreeSet;
use std::fmt;

use memchr::memmem;
use serde::Serialize;

use crate::chunk::Chunk;

/// Resource category an archive can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    /// Character (skeletal) animation
    AnmChr,
    /// Shape (morph) animation
    AnmShp,
    /// Scene animation
    AnmScn,
    /// Color animation
    AnmClr,
    /// Visibility animation
    AnmVis,
    Textures,
    #[serde(rename = "3DModels")]
    Models3D,
}

/// Set of categories matched in one chunk, ordered by declaration
pub type Categories = BTreeSet<Category>;

const TAGS: [(Category, &[u8]); 7] = [
    (Category::AnmChr, b"AnmChr(NW4R)"),
    (Category::AnmShp, b"AnmShp(NW4R)"),
    (Category::AnmScn, b"AnmScn(NW4R)"),
    (Category::AnmClr, b"AnmClr(NW4R)"),
    (Category::AnmVis, b"AnmVis(NW4R)"),
    (Category::Textures, b"Textures(NW4R)"),
    (Category::Models3D, b"3DModels(NW4R)"),
];

impl Category {
    pub const ALL: [Category; 7] = [
        Category::AnmChr,
        Category::AnmShp,
        Category::AnmScn,
        Category::AnmClr,
        Category::AnmVis,
        Category::Textures,
        Category::Models3D,
    ];

    /// Directory name used for this category
    pub fn name(self) -> &'static str {
        match self {
            Category::AnmChr => "AnmChr",
            Category::AnmShp => "AnmShp",
            Category::AnmScn => "AnmScn",
            Category::AnmClr => "AnmClr",
            Category::AnmVis => "AnmVis",
            Category::Textures => "Textures",
            Category::Models3D => "3DModels",
        }
    }

    /// Tag bytes searched for inside an archive
    pub fn tag(self) -> &'static [u8] {
        TAGS[self as usize].1
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reusable classifier with one prebuilt finder per tag
pub struct Classifier {
    finders: Vec<(Category, memmem::Finder<'static>)>,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            finders: TAGS
                .iter()
                .map(|&(category, tag)| (category, memmem::Finder::new(tag)))
                .collect(),
        }
    }

    /// Categories whose tag occurs within the chunk's bytes
    pub fn classify(&self, data: &[u8], chunk: &Chunk) -> Categories {
        self.classify_bytes(chunk.bytes(data))
    }

    /// Categories whose tag occurs anywhere in `bytes`
    pub fn classify_bytes(&self, bytes: &[u8]) -> Categories {
        self.finders
            .iter()
            .filter(|(_, finder)| finder.find(bytes).is_some())
            .map(|&(category, _)| category)
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot classification of a chunk
pub fn classify(data: &[u8], chunk: &Chunk) -> Categories {
    Classifier::new().classify(data, chunk)
}
