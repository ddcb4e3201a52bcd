//! Font registry: family name, human label and one file per weight.
//!
//! Families with no weights (the default, Vazirmatn) are served from Google
//! Fonts by the document shell and need no `@font-face` rules.

use serde::Serialize;

/// Family used when a block does not name one
pub const DEFAULT_FONT_FAMILY: &str = "Vazirmatn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontFace {
    pub weight: u16,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontFamily {
    pub name: &'static str,
    pub label: &'static str,
    pub faces: &'static [FontFace],
}

pub static FONT_FAMILIES: &[FontFamily] = &[
    FontFamily {
        name: "Vazirmatn",
        label: "وزیرمتن",
        faces: &[],
    },
    FontFamily {
        name: "Shabnam",
        label: "شبنم",
        faces: &[
            FontFace {
                weight: 300,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/shabnam-font@v5.0.1/dist/Shabnam-Light.woff2",
            },
            FontFace {
                weight: 400,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/shabnam-font@v5.0.1/dist/Shabnam.woff2",
            },
            FontFace {
                weight: 700,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/shabnam-font@v5.0.1/dist/Shabnam-Bold.woff2",
            },
        ],
    },
    FontFamily {
        name: "Sahel",
        label: "ساحل",
        faces: &[
            FontFace {
                weight: 400,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/sahel-font@v3.4.0/dist/Sahel.woff2",
            },
            FontFace {
                weight: 600,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/sahel-font@v3.4.0/dist/Sahel-SemiBold.woff2",
            },
            FontFace {
                weight: 700,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/sahel-font@v3.4.0/dist/Sahel-Bold.woff2",
            },
            FontFace {
                weight: 900,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/sahel-font@v3.4.0/dist/Sahel-Black.woff2",
            },
        ],
    },
    FontFamily {
        name: "Samim",
        label: "صمیم",
        faces: &[
            FontFace {
                weight: 400,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/samim-font@v4.0.5/dist/Samim.woff",
            },
            FontFace {
                weight: 500,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/samim-font@v4.0.5/dist/Samim-Medium.woff",
            },
            FontFace {
                weight: 700,
                url: "https://cdn.jsdelivr.net/gh/rastikerdar/samim-font@v4.0.5/dist/Samim-Bold.woff",
            },
        ],
    },
    FontFamily {
        name: "Tanha",
        label: "تنها",
        faces: &[FontFace {
            weight: 400,
            url: "https://cdn.jsdelivr.net/gh/rastikerdar/tanha-font@v0.10.0/dist/Tanha.ttf",
        }],
    },
];

pub fn find_font(name: &str) -> Option<&'static FontFamily> {
    FONT_FAMILIES.iter().find(|family| family.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_family_has_no_faces() {
        let family = find_font(DEFAULT_FONT_FAMILY).unwrap();
        assert!(family.faces.is_empty());
    }

    #[test]
    fn test_family_names_are_unique() {
        for (i, family) in FONT_FAMILIES.iter().enumerate() {
            assert!(FONT_FAMILIES[i + 1..].iter().all(|other| other.name != family.name));
        }
    }
}
