use mailcraft_blocks::{FontFamily, FONT_FAMILIES};

/// `@font-face` rules for every registered weight of every family
pub fn font_face_css() -> String {
    font_face_css_for(FONT_FAMILIES)
}

pub fn font_face_css_for(families: &[FontFamily]) -> String {
    let mut css = String::new();

    for family in families {
        for face in family.faces {
            css.push_str(&format!(
                "@font-face {{ font-family: '{}'; src: url('{}') format('{}'); font-weight: {}; font-style: normal; font-display: swap; }}\n",
                family.name,
                face.url,
                font_format(face.url),
                face.weight
            ));
        }
    }

    css
}

fn font_format(url: &str) -> &'static str {
    let path = url.split(&['?', '#'][..]).next().unwrap_or(url);
    if path.ends_with(".woff2") {
        "woff2"
    } else if path.ends_with(".woff") {
        "woff"
    } else if path.ends_with(".otf") {
        "opentype"
    } else {
        "truetype"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_blocks::FontFace;

    #[test]
    fn test_one_rule_per_registered_weight() {
        let css = font_face_css();
        let expected: usize = FONT_FAMILIES.iter().map(|family| family.faces.len()).sum();

        assert_eq!(css.matches("@font-face").count(), expected);
        assert_eq!(css.matches("font-display: swap").count(), expected);
    }

    #[test]
    fn test_families_without_weights_emit_nothing() {
        let families = [FontFamily {
            name: "Vazirmatn",
            label: "وزیرمتن",
            faces: &[],
        }];
        assert_eq!(font_face_css_for(&families), "");
        assert!(!font_face_css().contains("'Vazirmatn'"));
    }

    #[test]
    fn test_rule_shape() {
        let families = [FontFamily {
            name: "Demo",
            label: "Demo",
            faces: &[FontFace {
                weight: 700,
                url: "https://cdn.example.com/Demo-Bold.woff?v=2",
            }],
        }];

        assert_eq!(
            font_face_css_for(&families),
            "@font-face { font-family: 'Demo'; src: url('https://cdn.example.com/Demo-Bold.woff?v=2') format('woff'); font-weight: 700; font-style: normal; font-display: swap; }\n"
        );
    }
}
