//! Named fills for headers in pattern mode.

pub struct HeaderPattern {
    pub id: &'static str,
    pub name: &'static str,
    /// Background declarations, ready to inline
    pub css: &'static str,
}

pub static HEADER_PATTERNS: &[HeaderPattern] = &[
    HeaderPattern {
        id: "waves",
        name: "موج",
        css: "background-color: #2563eb; background-image: radial-gradient(circle at 100% 50%, transparent 20%, rgba(255, 255, 255, 0.3) 21%, rgba(255, 255, 255, 0.3) 34%, transparent 35%, transparent), radial-gradient(circle at 0% 50%, transparent 20%, rgba(255, 255, 255, 0.3) 21%, rgba(255, 255, 255, 0.3) 34%, transparent 35%, transparent); background-size: 60px 120px;",
    },
    HeaderPattern {
        id: "dots",
        name: "نقطه‌ای",
        css: "background-color: #111827; background-image: radial-gradient(rgba(255, 255, 255, 0.35) 2px, transparent 2px); background-size: 18px 18px;",
    },
    HeaderPattern {
        id: "grid",
        name: "شطرنجی خطی",
        css: "background-color: #0f766e; background-image: linear-gradient(rgba(255, 255, 255, 0.2) 1px, transparent 1px), linear-gradient(90deg, rgba(255, 255, 255, 0.2) 1px, transparent 1px); background-size: 24px 24px;",
    },
    HeaderPattern {
        id: "diagonal",
        name: "مورب",
        css: "background-color: #7c3aed; background-image: repeating-linear-gradient(45deg, rgba(255, 255, 255, 0.15) 0, rgba(255, 255, 255, 0.15) 10px, transparent 10px, transparent 20px);",
    },
    HeaderPattern {
        id: "checker",
        name: "شطرنجی",
        css: "background-color: #f59e0b; background-image: conic-gradient(rgba(255, 255, 255, 0.25) 90deg, transparent 90deg 180deg, rgba(255, 255, 255, 0.25) 180deg 270deg, transparent 270deg); background-size: 32px 32px;",
    },
    HeaderPattern {
        id: "sunset",
        name: "غروب",
        css: "background-color: #f97316; background-image: linear-gradient(135deg, #f97316 0%, #db2777 50%, #7c3aed 100%);",
    },
];

pub fn find_pattern(id: &str) -> Option<&'static HeaderPattern> {
    HEADER_PATTERNS.iter().find(|pattern| pattern.id == id)
}
