use crate::context::{escape_html, Context};
use crate::render::{font_stack, render_block};
use chrono::{DateTime, Utc};
use mailcraft_blocks::{Block, GlobalSettings};
use mailcraft_compiler_css::{background_css, font_face_css, format_number, pattern_css};
use tracing::{info, instrument};

const GOOGLE_FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Vazirmatn:wght@100..900&amp;display=swap";

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Document `<title>`
    pub title: String,
    /// Reference time for countdown blocks; the wall clock when unset
    pub now: Option<DateTime<Utc>>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Email".to_string(),
            now: None,
        }
    }
}

/// Compile blocks into a complete email document with default options.
/// Missing settings fall back to `GlobalSettings::default()`.
pub fn compile(blocks: &[Block], settings: Option<&GlobalSettings>) -> String {
    let defaults = GlobalSettings::default();
    compile_to_html(
        blocks,
        settings.unwrap_or(&defaults),
        &CompileOptions::default(),
    )
}

/// Compile blocks into a complete email document
#[instrument(skip(blocks, settings, options), fields(blocks = blocks.len()))]
pub fn compile_to_html(
    blocks: &[Block],
    settings: &GlobalSettings,
    options: &CompileOptions,
) -> String {
    let now = options.now.unwrap_or_else(Utc::now);
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.open("<html lang=\"fa\" dir=\"rtl\">");

    compile_head(settings, options, &mut ctx);

    ctx.open("<body>");
    if settings.noise.enabled {
        ctx.add_line("<div class=\"noise-overlay\"></div>");
    }
    ctx.open("<div class=\"email-container\">");

    for block in blocks {
        ctx.add_fragment(&render_block(block, now, options));
    }

    ctx.close("</div>");
    ctx.close("</body>");
    ctx.close("</html>");

    let html = ctx.get_output();
    info!(bytes = html.len(), "Compiled email");
    html
}

fn compile_head(settings: &GlobalSettings, options: &CompileOptions, ctx: &mut Context) {
    ctx.open("<head>");

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line("<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&options.title)));
    ctx.add_line(&format!(
        "<link href=\"{}\" rel=\"stylesheet\">",
        GOOGLE_FONTS_URL
    ));

    // Outlook ignores web fonts and needs an explicit fallback
    ctx.add_line("<!--[if mso]>");
    ctx.add_line("<style>body, table, td, div, p, a { font-family: Tahoma, Arial, sans-serif !important; }</style>");
    ctx.add_line("<![endif]-->");

    ctx.open("<style>");
    ctx.add_fragment(&font_face_css());
    ctx.add_fragment(&document_css(settings));
    ctx.close("</style>");

    ctx.close("</head>");
}

fn document_css(settings: &GlobalSettings) -> String {
    let pattern = pattern_css(settings);
    let pattern = if pattern.is_empty() {
        String::new()
    } else {
        format!(" {}", pattern)
    };

    let mut css = format!(
        "body {{ margin: 0; padding: 0; background: {};{} font-family: {}; }}\n",
        background_css(settings),
        pattern,
        font_stack("")
    );
    css.push_str(&format!(
        ".email-container {{ max-width: {}; margin: 0 auto; position: relative; z-index: 1; }}\n",
        settings.width
    ));
    css.push_str("img { border: 0; outline: none; text-decoration: none; }\n");

    if settings.noise.enabled {
        css.push_str(&noise_css(settings));
    }

    css
}

/// Full-viewport SVG turbulence laid over the canvas
fn noise_css(settings: &GlobalSettings) -> String {
    let noise = &settings.noise;
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='200' height='200'><filter id='noise'><feTurbulence type='fractalNoise' baseFrequency='{}' numOctaves='3' stitchTiles='stitch'/></filter><rect width='100%' height='100%' filter='url(%23noise)'/></svg>",
        format_number(noise.scale)
    );

    format!(
        ".noise-overlay {{ position: fixed; top: 0; right: 0; bottom: 0; left: 0; pointer-events: none; z-index: 0; opacity: {}; mix-blend-mode: {}; background-image: url(\"data:image/svg+xml;utf8,{}\"); }}\n",
        format_number(noise.amount),
        noise.blend_mode,
        svg
    )
}
