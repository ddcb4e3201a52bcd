//! # Block Rendering
//!
//! One function per block type. Each block renders into its own buffer from
//! nothing but its own content and styles, so the document is a plain map
//! over the block list and no block can influence another's markup.

use crate::compiler::CompileOptions;
use crate::context::{escape_attr, escape_html, Context};
use crate::countdown::time_left;
use chrono::{DateTime, Utc};
use mailcraft_blocks::*;
use mailcraft_compiler_css::{
    border, box_shadow, filter_value, format_number, text_shadow, text_stroke, Declarations,
};
use tracing::debug;

/// Outlook-only table opener around layouts that need inline-block
pub const MSO_TABLE_OPEN: &str = r#"<!--[if mso]><table role="presentation" width="100%" cellpadding="0" cellspacing="0" border="0"><tr><td align="center"><![endif]-->"#;
pub const MSO_TABLE_CLOSE: &str = "<!--[if mso]></td></tr></table><![endif]-->";

/// Render one block to an HTML fragment. `now` drives the countdown block.
pub fn render_block(block: &Block, now: DateTime<Utc>, options: &CompileOptions) -> String {
    debug!(block_id = %block.id, block_type = %block.block_type(), "Rendering block");

    let mut ctx = Context::new(options);
    match &block.body {
        BlockBody::Header { content, styles } => render_header(&mut ctx, content, styles),
        BlockBody::Text { content, styles } => render_text(&mut ctx, content, styles),
        BlockBody::Button { content, styles } => render_button(&mut ctx, content, styles),
        BlockBody::Image { content, styles } => render_image(&mut ctx, content, styles),
        BlockBody::ProductGrid { content, styles } => {
            render_product_grid(&mut ctx, content, styles)
        }
        BlockBody::Countdown { content, styles } => {
            render_countdown(&mut ctx, content, styles, now)
        }
        BlockBody::Footer { content, styles } => render_footer(&mut ctx, content, styles),
        BlockBody::Spacer { content, styles } => render_spacer(&mut ctx, content, styles),
    }
    ctx.get_output()
}

fn px(value: u32) -> String {
    format!("{}px", value)
}

/// Font stack with the block's family first
pub(crate) fn font_stack(family: &str) -> String {
    let family = match family.trim() {
        "" => DEFAULT_FONT_FAMILY,
        name => name,
    };
    format!("'{}', Tahoma, Arial, sans-serif", family)
}

fn style_attr(declarations: &Declarations) -> String {
    format!(" style=\"{}\"", escape_attr(&declarations.to_css()))
}

fn link_or_hash(link: &str) -> &str {
    if link.trim().is_empty() {
        "#"
    } else {
        link
    }
}

fn anchor_open(link: &str, declarations: Declarations) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\"{}>",
        escape_attr(link),
        style_attr(&declarations)
    )
}

/// `200px` → 200, for the `width` attribute Outlook reads
fn pixel_width(value: &str) -> Option<u32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Outer row of a block: background, padding and alignment
fn open_row(ctx: &mut Context, block_type: BlockType, declarations: Declarations) {
    ctx.open(&format!(
        "<div class=\"email-block email-{}\"{}>",
        block_type,
        style_attr(&declarations)
    ));
}

fn row(background: &str, padding: &str, align: &str) -> Declarations {
    Declarations::new()
        .set("background-color", background)
        .set("padding", padding)
        .set("text-align", align)
}

/// Sizing and effects shared by header and image pictures
struct Picture<'a> {
    src: &'a str,
    alt: &'a str,
    width: &'a str,
    height: &'a str,
    object_fit: &'a str,
    border_radius: u32,
    border: &'a Border,
    drop_shadow: &'a DropShadow,
    filter: &'a Filter,
}

impl Picture<'_> {
    fn to_html(&self) -> String {
        let declarations = Declarations::new()
            .set("display", "inline-block")
            .set("width", self.width)
            .set("height", self.height)
            .set("max-width", "100%")
            .set("object-fit", self.object_fit)
            .set("border-radius", px(self.border_radius))
            .set("filter", filter_value(self.filter, self.drop_shadow))
            .set_opt("border", border(self.border));

        let width_attr = pixel_width(self.width)
            .map(|width| format!(" width=\"{}\"", width))
            .unwrap_or_default();

        format!(
            "<img src=\"{}\" alt=\"{}\"{}{} />",
            escape_attr(self.src),
            escape_attr(self.alt),
            width_attr,
            style_attr(&declarations)
        )
    }
}

fn render_header(ctx: &mut Context, content: &HeaderContent, styles: &HeaderStyles) {
    open_row(
        ctx,
        BlockType::Header,
        row(&styles.background_color, &styles.padding, &styles.align),
    );

    let linked = !content.link.trim().is_empty();
    if linked {
        ctx.open(&anchor_open(
            &content.link,
            Declarations::new()
                .set("display", "block")
                .set("text-decoration", "none"),
        ));
    }

    let visual = match content.source_type {
        HeaderSource::Pattern => {
            let fill = find_pattern(&content.pattern_id)
                .map(|pattern| pattern.css)
                .unwrap_or_default();
            let declarations = Declarations::new()
                .set("display", "block")
                .set("width", &styles.width)
                .set("height", &styles.height)
                .set("margin", "0 auto")
                .set("border-radius", px(styles.border_radius))
                .set_opt("border", border(&styles.border))
                .set_opt("box-shadow", box_shadow(&styles.drop_shadow));
            let css = format!("{} {}", fill, declarations.to_css());

            format!(
                "<div role=\"img\" aria-label=\"{}\" style=\"{}\"></div>",
                escape_attr(&content.alt),
                escape_attr(css.trim())
            )
        }
        HeaderSource::Url | HeaderSource::Upload => Picture {
            src: &content.logo_url,
            alt: &content.alt,
            width: &styles.width,
            height: &styles.height,
            object_fit: &styles.object_fit,
            border_radius: styles.border_radius,
            border: &styles.border,
            drop_shadow: &styles.drop_shadow,
            filter: &styles.filter,
        }
        .to_html(),
    };
    ctx.add_line(&visual);

    if linked {
        ctx.close("</a>");
    }
    ctx.close("</div>");
}

fn render_text(ctx: &mut Context, content: &TextContent, styles: &TextStyles) {
    open_row(
        ctx,
        BlockType::Text,
        row(&styles.background_color, &styles.padding, &styles.align),
    );

    let linked = !content.link.trim().is_empty();
    if linked {
        ctx.open(&anchor_open(
            &content.link,
            Declarations::new()
                .set("display", "block")
                .set("color", "inherit")
                .set("text-decoration", "none"),
        ));
    }

    let declarations = Declarations::new()
        .set("margin", "0")
        .set("white-space", "pre-wrap")
        .set("color", &styles.color)
        .set("font-family", font_stack(&styles.font_family))
        .set("font-size", px(styles.font_size))
        .set("font-weight", &styles.font_weight)
        .set("line-height", format_number(styles.line_height))
        .set("font-style", &styles.font_style)
        .set("text-decoration", &styles.text_decoration)
        .set_opt("text-shadow", text_shadow(&styles.drop_shadow))
        .set_opt("-webkit-text-stroke", text_stroke(&styles.stroke));

    ctx.add_line(&format!(
        "<div{}>{}</div>",
        style_attr(&declarations),
        escape_html(&content.text)
    ));

    if linked {
        ctx.close("</a>");
    }
    ctx.close("</div>");
}

/// Inline SVG for a registered icon, spaced away from the label
fn icon_svg(name: &str, position: IconPosition, size: u32) -> Option<String> {
    let path = icon_path(name)?;
    let margin = match position {
        IconPosition::Right => "margin-left",
        IconPosition::Left => "margin-right",
    };

    Some(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\" style=\"vertical-align: middle; {margin}: 8px;\"><path d=\"{path}\" /></svg>",
        size = size,
        margin = margin,
        path = path
    ))
}

fn render_button(ctx: &mut Context, content: &ButtonContent, styles: &ButtonStyles) {
    open_row(
        ctx,
        BlockType::Button,
        row(&styles.background_color, &styles.padding, &styles.align),
    );

    let gradient = &styles.button_gradient;
    let declarations = Declarations::new().set("display", "inline-block");
    let declarations = if gradient.enabled {
        let angle = if gradient.direction == "to right" {
            "90deg"
        } else {
            "180deg"
        };
        declarations
            .set("background-color", &gradient.from)
            .set(
                "background-image",
                format!("linear-gradient({}, {}, {})", angle, gradient.from, gradient.to),
            )
    } else {
        declarations.set("background-color", &styles.button_color)
    };

    let declarations = declarations
        .set("color", &styles.text_color)
        .set("padding", &styles.button_padding)
        .set("width", &styles.width)
        .set("border-radius", px(styles.border_radius))
        .set("font-family", font_stack(&styles.font_family))
        .set("font-size", px(styles.font_size))
        .set("font-weight", &styles.font_weight)
        .set("line-height", "1.5")
        .set("text-align", "center")
        .set("text-decoration", "none")
        .set_opt("border", border(&styles.border))
        .set_opt("box-shadow", box_shadow(&styles.drop_shadow));

    let label = escape_html(&content.text);
    let inner = match icon_svg(&content.icon, content.icon_position, styles.font_size) {
        Some(svg) => match content.icon_position {
            IconPosition::Right => format!("{}{}", svg, label),
            IconPosition::Left => format!("{}{}", label, svg),
        },
        None => label,
    };

    ctx.add_line(&format!(
        "{}{}</a>",
        anchor_open(link_or_hash(&content.link), declarations),
        inner
    ));
    ctx.close("</div>");
}

fn render_image(ctx: &mut Context, content: &ImageContent, styles: &ImageStyles) {
    open_row(
        ctx,
        BlockType::Image,
        row(&styles.background_color, &styles.padding, &styles.align),
    );

    ctx.open(&anchor_open(
        link_or_hash(&content.link),
        Declarations::new()
            .set("display", "inline-block")
            .set("text-decoration", "none"),
    ));
    ctx.add_line(
        &Picture {
            src: &content.image_url,
            alt: &content.alt,
            width: &styles.width,
            height: &styles.height,
            object_fit: &styles.object_fit,
            border_radius: styles.border_radius,
            border: &styles.border,
            drop_shadow: &styles.drop_shadow,
            filter: &styles.filter,
        }
        .to_html(),
    );
    ctx.close("</a>");
    ctx.close("</div>");
}

fn render_product_grid(ctx: &mut Context, content: &ProductGridContent, styles: &ProductGridStyles) {
    open_row(
        ctx,
        BlockType::ProductGrid,
        Declarations::new()
            .set("background-color", &styles.background_color)
            .set("padding", &styles.padding),
    );
    ctx.add_line(MSO_TABLE_OPEN);
    ctx.open(&format!(
        "<div{}>",
        style_attr(
            &Declarations::new()
                .set("font-size", "0")
                .set("text-align", "center")
        )
    ));

    let columns = content.columns.max(1);
    let cell = Declarations::new()
        .set("display", "inline-block")
        .set("vertical-align", "top")
        .set("width", format!("{}%", format_number(100.0 / f64::from(columns))))
        .set("box-sizing", "border-box")
        .set("padding", format!("{}px", format_number(f64::from(styles.gap) / 2.0)));

    let card = &styles.card;
    let card_box = Declarations::new()
        .set("height", "100%")
        .set("box-sizing", "border-box")
        .set("background-color", &card.background_color)
        .set("padding", px(card.padding))
        .set("border-radius", px(card.border_radius))
        .set_opt("border", border(&card.border))
        .set_opt("box-shadow", box_shadow(&card.drop_shadow));

    let image = &styles.image;
    let picture = Declarations::new()
        .set("display", "block")
        .set("width", "100%")
        .set("height", "auto")
        .set("aspect-ratio", &image.aspect_ratio)
        .set("object-fit", &image.object_fit)
        .set("border-radius", px(image.border_radius))
        .set("filter", filter_value(&image.filter, &image.drop_shadow))
        .set_opt("border", border(&image.border));

    let text = &styles.text;
    let caption = Declarations::new()
        .set("margin", "8px 0 0")
        .set("color", &text.color)
        .set("font-family", font_stack(&text.font_family))
        .set("font-size", px(text.font_size))
        .set("font-weight", &text.font_weight)
        .set("text-align", &text.align)
        .set("line-height", format_number(text.line_height));

    for item in &content.items {
        ctx.open(&format!("<div{}>", style_attr(&cell)));
        ctx.open(&format!("<div{}>", style_attr(&card_box)));
        ctx.open(&anchor_open(
            link_or_hash(&item.link),
            Declarations::new()
                .set("display", "block")
                .set("text-decoration", "none"),
        ));
        ctx.add_line(&format!(
            "<img src=\"{}\" alt=\"{}\"{} />",
            escape_attr(&item.image_url),
            escape_attr(&item.alt),
            style_attr(&picture)
        ));
        if text.show && !item.text.is_empty() {
            ctx.add_line(&format!(
                "<div{}>{}</div>",
                style_attr(&caption),
                escape_html(&item.text)
            ));
        }
        ctx.close("</a>");
        ctx.close("</div>");
        ctx.close("</div>");
    }

    ctx.close("</div>");
    ctx.add_line(MSO_TABLE_CLOSE);
    ctx.close("</div>");
}

fn render_countdown(
    ctx: &mut Context,
    content: &CountdownContent,
    styles: &CountdownStyles,
    now: DateTime<Utc>,
) {
    let left = time_left(&content.target_date, &content.target_time, &content.timezone, now);

    open_row(
        ctx,
        BlockType::Countdown,
        row(&styles.background_color, &styles.padding, &styles.align),
    );
    ctx.add_line(MSO_TABLE_OPEN);

    let unit = Declarations::new()
        .set("display", "inline-block")
        .set("vertical-align", "top")
        .set("margin", format!("0 {}px", format_number(f64::from(styles.gap) / 2.0)))
        .set("text-align", "center");
    let digits = Declarations::new()
        .set("width", px(styles.box_size))
        .set("height", px(styles.box_size))
        .set("line-height", px(styles.box_size))
        .set("margin", "0 auto")
        .set("background-color", &styles.box_color)
        .set("color", &styles.text_color)
        .set("border-radius", px(styles.border_radius))
        .set("font-family", font_stack(&styles.font_family))
        .set("font-size", px(styles.font_size))
        .set("font-weight", "700")
        .set_opt("border", border(&styles.border))
        .set_opt("box-shadow", box_shadow(&styles.drop_shadow));
    let label = Declarations::new()
        .set("margin-top", "6px")
        .set("color", &styles.label_color)
        .set("font-family", font_stack(&styles.font_family))
        .set("font-size", px(styles.label_size));

    let cells = [
        (left.days, &content.labels.days),
        (left.hours, &content.labels.hours),
        (left.minutes, &content.labels.minutes),
        (left.seconds, &content.labels.seconds),
    ];

    for (value, caption) in cells {
        ctx.open(&format!("<div{}>", style_attr(&unit)));
        ctx.add_line(&format!("<div{}>{:02}</div>", style_attr(&digits), value));
        ctx.add_line(&format!(
            "<div{}>{}</div>",
            style_attr(&label),
            escape_html(caption)
        ));
        ctx.close("</div>");
    }

    ctx.add_line(MSO_TABLE_CLOSE);
    ctx.close("</div>");
}

fn render_footer(ctx: &mut Context, content: &FooterContent, styles: &FooterStyles) {
    open_row(
        ctx,
        BlockType::Footer,
        row(&styles.background_color, &styles.padding, &styles.align)
            .set("color", &styles.color)
            .set("font-family", font_stack(&styles.font_family))
            .set("font-size", px(styles.font_size))
            .set("line-height", format_number(styles.line_height)),
    );

    let text = escape_html(&content.text);
    let copyright = if content.link.trim().is_empty() {
        text
    } else {
        format!(
            "{}{}</a>",
            anchor_open(
                &content.link,
                Declarations::new()
                    .set("color", "inherit")
                    .set("text-decoration", "none")
            ),
            text
        )
    };
    ctx.add_line(&format!("<div style=\"margin: 0 0 8px;\">{}</div>", copyright));

    let unsubscribe_size = styles.font_size.saturating_sub(2).max(10);
    ctx.add_line(&format!(
        "{}{}</a>",
        anchor_open(
            link_or_hash(&content.unsubscribe_link),
            Declarations::new()
                .set("color", &styles.link_color)
                .set("font-size", px(unsubscribe_size))
                .set("text-decoration", "underline")
        ),
        escape_html(&content.unsubscribe_text)
    ));

    ctx.close("</div>");
}

fn render_spacer(ctx: &mut Context, content: &SpacerContent, styles: &SpacerStyles) {
    let spacer = format!(
        "<div class=\"email-block email-{}\"{}></div>",
        BlockType::Spacer,
        style_attr(
            &Declarations::new()
                .set("height", px(styles.height))
                .set("line-height", px(styles.height))
                .set("font-size", "0")
                .set("background-color", &styles.background_color)
        )
    );

    if content.link.trim().is_empty() {
        ctx.add_line(&spacer);
    } else {
        ctx.open(&anchor_open(
            &content.link,
            Declarations::new()
                .set("display", "block")
                .set("text-decoration", "none"),
        ));
        ctx.add_line(&spacer);
        ctx.close("</a>");
    }
}
