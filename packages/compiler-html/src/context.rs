use crate::compiler::CompileOptions;

/// Output buffer with optional indentation
pub(crate) struct Context {
    pretty: bool,
    indent: String,
    depth: usize,
    buffer: String,
}

impl Context {
    pub fn new(options: &CompileOptions) -> Self {
        Self {
            pretty: options.pretty,
            indent: options.indent.clone(),
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if self.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.pretty {
            self.add("\n");
        }
    }

    /// Add a line and indent what follows
    pub fn open(&mut self, text: &str) {
        self.add_line(text);
        self.indent();
    }

    /// Dedent and add a closing line
    pub fn close(&mut self, text: &str) {
        self.dedent();
        self.add_line(text);
    }

    /// Add an already rendered fragment, re-indenting each of its lines
    pub fn add_fragment(&mut self, fragment: &str) {
        for line in fragment.lines() {
            self.add_line(line);
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent);
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn get_output(self) -> String {
        self.buffer
    }
}

/// Escape text and attribute values. Newlines become character references
/// so a fragment never spans lines because of user text.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape a double-quoted attribute value. Single quotes stay readable so
/// font stacks like `'Vazirmatn', sans-serif` survive untouched.
pub(crate) fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("line one\r\nline two"), "line one&#10;line two");
    }

    #[test]
    fn test_escape_attr_keeps_single_quotes() {
        assert_eq!(
            escape_attr("font-family: 'Sahel'; a=\"1&2\""),
            "font-family: 'Sahel'; a=&quot;1&amp;2&quot;"
        );
    }

    #[test]
    fn test_fragment_is_reindented() {
        let mut ctx = Context::new(&CompileOptions::default());
        ctx.open("<div>");
        ctx.add_fragment("<p>\n  text\n</p>");
        ctx.close("</div>");

        assert_eq!(ctx.get_output(), "<div>\n  <p>\n    text\n  </p>\n</div>\n");
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let options = CompileOptions {
            pretty: false,
            ..CompileOptions::default()
        };
        let mut ctx = Context::new(&options);
        ctx.open("<div>");
        ctx.add_fragment("<p>\ntext\n</p>");
        ctx.close("</div>");

        assert_eq!(ctx.get_output(), "<div><p>text</p></div>");
    }
}
