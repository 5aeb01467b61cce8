use std::fmt::Write;

use crate::lexer::tokens::{Token, TokenClass};

use super::{palette::Palette, Renderer};

const BASE_STYLE: &str = r#"        body { font-family: 'Inter', monospace; background-color: #3c3c3c; }
        h1, h2 { text-align: center; color: #ffffff; }
        pre { margin: auto; width: 75%; padding: 20px; border-radius: 1.125rem; background: linear-gradient(68deg, #010101 0%, #232323 100%); }
        .color-guide { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 15px; padding: 20px; background-color: #010101; margin: 20px auto; max-width: 800px; border-radius: 10px; }
        .color-item { padding: 15px; border-radius: 5px; color: black; font-weight: bold; text-align: center; }
        .token { display: inline; }
"#;

/// Renders tokens as a standalone HTML page with a colour guide.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    palette: Palette,
}

impl HtmlRenderer {
    pub fn new(palette: Palette) -> Self {
        HtmlRenderer { palette }
    }

    fn write_style(&self, html: &mut String) {
        html.push_str("    <style>\n");
        html.push_str(BASE_STYLE);

        for class in TokenClass::ALL {
            let color = self.palette.color(class);
            let _ = writeln!(html, "        .{} {{ color: {}; }}", class.name(), color);
            let _ = writeln!(
                html,
                "        .guide-{} {{ background-color: {}; }}",
                class.name(),
                color
            );
        }

        html.push_str("    </style>\n");
    }

    fn write_guide(&self, html: &mut String) {
        html.push_str("    <h2>Color Guide</h2>\n    <div class=\"color-guide\">\n");

        for class in TokenClass::ALL.iter().filter(|class| **class != TokenClass::Other) {
            let _ = writeln!(
                html,
                "        <div class=\"color-item guide-{}\">{}</div>",
                class.name(),
                class
            );
        }

        html.push_str("    </div>\n");
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, tokens: &[Token], language: &str) -> String {
        let mut html = String::from(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"utf-8\">\n    <title>Syntax Highlighter</title>\n",
        );
        self.write_style(&mut html);
        html.push_str("</head>\n<body>\n    <h1>Syntax Highlighter</h1>\n");
        self.write_guide(&mut html);

        let _ = write!(
            html,
            "    <h2>Highlighted {} Code</h2>\n    <pre><code>",
            escape(&language.to_uppercase())
        );

        for token in tokens {
            let _ = write!(
                html,
                "<span class=\"token {}\">{}</span>",
                token.class.name(),
                escape(&token.lexeme).replace(' ', "&nbsp;")
            );
        }

        html.push_str("</code></pre>\n</body>\n</html>\n");
        html
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
