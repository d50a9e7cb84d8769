use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::to_svg_path_data;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextHAlign};

/// Attributes of the root `<svg>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgDocumentOptions {
    pub element_id: String,
    pub class_name: String,
}

impl Default for SvgDocumentOptions {
    fn default() -> Self {
        Self {
            element_id: "background-trendline".to_owned(),
            class_name: "trendline-bg".to_owned(),
        }
    }
}

/// Serializes frames into standalone SVG documents.
///
/// The last rendered document is kept so callers can write it out after
/// `TrendChart::render`.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    options: SvgDocumentOptions,
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new(options: SvgDocumentOptions) -> Self {
        Self {
            options,
            document: String::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &SvgDocumentOptions {
        &self.options
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::new();
        // Writing into a String cannot fail; results are discarded below.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" class="{}" width="{}" height="{}">"#,
            escape_xml(&self.options.element_id),
            escape_xml(&self.options.class_name),
            frame.viewport.width,
            frame.viewport.height
        );

        for path in &frame.paths {
            let _ = writeln!(
                out,
                r#"  <g transform="translate({},{})"><path fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" d="{}"/></g>"#,
                path.translate_x,
                path.translate_y,
                path.color.to_hex_rgb(),
                path.color.alpha,
                path.stroke_width,
                to_svg_path_data(&path.commands)
            );
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let class_attr = text
                .class_name
                .as_deref()
                .map(|name| format!(r#" class="{}""#, escape_xml(name)))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                r#"  <text{} x="{}" y="{}" fill="{}" opacity="{}" text-anchor="{}" style="font-size: {}px">{}</text>"#,
                class_attr,
                text.x,
                text.y,
                text.color.to_hex_rgb(),
                text.color.alpha,
                anchor,
                text.font_size_px,
                escape_xml(&text.text)
            );
        }

        out.push_str("</svg>\n");
        self.document = out;
        Ok(())
    }
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
