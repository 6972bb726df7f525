//! Streaming xacro writer.

use std::io::Write;

use descgen_config::{format_float, is_parameter_name};
use descgen_core::{Block, MacroParams, Origin, OutputSink, SinkError};

/// Extension of generated description files.
pub const EXTENSION: &str = "urdf.xacro";

const XACRO_NS: &str = "http://ros.org/wiki/xacro";
const INDENT: &str = "  ";

/// Renders directives as a xacro document into any [`Write`].
///
/// The XML prologue and `<robot>` element are written on creation; `close`
/// writes the closing tag and flushes.
pub struct XacroWriter<W: Write> {
    out: W,
    closed: bool,
}

impl<W: Write> XacroWriter<W> {
    /// Start a document for the robot named `robot_name`.
    pub fn new(mut out: W, robot_name: &str) -> Result<Self, SinkError> {
        writeln!(out, r#"<?xml version="1.0"?>"#)?;
        writeln!(
            out,
            r#"<robot name="{}" xmlns:xacro="{XACRO_NS}">"#,
            escape_attr(robot_name)
        )?;
        Ok(Self { out, closed: false })
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, depth: usize, text: &str) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        writeln!(self.out, "{}{text}", INDENT.repeat(depth))?;
        Ok(())
    }
}

impl<W: Write> OutputSink for XacroWriter<W> {
    fn write_include(&mut self, package: &str, file: &str, path: &str) -> Result<(), SinkError> {
        let filename = format!("$(find {package})/{path}{file}.{EXTENSION}");
        self.line(
            1,
            &format!(r#"<xacro:include filename="{}"/>"#, escape_attr(&filename)),
        )
    }

    fn write_macro(
        &mut self,
        name: &str,
        parameters: &MacroParams,
        blocks: &[Block],
    ) -> Result<(), SinkError> {
        let mut open = format!("<xacro:{name}");
        for (key, value) in parameters.iter() {
            debug_assert!(is_parameter_name(key), "invalid parameter name '{key}'");
            open.push_str(&format!(r#" {key}="{}""#, escape_attr(value)));
        }
        if blocks.is_empty() {
            open.push_str("/>");
            return self.line(1, &open);
        }
        open.push('>');
        self.line(1, &open)?;
        for block in blocks {
            let inner = render_block(block);
            self.line(2, &inner)?;
        }
        self.line(1, &format!("</xacro:{name}>"))
    }

    fn write_comment(&mut self, text: &str) -> Result<(), SinkError> {
        self.line(1, &format!("<!-- {} -->", escape_comment(text)))
    }

    fn write_blank_line(&mut self) -> Result<(), SinkError> {
        self.line(0, "")
    }

    fn close(&mut self) -> Result<(), SinkError> {
        self.line(0, "</robot>")?;
        self.out.flush()?;
        self.closed = true;
        Ok(())
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Origin(origin) => render_origin(origin),
    }
}

/// Render an origin as `<origin xyz="x y z" rpy="r p y"/>`.
pub fn render_origin(origin: &Origin) -> String {
    format!(
        r#"<origin xyz="{}" rpy="{}"/>"#,
        join_floats(&origin.xyz),
        join_floats(&origin.rpy)
    )
}

fn join_floats(values: &[f64; 3]) -> String {
    values
        .iter()
        .map(|v| format_float(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
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

/// XML comments may not contain `--` or end with `-`.
fn escape_comment(text: &str) -> String {
    let mut escaped = text.replace("--", "- -");
    while escaped.contains("--") {
        escaped = escaped.replace("--", "- -");
    }
    if escaped.ends_with('-') {
        escaped.push(' ');
    }
    escaped
}
