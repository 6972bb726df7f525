//! Output sink contract and the in-memory output document.

use crate::descriptor::MacroParams;
use crate::error::SinkError;
use crate::origin::Origin;

/// A nested element inside a macro call.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Origin(Origin),
}

/// One logical unit of output.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Include {
        package: String,
        file: String,
        path: String,
    },
    Macro {
        name: String,
        parameters: MacroParams,
        blocks: Vec<Block>,
    },
    Comment(String),
    BlankLine,
}

/// Append-only, ordered destination for generated directives.
///
/// Each call appends exactly one directive. After [`close`](Self::close)
/// succeeds, every further call fails with [`SinkError::Closed`].
pub trait OutputSink {
    fn write_include(&mut self, package: &str, file: &str, path: &str) -> Result<(), SinkError>;

    fn write_macro(
        &mut self,
        name: &str,
        parameters: &MacroParams,
        blocks: &[Block],
    ) -> Result<(), SinkError>;

    fn write_comment(&mut self, text: &str) -> Result<(), SinkError>;

    fn write_blank_line(&mut self) -> Result<(), SinkError>;

    /// Finalize the output.
    fn close(&mut self) -> Result<(), SinkError>;

    /// Append a directive through the matching method.
    fn write_directive(&mut self, directive: &Directive) -> Result<(), SinkError> {
        match directive {
            Directive::Include {
                package,
                file,
                path,
            } => self.write_include(package, file, path),
            Directive::Macro {
                name,
                parameters,
                blocks,
            } => self.write_macro(name, parameters, blocks),
            Directive::Comment(text) => self.write_comment(text),
            Directive::BlankLine => self.write_blank_line(),
        }
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_include(&mut self, package: &str, file: &str, path: &str) -> Result<(), SinkError> {
        (**self).write_include(package, file, path)
    }

    fn write_macro(
        &mut self,
        name: &str,
        parameters: &MacroParams,
        blocks: &[Block],
    ) -> Result<(), SinkError> {
        (**self).write_macro(name, parameters, blocks)
    }

    fn write_comment(&mut self, text: &str) -> Result<(), SinkError> {
        (**self).write_comment(text)
    }

    fn write_blank_line(&mut self) -> Result<(), SinkError> {
        (**self).write_blank_line()
    }

    fn close(&mut self) -> Result<(), SinkError> {
        (**self).close()
    }
}

/// In-memory output document: the directive sequence of one generation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    directives: Vec<Directive>,
    closed: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Names of all macro calls, in order.
    pub fn macro_names(&self) -> Vec<&str> {
        self.directives
            .iter()
            .filter_map(|d| match d {
                Directive::Macro { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of include directives.
    pub fn include_count(&self) -> usize {
        self.directives
            .iter()
            .filter(|d| matches!(d, Directive::Include { .. }))
            .count()
    }

    /// Replay the document into another sink, closing it if this one is closed.
    pub fn replay<S: OutputSink>(&self, sink: &mut S) -> Result<(), SinkError> {
        for directive in &self.directives {
            sink.write_directive(directive)?;
        }
        if self.closed {
            sink.close()?;
        }
        Ok(())
    }

    fn push(&mut self, directive: Directive) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        self.directives.push(directive);
        Ok(())
    }
}

impl OutputSink for Document {
    fn write_include(&mut self, package: &str, file: &str, path: &str) -> Result<(), SinkError> {
        self.push(Directive::Include {
            package: package.to_string(),
            file: file.to_string(),
            path: path.to_string(),
        })
    }

    fn write_macro(
        &mut self,
        name: &str,
        parameters: &MacroParams,
        blocks: &[Block],
    ) -> Result<(), SinkError> {
        self.push(Directive::Macro {
            name: name.to_string(),
            parameters: parameters.clone(),
            blocks: blocks.to_vec(),
        })
    }

    fn write_comment(&mut self, text: &str) -> Result<(), SinkError> {
        self.push(Directive::Comment(text.to_string()))
    }

    fn write_blank_line(&mut self) -> Result<(), SinkError> {
        self.push(Directive::BlankLine)
    }

    fn close(&mut self) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        self.closed = true;
        Ok(())
    }
}
