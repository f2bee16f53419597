//! Per-call request parameters and the required-field check.

use crate::Error;
use bytes::Bytes;
use std::path::Path;

/// A binary upload: glossary, corpus or document.
#[derive(Debug, Clone, PartialEq)]
pub struct FileParam {
    pub data: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl FileParam {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            filename: None,
            content_type: None,
        }
    }

    /// Reads a whole file; the filename is taken from the path.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| Error::Common(format!("read `{}` failed: {}", path.display(), e)))?;
        let mut file = Self::new(data);
        file.filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned);
        Ok(file)
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// A single parameter value looked up by its wire name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue<'a> {
    Str(&'a str),
    StrList(&'a [String]),
    Bool(bool),
    File(&'a FileParam),
}

impl ParamValue<'_> {
    /// `false` is a value, an empty string is not.
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Str(s) => s.is_empty(),
            ParamValue::StrList(list) => list.is_empty(),
            ParamValue::Bool(_) => false,
            ParamValue::File(f) => f.data.is_empty(),
        }
    }
}

/// Implemented by every operation's parameter struct.
///
/// Names are the wire names used in the path template, the query string, the
/// JSON body or the multipart form. Returns `None` for an unset optional.
pub trait Params {
    fn param(&self, name: &str) -> Option<ParamValue<'_>>;
}

/// Returns the required names that are absent or empty, in the order given.
pub fn missing_params<'r, P: Params + ?Sized>(params: &P, required: &[&'r str]) -> Vec<&'r str> {
    required
        .iter()
        .copied()
        .filter(|name| params.param(name).is_none_or(|v| v.is_empty()))
        .collect()
}
