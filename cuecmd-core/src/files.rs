//! File and input descriptors for `cue` invocations.
//!
//! A file argument may carry an explicit encoding, which `cue` expects as a
//! `<encoding>:` qualifier. When the file is read (input mode) the qualifier is
//! a separate argument in front of the path; when it is written (output mode,
//! e.g. the value of `--outfile`) qualifier and path form a single argument.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Path that stands for the standard input or output stream.
pub const STDIO_PATH: &str = "-";

/// Positioning of a file argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Input,
    Output,
}

/// Encoding qualifier of a file argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Yaml,
    Text,
    #[default]
    Unspecified,
}

impl Encoding {
    /// The qualifier token, or `None` when no encoding was set.
    pub fn prefix(self) -> Option<String> {
        let tag = match self {
            Encoding::Json => "json",
            Encoding::Yaml => "yaml",
            Encoding::Text => "txt",
            Encoding::Unspecified => return None,
        };
        Some(format!("{tag}:"))
    }
}

impl FromStr for Encoding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Encoding::Json),
            "yaml" | "yml" => Ok(Encoding::Yaml),
            "txt" | "text" => Ok(Encoding::Text),
            "" => Ok(Encoding::Unspecified),
            other => Err(CoreError::UnsupportedEncoding(other.to_string())),
        }
    }
}

/// Borrows `path` as UTF-8 text for the argument vector.
fn path_str(path: &Path) -> CoreResult<&str> {
    path.to_str()
        .ok_or_else(|| CoreError::NonUtf8Path(path.to_path_buf()))
}

/// Renders an encoding qualifier and a path according to `mode`.
fn render_qualified(encoding: Encoding, path: &str, mode: Mode) -> Vec<String> {
    match (encoding.prefix(), mode) {
        (None, _) => vec![path.to_string()],
        (Some(prefix), Mode::Output) => vec![format!("{prefix}{path}")],
        (Some(prefix), Mode::Input) => vec![prefix, path.to_string()],
    }
}

/// A file argument with an optional encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub path: PathBuf,
    pub encoding: Encoding,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: Encoding::Unspecified,
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// The standard output stream, optionally qualified.
    pub fn stdout(encoding: Encoding) -> Self {
        Self::new(STDIO_PATH).with_encoding(encoding)
    }

    /// Fails with `NonUtf8Path` when the path is not UTF-8.
    pub fn render(&self, mode: Mode) -> CoreResult<Vec<String>> {
        Ok(render_qualified(self.encoding, path_str(&self.path)?, mode))
    }

    /// Single-token form, suitable as the value of `--outfile`.
    pub fn to_output_arg(&self) -> CoreResult<String> {
        Ok(self.render(Mode::Output)?.concat())
    }
}

/// Contents fed to `cue` through standard input, with an optional encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stdin {
    pub contents: String,
    pub encoding: Encoding,
}

impl Stdin {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            encoding: Encoding::Unspecified,
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Bytes written to the child's standard input.
    pub fn encode(&self) -> Vec<u8> {
        self.contents.as_bytes().to_vec()
    }

    /// Renders like a [`File`] whose path is `-`.
    pub fn render(&self, mode: Mode) -> Vec<String> {
        render_qualified(self.encoding, STDIO_PATH, mode)
    }
}

/// A file operand: either a qualified [`File`] or a bare path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileArg {
    File(File),
    Path(PathBuf),
}

impl FileArg {
    /// Parses `ENCODING:PATH` (e.g. `json:data.json`) or a bare path.
    ///
    /// Anything before the first `:` that is not a known encoding keeps the
    /// whole string as a path.
    pub fn parse(s: &str) -> Self {
        match s.split_once(':') {
            Some((tag, path)) if !tag.is_empty() && !path.is_empty() => match tag.parse() {
                Ok(encoding) => FileArg::File(File::new(path).with_encoding(encoding)),
                Err(_) => FileArg::Path(PathBuf::from(s)),
            },
            _ => FileArg::Path(PathBuf::from(s)),
        }
    }

    pub fn render(&self, mode: Mode) -> CoreResult<Vec<String>> {
        match self {
            FileArg::File(file) => file.render(mode),
            FileArg::Path(path) => Ok(vec![path_str(path)?.to_string()]),
        }
    }
}

impl From<File> for FileArg {
    fn from(file: File) -> Self {
        FileArg::File(file)
    }
}

impl From<PathBuf> for FileArg {
    fn from(path: PathBuf) -> Self {
        FileArg::Path(path)
    }
}

impl From<&Path> for FileArg {
    fn from(path: &Path) -> Self {
        FileArg::Path(path.to_path_buf())
    }
}

impl From<&str> for FileArg {
    fn from(path: &str) -> Self {
        FileArg::Path(PathBuf::from(path))
    }
}

impl From<String> for FileArg {
    fn from(path: String) -> Self {
        FileArg::Path(PathBuf::from(path))
    }
}

/// One file operand or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSet {
    Single(FileArg),
    Many(Vec<FileArg>),
}

impl FileSet {
    /// Renders every operand in order.
    pub fn render(&self, mode: Mode) -> CoreResult<Vec<String>> {
        match self {
            FileSet::Single(file) => file.render(mode),
            FileSet::Many(files) => {
                let mut tokens = Vec::new();
                for file in files {
                    tokens.extend(file.render(mode)?);
                }
                Ok(tokens)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FileSet::Many(files) if files.is_empty())
    }
}

impl From<FileArg> for FileSet {
    fn from(file: FileArg) -> Self {
        FileSet::Single(file)
    }
}

impl From<File> for FileSet {
    fn from(file: File) -> Self {
        FileSet::Single(file.into())
    }
}

impl From<&str> for FileSet {
    fn from(path: &str) -> Self {
        FileSet::Single(path.into())
    }
}

impl From<PathBuf> for FileSet {
    fn from(path: PathBuf) -> Self {
        FileSet::Single(path.into())
    }
}

impl From<Vec<FileArg>> for FileSet {
    fn from(files: Vec<FileArg>) -> Self {
        FileSet::Many(files)
    }
}

impl<T: Into<FileArg>> FromIterator<T> for FileSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FileSet::Many(iter.into_iter().map(Into::into).collect())
    }
}

/// The input operand of an invocation and what `cue` reads from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Raw text, announced to `cue` with a bare `-` operand.
    Text(String),
    /// A descriptor that renders its own operand, including any encoding.
    Stdin(Stdin),
    /// A file operand in input position; nothing is written to stdin.
    File(File),
}

impl Input {
    /// Operand tokens announcing the input.
    pub fn render(&self) -> CoreResult<Vec<String>> {
        match self {
            Input::Text(_) => Ok(vec![STDIO_PATH.to_string()]),
            Input::Stdin(stdin) => Ok(stdin.render(Mode::Input)),
            Input::File(file) => file.render(Mode::Input),
        }
    }

    /// Bytes written to the child's standard input.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Input::Text(text) => text.as_bytes().to_vec(),
            Input::Stdin(stdin) => stdin.encode(),
            Input::File(_) => Vec::new(),
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Stdin> for Input {
    fn from(stdin: Stdin) -> Self {
        Input::Stdin(stdin)
    }
}

impl From<File> for Input {
    fn from(file: File) -> Self {
        Input::File(file)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix() {
            Some(prefix) => f.write_str(prefix.trim_end_matches(':')),
            None => f.write_str("unspecified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_render_modes() {
        let file = File::new("a.json").with_encoding(Encoding::Json);
        assert_eq!(file.render(Mode::Output).unwrap(), vec!["json:a.json"]);
        assert_eq!(file.render(Mode::Input).unwrap(), vec!["json:", "a.json"]);

        let plain = File::new("a.json");
        assert_eq!(plain.render(Mode::Input).unwrap(), vec!["a.json"]);
        assert_eq!(plain.render(Mode::Output).unwrap(), vec!["a.json"]);
    }

    #[test]
    fn test_text_encoding_uses_txt_tag() {
        let file = File::new("notes").with_encoding(Encoding::Text);
        assert_eq!(file.render(Mode::Input).unwrap(), vec!["txt:", "notes"]);
        assert_eq!(File::stdout(Encoding::Yaml).to_output_arg().unwrap(), "yaml:-");
    }

    #[test]
    fn test_stdin_render_and_encode() {
        let stdin = Stdin::new("a: 1").with_encoding(Encoding::Yaml);
        assert_eq!(stdin.render(Mode::Input), vec!["yaml:", "-"]);
        assert_eq!(stdin.encode(), b"a: 1".to_vec());

        let bare = Stdin::new("x");
        assert_eq!(bare.render(Mode::Input), vec!["-"]);
    }

    #[test]
    fn test_file_set_flattens_in_order() {
        let files: FileSet = vec![
            FileArg::from(File::new("a.yaml").with_encoding(Encoding::Yaml)),
            FileArg::from("schema.cue"),
            FileArg::from(PathBuf::from("b.json")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            files.render(Mode::Input).unwrap(),
            vec!["yaml:", "a.yaml", "schema.cue", "b.json"]
        );
    }

    #[test]
    fn test_file_set_single_and_empty() {
        let single = FileSet::from("only.cue");
        assert_eq!(single.render(Mode::Input).unwrap(), vec!["only.cue"]);

        let empty: FileSet = Vec::<FileArg>::new().into_iter().collect();
        assert!(empty.is_empty());
        assert!(empty.render(Mode::Input).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_are_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = PathBuf::from(OsStr::from_bytes(b"caf\xe9.yaml"));
        let file = File::new(raw.clone()).with_encoding(Encoding::Yaml);
        assert!(matches!(
            file.render(Mode::Input),
            Err(CoreError::NonUtf8Path(ref path)) if *path == raw
        ));
        assert!(file.to_output_arg().is_err());

        let files = FileSet::from(vec![FileArg::from("ok.cue"), FileArg::from(raw)]);
        assert!(matches!(
            files.render(Mode::Input),
            Err(CoreError::NonUtf8Path(_))
        ));
    }

    #[test]
    fn test_file_arg_parse() {
        assert_eq!(
            FileArg::parse("json:a.json"),
            FileArg::File(File::new("a.json").with_encoding(Encoding::Json))
        );
        assert_eq!(FileArg::parse("a.cue"), FileArg::Path(PathBuf::from("a.cue")));
        assert_eq!(
            FileArg::parse("pkg:thing.cue"),
            FileArg::Path(PathBuf::from("pkg:thing.cue"))
        );
        assert_eq!(FileArg::parse("json:"), FileArg::Path(PathBuf::from("json:")));
    }

    #[test]
    fn test_input_render() {
        assert_eq!(Input::from("a: 1").render().unwrap(), vec!["-"]);
        assert_eq!(Input::from("").render().unwrap(), vec!["-"]);

        let stdin = Input::from(Stdin::new("{}").with_encoding(Encoding::Json));
        assert_eq!(stdin.render().unwrap(), vec!["json:", "-"]);
        assert_eq!(stdin.encode(), b"{}".to_vec());

        let file = Input::from(File::new("data.yaml").with_encoding(Encoding::Yaml));
        assert_eq!(file.render().unwrap(), vec!["yaml:", "data.yaml"]);
        assert!(file.encode().is_empty());
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("JSON".parse::<Encoding>().unwrap(), Encoding::Json);
        assert_eq!("yml".parse::<Encoding>().unwrap(), Encoding::Yaml);
        assert_eq!("text".parse::<Encoding>().unwrap(), Encoding::Text);
        assert!("toml".parse::<Encoding>().is_err());
        assert_eq!(Encoding::Text.to_string(), "txt");
    }
}
