//! faxc-drv - compiler driver.
//!
//! Owns the parts of the front end deliberately left out of `faxc-lex` and
//! `faxc-par`: file discovery and extension validation, a typed
//! `Config`/`Session` pair, and lowering the core crates' `thiserror`
//! errors into `faxc_util::diagnostic` for presentation. Everything past
//! parsing — semantic analysis, code generation, linking — is an external
//! collaborator this crate only ever talks to through the [`Compile`]
//! trait; it has no opinion on what that collaborator does.

use std::path::{Path, PathBuf};

use faxc_par::Node;
use faxc_util::diagnostic::{Diagnostic, Level};
use faxc_util::{FileId, Span, TypeInterner};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// The only extension `load` accepts for a source file.
pub const SOURCE_EXTENSION: &str = "ao";

/// Driver configuration.
///
/// Trimmed to the subset this front end actually drives: which file to
/// read and how noisy to be about it. Optimization levels, emit kinds, and
/// target triples belong to the back end this crate does not implement.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// State for one driver invocation: the configuration plus the type
/// registry the parser borrows. A `Session` is not reused across files —
/// construct a fresh one per [`load`] call if driving several sources, so
/// two parses never share a `TypeInterner`.
pub struct Session {
    pub config: Config,
    pub types: TypeInterner,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config, types: TypeInterner::new() }
    }
}

/// The downstream stage a driver caller plugs in after parsing. Semantic
/// analysis and code generation are out of scope for this crate; a caller
/// that wants them implements this trait and passes it to [`load`].
pub trait Compile {
    fn compile(
        &mut self,
        module: &Node,
        types: &TypeInterner,
    ) -> Result<(), Box<dyn std::error::Error>>;
}

/// Everything that can go wrong between "here is a path" and "here is a
/// parsed module". Every variant is translatable into a `Diagnostic` via
/// [`DriverError::to_diagnostic`] for callers that want file/line/column
/// output rather than a bare `Display` string.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("expected a `.{SOURCE_EXTENSION}` file, found {found}")]
    WrongExtension { path: PathBuf, found: String },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] faxc_lex::LexError),

    #[error(transparent)]
    Parse(#[from] faxc_par::ParseError),

    #[error("compilation failed: {0}")]
    Compile(#[source] Box<dyn std::error::Error>),
}

impl DriverError {
    /// Best-effort source position for this error; file-discovery errors
    /// (wrong extension, I/O failure) have no position within the file and
    /// report [`Span::DUMMY`].
    pub fn span(&self) -> Span {
        match self {
            DriverError::Lex(e) => e.span(),
            DriverError::Parse(e) => e.span(),
            DriverError::WrongExtension { .. } | DriverError::Io { .. } | DriverError::Compile(_) => {
                Span::DUMMY
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(Level::Error, self.to_string(), self.span())
    }
}

/// Read `path`, tokenize and parse it, and optionally hand the resulting
/// module to `compiler`. `path` must end in `.ao`; every other failure
/// (missing file, lex error, parse error, downstream compile error) is
/// reported through [`DriverError`] rather than a panic.
#[instrument(skip(compiler), fields(path = %path.as_ref().display()))]
pub fn load(
    session: &mut Session,
    path: impl AsRef<Path>,
    mut compiler: Option<&mut dyn Compile>,
) -> Result<Node, DriverError> {
    let path = path.as_ref();
    validate_extension(path)?;

    debug!("reading source file");
    let source = std::fs::read_to_string(path)
        .map_err(|source| DriverError::Io { path: path.to_path_buf(), source })?;

    let file_id = FileId::new(0);
    let tokens = faxc_lex::tokenize_with_file(&source, file_id)?;
    debug!(token_count = tokens.len(), "tokenized");

    let module = faxc_par::parse(&tokens, &session.types)?;
    info!(top_level_items = module.children().len(), "parsed module");

    if let Some(compiler) = compiler.as_deref_mut() {
        compiler.compile(&module, &session.types).map_err(DriverError::Compile)?;
    }

    Ok(module)
}

fn validate_extension(path: &Path) -> Result<(), DriverError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(SOURCE_EXTENSION) => Ok(()),
        other => {
            let found = match other {
                Some(ext) => format!(".{ext}"),
                None => "no extension".to_string(),
            };
            Err(DriverError::WrongExtension { path: path.to_path_buf(), found })
        }
    }
}

/// Entry point for the `faxc` binary: treats its single positional
/// argument as a source path, parses it, and prints the resulting module.
/// No downstream compiler is wired in — this binary only exercises the
/// front end.
pub fn run() -> Result<(), DriverError> {
    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(path) => path,
        None => {
            return Err(DriverError::WrongExtension {
                path: PathBuf::new(),
                found: "no input path given".to_string(),
            });
        }
    };
    let verbose = args.any(|a| a == "--verbose" || a == "-v");

    let config = Config::new(input.clone()).with_verbose(verbose);
    let mut session = Session::new(config);
    let module = load(&mut session, &input, None)?;
    println!("{module:#?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_extension_is_rejected_before_opening_the_file() {
        let mut session = Session::new(Config::new("definitely-does-not-exist.rs"));
        let err = load(&mut session, "definitely-does-not-exist.rs", None).unwrap_err();
        assert!(matches!(err, DriverError::WrongExtension { .. }));
    }

    #[test]
    fn missing_file_surfaces_an_io_error_not_a_panic() {
        let mut session = Session::new(Config::new("no-such-file.ao"));
        let err = load(&mut session, "no-such-file.ao", None).unwrap_err();
        assert!(matches!(err, DriverError::Io { .. }));
    }

    #[test]
    fn valid_source_parses_into_a_module() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("faxc-drv-test-{}.ao", std::process::id()));
        std::fs::write(&path, "let x: i32 = 1 + 2\n").unwrap();

        let mut session = Session::new(Config::new(&path));
        let module = load(&mut session, &path, None).unwrap();
        assert_eq!(module.children().len(), 1);

        std::fs::remove_file(&path).ok();
    }
}
