use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The flight export could not be read
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The generated module could not be rendered
    Template(tinytemplate::error::Error),
    /// The generated module could not be written
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileRead { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Template(e) => Some(e),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileRead { path, source } => {
                write!(f, "Could not read file: {} ({source})", path.display())
            }
            Self::Template(e) => std::fmt::Display::fmt(&e, f),
            Self::Write { path, source } => {
                write!(f, "Could not write file: {} ({source})", path.display())
            }
        }
    }
}

impl From<tinytemplate::error::Error> for Error {
    fn from(e: tinytemplate::error::Error) -> Self {
        Self::Template(e)
    }
}
