use crate::base;

/// Application filesystem. Every file lives directly in the repository
/// directory.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are read from or written to files.
pub trait Io: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Io for base::Config {
    const FILENAME: &'static str = ".spendview.json";
}
impl Io for base::Categories {
    const FILENAME: &'static str = "categories.jsonl";
}
impl Io for base::Transactions {
    const FILENAME: &'static str = "transactions.jsonl";
}
impl Io for base::SpendingItems {
    const FILENAME: &'static str = "items.jsonl";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.path::<base::Config>().is_file()
    }

    /// Returns the path which `T` is read from and written to.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Io,
    {
        self.dir.join(T::FILENAME)
    }

    /// Reads `T` from disk. If `T`'s file does not exist, returns `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Io,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let path = self.path::<T>();
        match std::fs::read_to_string(&path) {
            Ok(s) => {
                tracing::debug!(path = %path.display(), bytes = s.len(), "read file");
                s.parse()
                    .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                    .map_err(ReadError::Parse)
            }
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "file not found, using default");
                    Ok(T::default())
                }
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Io,
    {
        std::fs::write(self.path::<T>(), obj.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    /// Returns a filesystem object anchored at a temporary directory. The `Fs`
    /// must not outlive the returned `TempDir`.
    fn tempfs() -> (Fs, tempfile::TempDir) {
        let td = tempfile::TempDir::new().unwrap();
        let fs = Fs::new(td.path());
        (fs, td)
    }

    #[test]
    fn test_path() {
        let (fs, _td) = tempfs();

        let paths = [
            fs.path::<base::Config>(),
            fs.path::<base::Categories>(),
            fs.path::<base::Transactions>(),
            fs.path::<base::SpendingItems>(),
        ];
        for (i, a) in paths.iter().enumerate() {
            assert_eq!(a.parent(), Some(fs.dir()));
            for b in paths[i + 1..].iter() {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_config() {
        let (fs, _td) = tempfs();

        assert!(!fs.is_repo());
        assert_eq!(fs.read::<base::Config>().unwrap(), base::Config::default());

        let s = r#"{"useUnicodeSymbols": true}"#;
        let config = s.parse::<base::Config>().unwrap();
        std::fs::write(fs.path::<base::Config>(), s).unwrap();
        assert!(fs.is_repo());
        assert_eq!(fs.read::<base::Config>().unwrap(), config);

        fs.write(&config).unwrap();
        assert_eq!(
            std::fs::read_to_string(fs.path::<base::Config>()).unwrap(),
            indoc!(
                r#"
                {
                  "useColoredOutput": false,
                  "useUnicodeSymbols": true,
                  "showEmptyWeeks": false
                }
                "#
            )
        );
    }

    #[test]
    fn test_tables() {
        let (fs, _td) = tempfs();

        assert!(fs.read::<base::Transactions>().unwrap().is_empty());

        std::fs::write(
            fs.path::<base::Transactions>(),
            indoc!(
                r#"
                {"id":10,"date":"2024-01-03","category":1,"override":50}
                {"id":"eleven"}
                "#
            ),
        )
        .unwrap();
        let e = fs.read::<base::Transactions>().unwrap_err();
        assert_eq!(e.to_string(), "invalid row at line 2");

        let items = r#"{"transaction":10,"price":2.5,"qty":2}"#
            .parse::<base::SpendingItems>()
            .unwrap();
        fs.write(&items).unwrap();
        assert_eq!(fs.read::<base::SpendingItems>().unwrap(), items);
    }
}
