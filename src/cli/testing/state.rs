use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual objects read from a repo directory. Unset fields
/// correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    categories: Option<base::Categories>,
    transactions: Option<base::Transactions>,
    items: Option<base::SpendingItems>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets repo's [`base::Categories`].
    pub fn with_categories(mut self, s: &str) -> Self {
        self.categories = Some(s.parse().unwrap());
        self
    }

    /// Sets repo's [`base::Transactions`].
    pub fn with_transactions(mut self, s: &str) -> Self {
        self.transactions = Some(s.parse().unwrap());
        self
    }

    /// Sets repo's [`base::SpendingItems`].
    pub fn with_items(mut self, s: &str) -> Self {
        self.items = Some(s.parse().unwrap());
        self
    }

    /// Reads objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    Some(fs.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        Self {
            config: read!(base::Config),
            categories: read!(base::Categories),
            transactions: read!(base::Transactions),
            items: read!(base::SpendingItems),
        }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    categories: Option<&'a str>,
    transactions: Option<&'a str>,
    items: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets repo's [`base::Categories`] file contents.
    pub fn with_categories(mut self, s: &'a str) -> Self {
        self.categories = Some(s);
        self
    }

    /// Sets repo's [`base::Transactions`] file contents.
    pub fn with_transactions(mut self, s: &'a str) -> Self {
        self.transactions = Some(s);
        self
    }

    /// Sets repo's [`base::SpendingItems`] file contents.
    pub fn with_items(mut self, s: &'a str) -> Self {
        self.items = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Invalid contents are written
    /// as well, so that read failures can be tested.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, field: Option<&str>)
        where
            T: base::fs::Io,
        {
            if let Some(s) = field {
                std::fs::write(fs.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(fs, self.config);
        write::<base::Categories>(fs, self.categories);
        write::<base::Transactions>(fs, self.transactions);
        write::<base::SpendingItems>(fs, self.items);
    }

    /// Panics if any field is not a valid serialization of its type.
    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.categories {
            os = os.with_categories(s);
        }
        if let Some(s) = self.transactions {
            os = os.with_transactions(s);
        }
        if let Some(s) = self.items {
            os = os.with_items(s);
        }
        os
    }
}
