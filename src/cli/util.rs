use anyhow::Context;

use crate::base;
use crate::cli;

/// Reads `T` from `fs`, naming the file on failure.
pub fn read<T>(fs: &base::Fs) -> anyhow::Result<T>
where
    T: base::fs::Io,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    fs.read::<T>()
        .with_context(|| format!("failed to read '{}'", fs.path::<T>().display()))
}

/// Reads the category, transaction, and spending item tables.
pub fn read_book(fs: &base::Fs) -> anyhow::Result<base::Book> {
    let book = base::Book::new(
        read::<base::Categories>(fs)?,
        read::<base::Transactions>(fs)?,
        read::<base::SpendingItems>(fs)?,
    );
    tracing::info!(
        categories = book.categories().len(),
        transactions = book.transactions().len(),
        items = book.items().len(),
        "loaded tables"
    );
    Ok(book)
}

/// Finds a category by id, or else by case-insensitive name.
pub fn resolve_category(tree: &base::Categorytree, s: &str) -> anyhow::Result<base::CategoryId> {
    if let Ok(id) = s.parse::<base::CategoryId>() {
        if tree.get(id).is_some() {
            return Ok(id);
        }
        if tree.find_by_name(s).is_empty() {
            anyhow::bail!("no category with id {}", id)
        }
    }
    match tree.find_by_name(s).as_slice() {
        [] => anyhow::bail!("no category named '{}'", s),
        [c] => Ok(c.id()),
        cs => {
            let ids = cs
                .iter()
                .map(|c| c.id().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::bail!("category name '{}' is ambiguous (ids {})", s, ids)
        }
    }
}

pub fn view_request(
    opts: &cli::sharedopts::ViewOpts,
    tree: &base::Categorytree,
) -> anyhow::Result<base::ViewRequest> {
    let target = match (&opts.target, opts.unassigned) {
        (Some(_), true) => {
            anyhow::bail!("'--unassigned' cannot be combined with a category")
        }
        (None, true) if opts.breakdown => {
            anyhow::bail!("'--breakdown' cannot be combined with '--unassigned'")
        }
        (None, true) => base::Target::Unassigned,
        (None, false) if opts.breakdown => anyhow::bail!("'--breakdown' requires a category"),
        (None, false) => base::Target::Combined,
        (Some(s), false) => base::Target::Category {
            id: resolve_category(tree, s)?,
            breakdown: opts.breakdown,
        },
    };
    let request = base::ViewRequest {
        target,
        interval: opts.interval,
    };
    tracing::debug!(?request, "resolved view");
    Ok(request)
}

/// Resolves `opts` against the book's category tree and runs the view.
pub fn run_view(
    opts: &cli::sharedopts::ViewOpts,
    book: &base::Book,
) -> anyhow::Result<(base::ViewRequest, base::Report)> {
    let tree = book.tree()?;
    let request = view_request(opts, &tree)?;
    let report = request.run(book, &tree)?;
    Ok((request, report))
}
