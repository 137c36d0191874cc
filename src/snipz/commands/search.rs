use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SnippetStore;

/// Case-insensitive substring match over names, keeping input order.
/// An empty query matches everything.
pub fn filter_names<T: AsRef<str>>(names: &[T], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.to_lowercase().contains(&query))
        .map(str::to_string)
        .collect()
}

pub fn run<S: SnippetStore>(store: &S, query: &str) -> Result<CmdResult> {
    let names = store.list()?;
    Ok(CmdResult::default().with_listed(filter_names(&names, query)))
}
