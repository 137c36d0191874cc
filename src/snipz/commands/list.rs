use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SnippetStore;

use super::search::filter_names;

pub fn run<S: SnippetStore>(store: &S, query: Option<&str>) -> Result<CmdResult> {
    let names = store.list()?;
    let listed = match query {
        Some(q) => filter_names(&names, q),
        None => names,
    };
    Ok(CmdResult::default().with_listed(listed))
}
