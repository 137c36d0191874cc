use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::validate_name;
use crate::store::SnippetStore;

pub fn run<S: SnippetStore, I: AsRef<str>>(store: &S, names: &[I]) -> Result<CmdResult> {
    let mut paths = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        validate_name(name)?;
        paths.push(store.snippet_path(name));
    }
    Ok(CmdResult::default().with_paths(paths))
}
