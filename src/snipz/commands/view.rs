use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::validate_name;
use crate::store::SnippetStore;

pub fn run<S: SnippetStore>(store: &S, name: &str) -> Result<CmdResult> {
    validate_name(name)?;
    let content = store.read(name)?;
    Ok(CmdResult::default()
        .with_listed(vec![name.to_string()])
        .with_content(content))
}
