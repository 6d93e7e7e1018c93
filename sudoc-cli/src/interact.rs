use dialoguer::Input;
use eyre::{eyre, Context, Result};

/// Prompts for the next ISBN, `None` when the user enters an empty line.
pub fn prompt_isbn() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Enter an ISBN (empty line to quit)")
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("ISBN prompt cancelled"))?;

    let isbn = input.trim().to_owned();
    Ok(if isbn.is_empty() { None } else { Some(isbn) })
}
