use super::{ConfigSnafu, Result};

/// If the value begins with an '@', the rest names a file whose trimmed
/// contents replace the value. Anything else passes through untouched.
///
/// prefix is used to provide context in case of an error.
pub(crate) fn key_file_or_string(value: String, prefix: String) -> Result<String> {
    let Some(key_file) = value.strip_prefix('@') else {
        return Ok(value);
    };

    let contents = std::fs::read_to_string(key_file).map_err(|err| {
        ConfigSnafu {
            prefix,
            message: format!("Failed to read key from {key_file}: {err}"),
        }
        .build()
    })?;

    Ok(contents.trim().into())
}
