//! CLI-independent input sources for the one-shot check.

use super::error::InputError;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Where the text to check comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInput {
    /// Text passed directly
    Text(String),
    /// Read from a file at the given path
    File(PathBuf),
    /// Read from standard input
    Stdin,
}

impl CheckInput {
    /// `-` means stdin, anything else is a path.
    pub fn from_location(location: &str) -> Self {
        match location {
            "-" => Self::Stdin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    pub async fn read(self) -> Result<String, InputError> {
        match self {
            CheckInput::Text(text) => Ok(text),
            CheckInput::File(path) => {
                if !path.exists() {
                    return Err(InputError::FileNotFound {
                        file_name: path.display().to_string(),
                    });
                }
                Ok(tokio::fs::read_to_string(path).await?)
            }
            CheckInput::Stdin => {
                let mut text = String::new();
                tokio::io::stdin().read_to_string(&mut text).await?;
                Ok(text)
            }
        }
    }
}
