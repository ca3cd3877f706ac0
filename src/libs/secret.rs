//! Encrypted storage for the AI service API key.
//!
//! The key is kept AES-256-CBC encrypted and base64 encoded in a file in the
//! application data directory. The cipher key and IV are embedded at build
//! time (see `build.rs`).

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

/// File holding the encrypted Gemini API key.
pub const API_KEY_FILE: &str = ".gemini_secret";

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));
        Self::at(secret_file_path, prompt)
    }

    pub fn at(secret_file_path: PathBuf, prompt: &str) -> Self {
        Self {
            prompt: prompt.to_owned(),
            secret_file_path,
            key: APP_METADATA_SECRET_KEY.to_vec(),
            iv: APP_METADATA_SECRET_IV.to_vec(),
        }
    }

    /// The Gemini API key slot.
    pub fn api_key() -> Self {
        Self::new(API_KEY_FILE, "Enter your Gemini API key")
    }

    /// Returns the stored value, if one exists and decrypts.
    pub fn get(&self) -> Option<String> {
        if fs::metadata(&self.secret_file_path).is_err() {
            return None;
        }
        match self.decrypt() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(path = %self.secret_file_path.display(), error = %e, "stored secret is unreadable");
                None
            }
        }
    }

    /// Asks for the value interactively and stores it.
    pub fn prompt(&self) -> Result<String> {
        let value = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.store(&value)?;
        Ok(value)
    }

    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;
        Ok(())
    }

    pub fn delete(&self) -> Result<()> {
        if self.secret_file_path.exists() {
            fs::remove_file(&self.secret_file_path)?;
        }
        Ok(())
    }

    fn decrypt(&self) -> Result<String> {
        let mut file = File::open(&self.secret_file_path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let plaintext = cipher.decrypt_vec(&ciphertext)?;
        Ok(String::from_utf8(plaintext)?)
    }
}
