//! Password protection

use crate::assemble::assemble_all;
use crate::io::classify_load_error;
use crate::types::*;
use lopdf::encryption::{EncryptionState, EncryptionVersion, PasswordAlgorithm, Permissions};
use lopdf::{Document, Object, StringFormat};
use md5::{Digest, Md5};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// RC4 key length used for new encryption, in bits
const KEY_LENGTH: usize = 128;

/// Copy `doc` into a fresh document encrypted with the given passwords.
///
/// At least one password must be non-empty. An empty owner password falls
/// back to the user password.
pub fn encrypt(source_path: &Path, doc: Document, user: &str, owner: &str) -> Result<Document> {
    if user.is_empty() && owner.is_empty() {
        return Err(OrganizeError::Config(
            "Enter at least one password (user or owner)".to_string(),
        ));
    }
    let owner = if owner.is_empty() { user } else { owner };

    let mut plain = assemble_all(source_path, doc)?;
    ensure_document_id(&mut plain);

    let version = EncryptionVersion::V2 {
        document: &plain,
        owner_password: owner,
        user_password: user,
        key_length: KEY_LENGTH,
        permissions: Permissions::default(),
    };
    let state = EncryptionState::try_from(version)
        .map_err(|e| OrganizeError::Config(format!("Failed to set up encryption: {e}")))?;

    let mut encrypted = plain.clone();
    encrypted.encrypt(&state)?;
    Ok(encrypted)
}

/// Padding appended to passwords shorter than 32 bytes (ISO 32000 7.6.4.3)
const PASSWORD_PAD: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01, 0x08,
    0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53, 0x69, 0x7A,
];

/// Decrypt `doc` in place with either its user or its owner password.
///
/// lopdf derives the file key from the password it is given as if it were
/// the user password. For RC4 revisions an owner password is first turned
/// back into the user password stored in `/O`.
pub(crate) fn decrypt_with_password(doc: &mut Document, password: &str) -> Result<()> {
    let algorithm = PasswordAlgorithm::try_from(&*doc)?;
    let password = algorithm.sanitize_password(password).map_err(auth_error)?;

    if algorithm.authenticate_user_password(doc, &password).is_ok() {
        return doc.decrypt_raw(&password).map_err(classify_load_error);
    }
    algorithm
        .authenticate_owner_password(doc, &password)
        .map_err(auth_error)?;

    let user = match security_revision(doc)? {
        revision @ 2..=4 => recover_user_password(doc, &password, revision)?,
        _ => password,
    };
    doc.decrypt_raw(&user).map_err(classify_load_error)
}

fn security_revision(doc: &Document) -> Result<i64> {
    Ok(doc.get_encrypted()?.get(b"R")?.as_i64()?)
}

/// Decrypt `/O` with the key derived from the owner password (Algorithm 7),
/// giving the padded user password.
fn recover_user_password(doc: &Document, owner: &[u8], revision: i64) -> Result<Vec<u8>> {
    let encrypt = doc.get_encrypted()?;
    let bits = match encrypt.get(b"Length") {
        Ok(length) => usize::try_from(length.as_i64()?)
            .map_err(|_| OrganizeError::Auth("invalid key length".to_string()))?,
        Err(_) => 40,
    };
    let key_len = if revision >= 3 { bits / 8 } else { 5 };
    if !(1..=16).contains(&key_len) {
        return Err(OrganizeError::Auth(format!("unsupported key length {bits}")));
    }

    let len = owner.len().min(32);
    let mut padded = [0u8; 32];
    padded[..len].copy_from_slice(&owner[..len]);
    padded[len..].copy_from_slice(&PASSWORD_PAD[..32 - len]);

    let mut hash = Md5::digest(padded);
    if revision >= 3 {
        for _ in 0..50 {
            hash = Md5::digest(hash);
        }
    }
    let key = &hash[..key_len];

    let mut user = encrypt.get(b"O")?.as_str()?.to_vec();
    if revision >= 3 {
        for round in (1..=19u8).rev() {
            let round_key: Vec<u8> = key.iter().map(|b| b ^ round).collect();
            user = rc4(&round_key, &user);
        }
    }
    Ok(rc4(key, &user))
}

/// RC4 keystream applied to `data`; `key` must not be empty.
fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut state: [u8; 256] = std::array::from_fn(|i| i as u8);
    let mut j = 0u8;
    for i in 0..256 {
        j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
        state.swap(i, j as usize);
    }

    let (mut i, mut j) = (0u8, 0u8);
    data.iter()
        .map(|&byte| {
            i = i.wrapping_add(1);
            j = j.wrapping_add(state[i as usize]);
            state.swap(i as usize, j as usize);
            byte ^ state[state[i as usize].wrapping_add(state[j as usize]) as usize]
        })
        .collect()
}

fn auth_error(err: lopdf::encryption::DecryptionError) -> OrganizeError {
    OrganizeError::Auth(err.to_string())
}

/// A decrypted copy of a document that was opened with its password.
pub fn unlock(source_path: &Path, doc: Document) -> Result<Document> {
    assemble_all(source_path, doc)
}

/// Encryption keys are derived from the trailer `/ID`; add one if missing.
fn ensure_document_id(doc: &mut Document) {
    if doc.trailer.get(b"ID").is_ok() {
        return;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = format!("{nanos:032x}").into_bytes();
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(id.clone(), StringFormat::Hexadecimal),
            Object::String(id, StringFormat::Hexadecimal),
        ]),
    );
}
