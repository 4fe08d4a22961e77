//! Anonymous per-install user id, created once and reused.

use std::fs;
use std::path::Path;

use chrono::Utc;
use rand::Rng;

use crate::error::StoreError;

pub const DEFAULT_IDENTITY_PATH: &str = "./data/friction-user-id";

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 9;

/// `user-{9 base36 chars}-{unix millis}`.
pub fn generate_user_id() -> String {
    let mut rng = rand::thread_rng();
    let random: String = (0..RANDOM_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..BASE36.len());
            BASE36.get(idx).map_or('0', |b| char::from(*b))
        })
        .collect();
    format!("user-{random}-{}", Utc::now().timestamp_millis())
}

pub fn load_or_create_user_id(path: impl AsRef<Path>) -> Result<String, StoreError> {
    let path = path.as_ref();
    if path.exists() {
        let stored = fs::read_to_string(path)?;
        let stored = stored.trim();
        if is_user_id(stored) {
            return Ok(stored.to_string());
        }
        tracing::warn!(path = %path.display(), "ignoring malformed stored user id");
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let id = generate_user_id();
    fs::write(path, &id)?;
    tracing::info!(path = %path.display(), user_id = %id, "created user id");
    Ok(id)
}

fn is_user_id(raw: &str) -> bool {
    let mut parts = raw.splitn(3, '-');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some("user"), Some(random), Some(millis))
            if !random.is_empty()
                && random.bytes().all(|b| b.is_ascii_alphanumeric())
                && !millis.is_empty()
                && millis.bytes().all(|b| b.is_ascii_digit())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_expected_shape() {
        let id = generate_user_id();
        assert!(is_user_id(&id), "{id}");
        let random = id.split('-').nth(1).unwrap();
        assert_eq!(random.len(), 9);
        assert!(random.bytes().all(|b| BASE36.contains(&b)));
        assert_ne!(generate_user_id(), generate_user_id());
    }

    #[test]
    fn creates_once_then_reuses() {
        let dir = std::env::temp_dir().join(format!(
            "friction-identity-{}",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let path = dir.join("user-id");

        let first = load_or_create_user_id(&path).unwrap();
        let second = load_or_create_user_id(&path).unwrap();
        assert_eq!(first, second);

        fs::write(&path, "garbage").unwrap();
        let replaced = load_or_create_user_id(&path).unwrap();
        assert_ne!(replaced, "garbage");
        assert!(is_user_id(&replaced));

        let _ = fs::remove_dir_all(&dir);
    }
}
