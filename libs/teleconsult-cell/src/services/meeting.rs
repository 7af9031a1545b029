// libs/teleconsult-cell/src/services/meeting.rs
use rand::Rng;

const PASSWORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const PASSWORD_LEN: usize = 6;

/// Placeholder credentials for the third-party meeting room. No room is created
/// with the vendor; the values only have to look like real ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingCredentials {
    pub meeting_id: String,
    pub password: String,
}

impl MeetingCredentials {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let meeting_id = format!("zoom-{}", rng.gen_range(0..1_000_000u32));
        let password = (0..PASSWORD_LEN)
            .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
            .collect();

        Self { meeting_id, password }
    }
}

/// `{base}/j/{meeting_id}?pwd={password}`
pub fn join_url(base_url: &str, meeting_id: &str, password: &str) -> String {
    format!(
        "{}/j/{}?pwd={}",
        base_url.trim_end_matches('/'),
        meeting_id,
        password
    )
}
