use rand::Rng;

/// Length of a generated note identifier.
pub const NOTE_ID_LEN: usize = 16;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Random 16-character identifier over the URL-safe alphabet `A-Za-z0-9_-`.
pub fn generate_note_id() -> String {
    let mut rng = rand::thread_rng();
    (0..NOTE_ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
