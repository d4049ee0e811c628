//! ChaCha20 block function
//!
//! The witness generator expands its seed with the ChaCha20 permutation
//! (RFC 8439). Only the block function lives here; the generator state and
//! sampling logic sit in `witness`.

/// `"expand 32-byte k"` as little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Quarter-round lanes: four column rounds followed by four diagonal rounds.
const LANES: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

#[inline(always)]
fn mix(s: &mut [u32; 16], [a, b, c, d]: [usize; 4]) {
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(16);
    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(12);
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(8);
    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(7);
}

fn le_word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Produces one 64-byte keystream block for `key`, `counter` and `nonce`.
pub(crate) fn block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; 64] {
    let mut input = [0u32; 16];

    input[..4].copy_from_slice(&SIGMA);
    for (word, chunk) in input[4..12].iter_mut().zip(key.chunks_exact(4)) {
        *word = le_word(chunk);
    }
    input[12] = counter;
    for (word, chunk) in input[13..].iter_mut().zip(nonce.chunks_exact(4)) {
        *word = le_word(chunk);
    }

    let mut state = input;
    for _ in 0..10 {
        for lane in LANES {
            mix(&mut state, lane);
        }
    }

    let mut out = [0u8; 64];
    for ((chunk, word), initial) in out.chunks_exact_mut(4).zip(state).zip(input) {
        chunk.copy_from_slice(&word.wrapping_add(initial).to_le_bytes());
    }

    out
}
