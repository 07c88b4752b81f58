//! RIPEMD-160.
//!
//! Two parallel lines of five 16-operation rounds over little-endian
//! message words. The word order of each round comes from iterating the
//! rho permutation; the right line starts from positions (5 + 9i) mod 16.

const INITIAL: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const RHO: [usize; 16] = [7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8];

/// Per-position rotate amounts, one row of sixteen per round.
const SHIFTS: [u8; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
    12, 13, 11, 15, 6, 9, 9, 7, 12, 15, 11, 13, 7, 8, 7, 7,
    13, 15, 14, 11, 7, 7, 6, 8, 13, 14, 13, 12, 5, 5, 6, 9,
    14, 11, 12, 14, 8, 6, 5, 5, 15, 12, 15, 14, 9, 9, 8, 6,
    15, 12, 13, 13, 9, 5, 8, 6, 14, 11, 12, 11, 8, 6, 5, 5,
];

const K_LEFT: [u32; 5] = [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e];
const K_RIGHT: [u32; 5] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000];

/// Round-function selectors for the two lines (1-based into `mix`).
const FNS_LEFT: [u8; 5] = [1, 2, 3, 4, 5];
const FNS_RIGHT: [u8; 5] = [5, 4, 3, 2, 1];

fn mix(fn_id: u8, b: u32, c: u32, d: u32) -> u32 {
    match fn_id {
        1 => b ^ c ^ d,
        2 => (b & c) | (!b & d),
        3 => (b | !c) ^ d,
        4 => (b & d) | (c & !d),
        _ => b ^ (c | !d),
    }
}

/// Runs one line (left or right) over a chunk and returns its final words.
fn compute_line(digest: &[u32; 5], chunk: &[u32; 16], mut index: [usize; 16], ks: &[u32; 5], fns: &[u8; 5]) -> [u32; 5] {
    let mut w = *digest;
    let mut shifts = &SHIFTS[..];
    for round in 0..5 {
        let k = ks[round];
        let f = fns[round];
        for i in 0..16 {
            let mut t = mix(f, w[1], w[2], w[3]);
            t = t
                .wrapping_add(w[0])
                .wrapping_add(chunk[index[i]])
                .wrapping_add(k);
            t = t.rotate_left(shifts[index[i]] as u32).wrapping_add(w[4]);
            w[0] = w[4];
            w[4] = w[3];
            w[3] = w[2].rotate_left(10);
            w[2] = w[1];
            w[1] = t;
        }
        if round == 4 {
            break;
        }
        shifts = &shifts[16..];
        let prev = index;
        for i in 0..16 {
            index[i] = RHO[prev[i]];
        }
    }
    w
}

fn update_digest(digest: &mut [u32; 5], chunk: &[u32; 16]) {
    let identity: [usize; 16] = core::array::from_fn(|i| i);
    let left = compute_line(digest, chunk, identity, &K_LEFT, &FNS_LEFT);

    let mut right_index = [0usize; 16];
    right_index[0] = 5;
    for i in 1..16 {
        right_index[i] = (right_index[i - 1] + 9) & 0x0f;
    }
    let right = compute_line(digest, chunk, right_index, &K_RIGHT, &FNS_RIGHT);

    // Cross-feed combination of the two lines.
    let t = digest[1].wrapping_add(left[2]).wrapping_add(right[3]);
    digest[1] = digest[2].wrapping_add(left[3]).wrapping_add(right[4]);
    digest[2] = digest[3].wrapping_add(left[4]).wrapping_add(right[0]);
    digest[3] = digest[4].wrapping_add(left[0]).wrapping_add(right[1]);
    digest[4] = digest[0].wrapping_add(left[1]).wrapping_add(right[2]);
    digest[0] = t;
}

fn words_from(block: &[u8]) -> [u32; 16] {
    core::array::from_fn(|i| {
        u32::from_le_bytes([
            block[i * 4],
            block[i * 4 + 1],
            block[i * 4 + 2],
            block[i * 4 + 3],
        ])
    })
}

/// One-shot RIPEMD-160.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut digest = INITIAL;

    let mut chunks = data.chunks_exact(64);
    for block in &mut chunks {
        update_digest(&mut digest, &words_from(block));
    }

    let leftover = chunks.remainder();
    let mut last = [0u8; 64];
    last[..leftover.len()].copy_from_slice(leftover);
    last[leftover.len()] = 0x80;
    if leftover.len() >= 56 {
        // No room for the length; flush and use a fresh block for it.
        update_digest(&mut digest, &words_from(&last));
        last = [0u8; 64];
    }
    let bit_len = (data.len() as u64).wrapping_mul(8);
    last[56..].copy_from_slice(&bit_len.to_le_bytes());
    update_digest(&mut digest, &words_from(&last));

    let mut out = [0u8; 20];
    for (i, word) in digest.iter().enumerate() {
        out[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
    }
    out
}
