//! yz-bench: sample inputs shared by the scoring benchmarks.

use yz_core::DiceRoll;

/// Deterministic pseudo-random rolls (xorshift64), so runs are comparable.
pub fn gen_rolls(n: usize) -> Vec<DiceRoll> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let mut d = [0u8; 5];
        for v in &mut d {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *v = (x % 6) as u8 + 1;
        }
        if let Ok(roll) = DiceRoll::new(d) {
            out.push(roll);
        }
    }
    out
}
