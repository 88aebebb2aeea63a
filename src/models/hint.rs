use std::fmt;

use super::difficulty::Profile;

/// Order in which hints unlock as the round goes on.
pub const HINT_TIERS: [HintTier; 5] = [
    HintTier::Parity,
    HintTier::Half,
    HintTier::DivisibleBy3,
    HintTier::DivisibleBy5,
    HintTier::Primality,
];

/// Attempts needed to unlock each further tier.
pub const ATTEMPTS_PER_TIER: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTier {
    Parity,
    Half,
    DivisibleBy3,
    DivisibleBy5,
    Primality,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Even,
    Odd,
    LowerHalf { lower: i64, mid: i64 },
    UpperHalf { mid: i64, upper: i64 },
    DivisibleBy(i64),
    NotDivisibleBy(i64),
    Prime,
    NotPrime,
}

impl HintTier {
    pub fn reveal(&self, target: i64, profile: &Profile) -> Hint {
        match self {
            HintTier::Parity => {
                if target % 2 == 0 {
                    Hint::Even
                } else {
                    Hint::Odd
                }
            }
            HintTier::Half => {
                let mid = profile.midpoint();
                if target <= mid {
                    Hint::LowerHalf {
                        lower: profile.lower,
                        mid,
                    }
                } else {
                    Hint::UpperHalf {
                        mid,
                        upper: profile.upper,
                    }
                }
            }
            HintTier::DivisibleBy3 => divisibility(target, 3),
            HintTier::DivisibleBy5 => divisibility(target, 5),
            HintTier::Primality => {
                if is_prime(target) {
                    Hint::Prime
                } else {
                    Hint::NotPrime
                }
            }
        }
    }
}

fn divisibility(target: i64, by: i64) -> Hint {
    if target % by == 0 {
        Hint::DivisibleBy(by)
    } else {
        Hint::NotDivisibleBy(by)
    }
}

/// Number of tiers unlocked after `attempts_used` guesses.
pub fn unlocked_tiers(attempts_used: u32) -> usize {
    ((attempts_used / ATTEMPTS_PER_TIER) as usize).min(HINT_TIERS.len())
}

/// Primality of the absolute value, so negative targets in custom ranges
/// still get a meaningful hint. Deterministic Miller-Rabin: these witnesses
/// are exact for every 64-bit value.
pub fn is_prime(n: i64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    let n = n.unsigned_abs();
    if n < 2 {
        return false;
    }
    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for a in WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Even => write!(f, "The number is even"),
            Hint::Odd => write!(f, "The number is odd"),
            Hint::LowerHalf { lower, mid } => {
                write!(f, "The number is in the lower half ({}-{})", lower, mid)
            }
            Hint::UpperHalf { mid, upper } => {
                write!(f, "The number is in the upper half ({}-{})", mid + 1, upper)
            }
            Hint::DivisibleBy(n) => write!(f, "The number is divisible by {}", n),
            Hint::NotDivisibleBy(n) => write!(f, "The number is not divisible by {}", n),
            Hint::Prime => write!(f, "The number is prime"),
            Hint::NotPrime => write!(f, "The number is not prime"),
        }
    }
}
