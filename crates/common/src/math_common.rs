//! Common mathematical operations over small prime fields
//!
//! Every value handled here fits in an `i64`; products are widened to `i128`
//! before reduction so callers can pass any modulus up to `i64::MAX`.

/// Reduce `a` into the range `[0, m)`
///
/// Unlike `%`, the result is never negative, so `-1 mod 7 = 6`.
#[inline]
pub fn mod_positive(a: i64, m: i64) -> i64 {
    a.rem_euclid(m)
}

/// Perform modular exponentiation (a^b mod m)
///
/// Implements the square-and-multiply algorithm.
pub fn mod_exp(a: i64, b: u64, m: i64) -> i64 {
    if m == 1 {
        return 0;
    }

    let mut result = 1;
    let mut base = mod_positive(a, m);
    let mut exp = b;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, m);
        }

        exp >>= 1;
        base = mod_mul(base, base, m);
    }

    result
}

/// Compute the greatest common divisor of two numbers
///
/// The result is always non-negative; `gcd(0, 0) = 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i64
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
///
/// Returns `None` when `m < 2` or when `a` and `m` are not coprime.
pub fn mod_inv(a: i64, m: i64) -> Option<i64> {
    if m < 2 {
        return None;
    }

    let a = mod_positive(a, m);
    if a == 0 {
        return None;
    }

    let (mut old_r, mut r) = (a as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let quotient = old_r / r;

        let next_r = old_r - quotient * r;
        old_r = r;
        r = next_r;

        let next_s = old_s - quotient * s;
        old_s = s;
        s = next_s;
    }

    if old_r != 1 {
        return None;
    }

    Some(old_s.rem_euclid(m as i128) as i64)
}

/// Perform modular addition: (a + b) mod m
#[inline]
pub fn mod_add(a: i64, b: i64, m: i64) -> i64 {
    ((a as i128 + b as i128).rem_euclid(m as i128)) as i64
}

/// Perform modular subtraction: (a - b) mod m
#[inline]
pub fn mod_sub(a: i64, b: i64, m: i64) -> i64 {
    ((a as i128 - b as i128).rem_euclid(m as i128)) as i64
}

/// Perform modular multiplication: (a * b) mod m
#[inline]
pub fn mod_mul(a: i64, b: i64, m: i64) -> i64 {
    ((a as i128 * b as i128).rem_euclid(m as i128)) as i64
}

/// Deterministic primality test by trial division
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut d = 5i64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

/// Distinct prime factors of `n`, largest first
///
/// `prime_factors(112)` is `[7, 2]`. Returns an empty vector for `n < 2`.
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut rest = n;
    let mut d = 2u64;
    while d.saturating_mul(d) <= rest {
        if rest % d == 0 {
            factors.push(d);
            while rest % d == 0 {
                rest /= d;
            }
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if rest > 1 {
        factors.push(rest);
    }

    factors.reverse();
    factors
}

/// Number of bits needed to write `n` in binary (`bit_length(7) = 3`)
///
/// Zero has bit length 0.
#[inline]
pub fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}
