//! Constants for the GOST R 34.10-2012 style toy signature scheme

/// Short Weierstrass curve `y² = x³ + a·x + b` over `GF(p)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveDomain {
    /// Prime field modulus
    pub p: i64,
    /// Linear coefficient
    pub a: i64,
    /// Constant coefficient
    pub b: i64,
}

/// Reference test domain: `y² = x³ + 4x + 1 (mod 101)`
///
/// The group has 112 points (identity included) and a cyclic subgroup of
/// order 7 generated by `(4, 9)`.
pub const GOST_TEST_101: CurveDomain = CurveDomain { p: 101, a: 4, b: 1 };

/// Message signed by the reference walkthrough
pub const DEFAULT_MESSAGE: &str = "APR";

/// Lower bound (inclusive) for randomly drawn curve coefficients
pub const COEFFICIENT_MIN: i64 = 150;

/// Upper bound (inclusive) for randomly drawn curve coefficients
pub const COEFFICIENT_MAX: i64 = 499;

/// Number of ephemeral scalars tried before signing gives up
pub const SIGN_RETRY_LIMIT: u32 = 10;

/// Number of random domains drawn before construction gives up
pub const MAX_DOMAIN_ATTEMPTS: u32 = 64;

/// Smallest subgroup order accepted for a randomly drawn domain
pub const MIN_RANDOM_SUBGROUP_ORDER: u64 = 11;

/// Largest accepted field modulus
///
/// Enumeration keeps one map entry per quadratic residue and walks every x
/// in the field, so setup cost grows linearly in `p`.
pub const MAX_MODULUS: i64 = 1 << 20;

/// Primes the random construction path chooses the field modulus from
pub const SMALL_PRIMES: [i64; 278] = [
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157,
    163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223, 227,
    229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283,
    293, 307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367,
    373, 379, 383, 389, 397, 401, 409, 419, 421, 431, 433, 439,
    443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509,
    521, 523, 541, 547, 557, 563, 569, 571, 577, 587, 593, 599,
    601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659, 661,
    673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751,
    757, 761, 769, 773, 787, 797, 809, 811, 821, 823, 827, 829,
    839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919,
    929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997, 1009,
    1013, 1019, 1021, 1031, 1033, 1039, 1049, 1051, 1061, 1063, 1069, 1087,
    1091, 1093, 1097, 1103, 1109, 1117, 1123, 1129, 1151, 1153, 1163, 1171,
    1181, 1187, 1193, 1201, 1213, 1217, 1223, 1229, 1231, 1237, 1249, 1259,
    1277, 1279, 1283, 1289, 1291, 1297, 1301, 1303, 1307, 1319, 1321, 1327,
    1361, 1367, 1373, 1381, 1399, 1409, 1423, 1427, 1429, 1433, 1439, 1447,
    1451, 1453, 1459, 1471, 1481, 1483, 1487, 1489, 1493, 1499, 1511, 1523,
    1531, 1543, 1549, 1553, 1559, 1567, 1571, 1579, 1583, 1597, 1601, 1607,
    1609, 1613, 1619, 1621, 1627, 1637, 1657, 1663, 1667, 1669, 1693, 1697,
    1699, 1709, 1721, 1723, 1733, 1741, 1747, 1753, 1759, 1777, 1783, 1787,
    1789, 1801, 1811, 1823, 1831, 1847, 1861, 1867, 1871, 1873, 1877, 1879,
    1889, 1901, 1907, 1913, 1931, 1933, 1949, 1951, 1973, 1979, 1987, 1993,
    1997, 1999,
];
