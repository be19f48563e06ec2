/// Residue mechanics for capital-dependent branching.

/// Floor-style modulo: result in `[0, m)` for `m >= 1`, so `-3 mod 3 == 0`
/// and `-1 mod 3 == 2`. Periodicity is symmetric around zero.
#[inline]
pub fn floor_mod(capital: i64, m: i64) -> i64 {
    capital.rem_euclid(m)
}

/// Whether `capital` sits on a multiple of the period.
#[inline]
pub fn on_period(capital: i64, m: i64) -> bool {
    floor_mod(capital, m) == 0
}
