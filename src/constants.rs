// The maximum number of fractional digits a decimal can carry.
pub const MAX_SCALE: u32 = 30;
// The maximum number of significant decimal digits in a coefficient.
pub const MAX_PRECISION: u32 = 96;
// Every division extends the result scale by this amount, up to MAX_SCALE.
pub const DIV_INCR_SCALE: u32 = 4;

// Enough room for a sign, 96 integer digits, a decimal point and a
// MAX_SCALE fractional rendering requested via formatter precision.
pub(crate) const MAX_STR_BUFFER_SIZE: usize = 130;

// The maximum power of 10 that an i64 can store
pub(crate) const MAX_I64_POW10: u32 = 18;

// Fast access for 10^n where n is 0-18
pub(crate) const POWERS_10: [i64; 19] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

// Fast access for 10^n where n is 0-38
pub(crate) const POWERS_10_128: [i128; 39] = {
    let mut table = [1i128; 39];
    let mut i = 1;
    while i < 39 {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};
