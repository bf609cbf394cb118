use hel420_corelib::crypto::hash::hash_one_shot;
use hel420_corelib::crypto::sha256::Sha256;
use hel420_corelib::mix::{byte_delta, mix};
use hel420_corelib::{hel420_hash, DEFAULT_ROUNDS};

// Reference outputs; any drift here is a compatibility break.
const VECTORS: &[(&str, &str)] = &[
    ("", "b27f7a2b0ae7d19d295502f6b109666ca3db0a341859835ae142dc5fd91b5a4c"),
    (
        "HEL-420 test message",
        "130a4cb44a28e4e282754da572d9e386238d0899852ad807c2e740cf4fbff852",
    ),
    ("abc", "005b64c00c41f92963de128d96d0168c3288f6268bb578da25a632eff3bbccb6"),
    ("abd", "7adcafca2bd54185999cde4861cd749d985e36417fd20d64c7416d4c2e93a841"),
    (
        "héllo wörld 🚀",
        "499c4566f09f2ae5d81b43da9a802fded1e1775da6b80b06e4997125ce869974",
    ),
    (
        "The quick brown fox jumps over the lazy dog",
        "4d2049ea4a9fd77257d47b74733c60ea963a034f8a7031f194900a7b7e2ee427",
    ),
];

// Per-byte XOR value of a single round, indexed by byte value.
#[rustfmt::skip]
const DELTAS: [u8; 256] = [
    160,  14,  53, 234, 189,   8,  47, 166,  39, 200, 204,  56,  19,  83,  29, 181,
    212,  58, 104, 108, 193,  48, 196, 187, 124, 140, 143,  62, 103, 231, 172, 175,
    247, 149, 163,  71, 176,  20, 180, 217, 212,   1, 195, 136, 200,   3, 198, 167,
     72,  89, 148, 194, 186,  98, 175, 168, 102,  20, 241,  82, 162, 100,  53, 203,
    252, 185,  21,  68, 161, 171,  10, 147,  70,  88,  47, 104, 219, 158,   7, 178,
    134, 182, 199, 151,  95, 186, 171, 162, 130, 171, 250, 217,  65, 194, 143, 133,
     53, 236, 193, 156,  69, 111, 193, 234, 169, 223, 156,  48,  59, 194,  57, 159,
    139,  71, 223,  60,  58, 194, 224, 225, 110, 167,  68, 175,  44, 243,  88, 237,
    166,   6,  64, 101, 142,  12, 146, 102, 149,  36,  72, 152,  74, 108,  31, 213,
    149,  55, 170,  61, 227, 127,  45, 149,  55, 192,  94,  22,  31,  58,  22, 170,
    154, 159, 233, 142, 242,  59, 192, 127, 145, 169, 141, 152,  59, 131, 163, 128,
     61, 210, 157,   1, 251, 205, 151,   9,   9, 103, 144,  73, 108, 172,  93,  64,
     88, 195, 149, 194,   7, 222, 117, 179,  63, 145,  16,  50, 170, 161, 245, 138,
    159,  54, 131, 113,  43, 186, 182, 255, 143,  87,  61,  26, 224, 205, 182, 109,
     63, 145, 148,  26, 141,   1, 112,  18, 229,  85,  18,  16, 186,  78, 116,   4,
      8, 248,  51, 183,  33, 242,  28, 229,  15, 101, 152, 127, 184, 181,  49,  30,
];

#[test]
fn pinned_vectors_match() {
    for (input, expected) in VECTORS {
        assert_eq!(hel420_hash(input), *expected, "input {input:?}");
    }
}

#[test]
fn delta_table_matches() {
    for b in 0..=255u8 {
        assert_eq!(byte_delta(b), DELTAS[b as usize], "byte {b}");
    }
}

#[test]
fn abc_intermediate_buffers() {
    let stage1 = hash_one_shot::<Sha256>(b"abc");
    assert_eq!(
        hex::encode(stage1),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );

    let one = mix(&stage1, 1);
    let three = mix(&stage1, DEFAULT_ROUNDS);
    assert_eq!(
        hex::encode(one),
        "2a16d2ff5a0f45f8f8f8bc689f0d81648de98d2dbbac3e834fc4e18dc1a0252e"
    );
    assert_eq!(
        hex::encode(three),
        "bc51e7703a2a9a1212124f0257d1e1b470d070e8c10233964801fb7037cb680d"
    );
    assert_ne!(one, three);

    // Each round reads the previous round's output.
    assert_eq!(mix(&mix(&one, 1), 1), three);
    assert_eq!(hex::encode(hash_one_shot::<Sha256>(&three)), hel420_hash("abc"));
}
