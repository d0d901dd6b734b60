/// Stationpedia hash of a prefab key.
///
/// CRC-32 of the UTF-8 bytes, reinterpreted as a two's-complement `i32`.
/// The game resolves prefabs with the same signed value, so this must not be
/// widened to `u32` or `i64`.
pub fn prefab_hash(key: &str) -> i32 {
    crc32fast::hash(key.as_bytes()) as i32
}
