/// Calculate the BSD checksum of `data`, a 16 bit rotate-and-add digest
#[must_use]
pub fn bsdsum(data: &[u8]) -> u16 {
    let mut digest: u16 = 0;
    for &byte in data {
        digest = digest.rotate_right(1);
        digest = digest.wrapping_add(byte as u16);
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        // 0 -> ror, +1 = 0x0001
        //   -> ror = 0x8000, +2 = 0x8002
        //   -> ror = 0x4001, +3 = 0x4004
        assert_eq!(bsdsum(&[1, 2, 3]), 0x4004);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(bsdsum(&[]), 0);
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(bsdsum(&[1, 2, 3]), bsdsum(&[3, 2, 1]));
    }
}
