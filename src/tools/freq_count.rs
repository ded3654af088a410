use rayon::prelude::*;

/// Inputs above this size are histogrammed across cores.
const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Count how often each byte value occurs. Returns 256 buckets indexed by
/// byte value. Large inputs are split across cores and the partial counts
/// summed.
pub fn byte_frequencies(data: &[u8]) -> Vec<u32> {
    if data.len() > PARALLEL_THRESHOLD {
        data.par_chunks(16 * 1024)
            .fold(
                || vec![0u32; 256],
                |mut counts, chunk| {
                    chunk.iter().for_each(|&byte| counts[byte as usize] += 1);
                    counts
                },
            )
            .reduce(
                || vec![0u32; 256],
                |mut total, partial| {
                    total
                        .iter_mut()
                        .zip(&partial)
                        .for_each(|(a, b)| *a += b);
                    total
                },
            )
    } else {
        let mut counts = vec![0u32; 256];
        data.iter().for_each(|&byte| counts[byte as usize] += 1);
        counts
    }
}

/// Drop the empty buckets and pair each remaining byte value with its
/// count, ready for code construction.
pub fn frequency_pairs(counts: &[u32]) -> Vec<(i32, u32)> {
    counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(value, &count)| (value as i32, count))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_small_input() {
        let counts = byte_frequencies(b"abbccc");
        assert_eq!(counts[b'a' as usize], 1);
        assert_eq!(counts[b'b' as usize], 2);
        assert_eq!(counts[b'c' as usize], 3);
        assert_eq!(counts.iter().sum::<u32>(), 6);
    }

    #[test]
    fn parallel_path_matches_serial() {
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let parallel = byte_frequencies(&data);
        let mut serial = vec![0u32; 256];
        data.iter().for_each(|&byte| serial[byte as usize] += 1);
        assert_eq!(parallel, serial);
    }

    #[test]
    fn pairs_skip_empty_buckets() {
        let counts = byte_frequencies(b"aca");
        let pairs = frequency_pairs(&counts);
        assert_eq!(pairs, vec![(b'a' as i32, 2), (b'c' as i32, 1)]);
    }
}
