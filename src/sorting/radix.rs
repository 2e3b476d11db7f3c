use super::{counting_sort_with_memory, CountingSortMemory, SortOrder};

/// Least-significant-digit radix sort with byte-wide digits
///
/// Runs one stable counting pass per byte of the largest key, so keys
/// far beyond the vertex count stay cheap to sort. Used where counting
/// sort's single pass would need too large a counter table.
pub fn radix_sort<T, K>(data: &mut [T], order: SortOrder, key: K)
where
    T: Clone,
    K: Fn(&T) -> u64,
{
    if data.len() < 2 {
        return;
    }
    let largest = data.iter().map(&key).max().unwrap_or(0);
    let bits = 64 - largest.leading_zeros() as usize;
    let passes = ((bits + 7) / 8).max(1);

    let mut mem: CountingSortMemory<T> = CountingSortMemory::new(256, data.len());

    // all passes sort ascending; a final reversal flips the order, so
    // stability across passes is preserved
    for pass in 0..passes {
        let shift = 8 * pass;
        for elem in data.iter() {
            mem.count[(key(elem) >> shift) as usize & 0xff] += 1;
        }
        counting_sort_with_memory(
            data,
            SortOrder::NonDecreasing,
            |e| (key(e) >> shift) as usize & 0xff,
            &mut mem,
        );
    }

    if order == SortOrder::NonIncreasing {
        data.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_large_keys() {
        let mut v: Vec<u64> = vec![1 << 40, 3, 1 << 20, 7, 0, 1 << 40 | 5];
        radix_sort(&mut v, SortOrder::NonDecreasing, |&x| x);
        assert_eq!(v, vec![0, 3, 7, 1 << 20, 1 << 40, 1 << 40 | 5]);
        radix_sort(&mut v, SortOrder::NonIncreasing, |&x| x);
        assert_eq!(v[0], 1 << 40 | 5);
        assert_eq!(v[5], 0);
    }

    #[test]
    fn stable_on_equal_keys() {
        let mut v: Vec<(usize, u64)> = (0..8).map(|i| (i, (i % 2) as u64)).collect();
        radix_sort(&mut v, SortOrder::NonDecreasing, |p| p.1);
        // zeros first, original relative order kept
        assert_eq!(
            v.iter().map(|p| p.0).collect::<Vec<_>>(),
            vec![0, 2, 4, 6, 1, 3, 5, 7]
        );
    }

    #[test]
    fn agrees_with_counting_sort() {
        let mut a: Vec<usize> = vec![9, 1, 8, 1, 0, 5, 5, 3];
        let mut b = a.clone();
        super::super::counting_sort(&mut a, 9, SortOrder::NonDecreasing, |&x| x);
        radix_sort(&mut b, SortOrder::NonDecreasing, |&x| x as u64);
        assert_eq!(a, b);
    }
}
