use crate::Integer;

/// 立即生成`[start, end)`范围内的整数。
///
/// `step`为负数时从`start`向下计数直到`end`（不含）；`step`为零时返回空集合。
pub fn range(start: Integer, end: Integer, step: Integer) -> Vec<Integer> {
    let mut res = Vec::new();
    if step == 0 {
        return res;
    }
    let mut next = start;
    while if step > 0 { next < end } else { next > end } {
        res.push(next);
        match next.checked_add(step) {
            Some(n) => next = n,
            None => break,
        }
    }
    res
}

/// 总是满足的条件
pub fn always<T>(_: &T) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(range(0, 10, 1), (0..10).collect::<Vec<_>>());
        assert_eq!(range(0, 10, 2), (0..10).step_by(2).collect::<Vec<_>>());
        assert_eq!(range(-3, 3, 4), vec![-3, 1]);
    }

    #[test]
    fn test_negative() {
        assert_eq!(range(10, 0, -1), (1..=10).rev().collect::<Vec<_>>());
        assert_eq!(range(10, 0, -3), vec![10, 7, 4, 1]);
    }

    #[test]
    fn test_empty() {
        assert!(range(0, 0, 1).is_empty());
        assert!(range(10, 0, 1).is_empty());
        assert!(range(0, 10, -1).is_empty());
        assert!(range(0, 10, 0).is_empty());
    }

    #[test]
    fn test_overflow() {
        assert_eq!(range(Integer::MAX - 1, Integer::MAX, 5), vec![Integer::MAX - 1]);
        assert_eq!(range(Integer::MIN + 1, Integer::MIN, -5), vec![Integer::MIN + 1]);
    }

    #[test]
    fn test_always() {
        assert!(always(&0));
        assert!(always(&"text"));
        assert!(always(&None::<i32>));
    }
}
