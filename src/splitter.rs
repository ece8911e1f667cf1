//! Partitions a sorted point list into groups of size 2 or 3, the unit the
//! primitive builder consumes.

use crate::point::Point;

/// Split `points` into groups of size 3, except:
/// - if exactly 2 points remain at the end, they form one group of 2;
/// - if exactly 1 point would remain, the last group of 3 is instead
///   un-emitted and the trailing 4 points are emitted as two groups of 2.
///
/// Concatenating the groups in order reproduces `points` exactly.
///
/// Precondition: `points.len() >= 2`. The merge engine is undefined for a
/// group of size 1, which is exactly what this split avoids.
pub fn split_groups(points: &[Point]) -> Vec<Vec<Point>> {
  let n = points.len();
  debug_assert!(n >= 2);

  let remainder = n % 3;
  let full_groups = if remainder == 1 { n / 3 - 1 } else { n / 3 };

  let mut groups = Vec::with_capacity(full_groups + 1);
  let mut i = 0;
  for _ in 0..full_groups {
    groups.push(points[i..i + 3].to_vec());
    i += 3;
  }

  match remainder {
    0 => {}
    2 => groups.push(points[i..i + 2].to_vec()),
    1 => {
      groups.push(points[i..i + 2].to_vec());
      groups.push(points[i + 2..i + 4].to_vec());
    }
    _ => unreachable!("n % 3 is always 0, 1, or 2"),
  }

  groups
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pts(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64, 0.0)).collect()
  }

  fn sizes(points: &[Point]) -> Vec<usize> {
    split_groups(points).iter().map(Vec::len).collect()
  }

  #[test]
  fn groups_cover_the_input_exactly() {
    for n in 2..=20 {
      let points = pts(n);
      let groups = split_groups(&points);
      let flattened: Vec<Point> = groups.into_iter().flatten().collect();
      assert_eq!(flattened, points, "n = {n}");
    }
  }

  #[test]
  fn every_group_has_size_two_or_three() {
    for n in 2..=20 {
      for size in sizes(&pts(n)) {
        assert!(size == 2 || size == 3, "n = {n}, size = {size}");
      }
    }
  }

  #[test]
  fn exact_multiple_of_three_is_all_triangles() {
    assert_eq!(sizes(&pts(9)), vec![3, 3, 3]);
  }

  #[test]
  fn remainder_two_ends_in_a_pair() {
    assert_eq!(sizes(&pts(8)), vec![3, 3, 2]);
  }

  #[test]
  fn remainder_one_backs_up_into_two_pairs() {
    assert_eq!(sizes(&pts(7)), vec![3, 2, 2]);
    assert_eq!(sizes(&pts(4)), vec![2, 2]);
  }

  #[test]
  fn two_points_is_a_single_pair() {
    assert_eq!(sizes(&pts(2)), vec![2]);
  }

  #[test]
  fn three_points_is_a_single_triple() {
    assert_eq!(sizes(&pts(3)), vec![3]);
  }
}
