/// Aligns `sequences` by index.
///
/// Row `i` of the result holds the element at index `i` of every sequence,
/// in the order the sequences were given, or `None` for a sequence shorter
/// than `i + 1`. The result is as long as the longest sequence; nothing is
/// truncated. No sequences, or only empty ones, give an empty result.
///
/// # Examples
///
/// ```
/// use fnutils::shape::zip;
///
/// let rows = zip(&[vec![1, 2, 3], vec![4, 5]]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some(1), Some(4)],
///         vec![Some(2), Some(5)],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);

    (0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}

/// Aligns two sequences of possibly different element types by index.
///
/// Consumes both inputs. Like [`zip`], the result is as long as the longer
/// input and the shorter side is padded with `None`.
///
/// # Examples
///
/// ```
/// use fnutils::shape::zip2;
///
/// let rows = zip2(["a", "b"], [1]);
/// assert_eq!(rows, vec![(Some("a"), Some(1)), (Some("b"), None)]);
/// ```
pub fn zip2<A, B>(
    first: impl IntoIterator<Item = A>,
    second: impl IntoIterator<Item = B>,
) -> Vec<(Option<A>, Option<B>)> {
    let mut first = first.into_iter().fuse();
    let mut second = second.into_iter().fuse();

    std::iter::from_fn(|| match (first.next(), second.next()) {
        (None, None) => None,
        row => Some(row),
    })
    .collect()
}
