use crate::{Error, Result};

/// Restrictive variant: the container is generic but the callable is pinned
/// to `i32 -> i32`.
///
/// Every element is widened to `i32`, passed through `f`, then narrowed back,
/// so only integer types that fit losslessly in `i32` qualify and a result the
/// element type cannot hold is only caught at runtime. Prefer
/// [`for_each`](super::for_each); this exists as a counter-example.
///
/// On [`Error::OutOfRange`] the positions before `index` have already been
/// rewritten and the rest are untouched.
pub fn for_each_fixed<T>(container: &mut [T], f: &dyn Fn(&i32) -> i32) -> Result<()>
where
    T: Copy + Into<i32> + TryFrom<i32>,
{
    for (index, el) in container.iter_mut().enumerate() {
        let widened: i32 = (*el).into();
        let value = f(&widened);
        *el = <T as TryFrom<i32>>::try_from(value)
            .map_err(|_| Error::OutOfRange { index, value })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i32_round_trips() -> Result<()> {
        let mut v: Vec<i32> = vec![0, 1, 2, 3];
        for_each_fixed(&mut v, &|x| x * x)?;
        assert_eq!(v, vec![0, 1, 4, 9]);
        Ok(())
    }

    #[test]
    fn narrow_types_coerce_through_i32() -> Result<()> {
        let mut v: Vec<i16> = vec![-3, 4];
        let square = |x: &i32| x * x;
        for_each_fixed(&mut v, &square)?;
        assert_eq!(v, vec![9, 16]);
        Ok(())
    }

    #[test]
    fn overflow_reports_position_and_stops() {
        let mut v: Vec<u8> = vec![10, 20, 3];
        let err = for_each_fixed(&mut v, &|x| x * x).unwrap_err();
        match err {
            Error::OutOfRange { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, 400);
            }
            other => panic!("Expected OutOfRange, got {other}"),
        }
        assert_eq!(v, vec![100, 20, 3]);
    }
}
