use nalgebra::DVector;

use crate::error::{GeodesyError, Result};

/// A coordinate component: either a single value or a flat array of samples.
///
/// Conversions take one container per component and evaluate the math
/// sample by sample, returning containers of the same kind and length.
pub trait Elementwise: Sized {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn value(&self, index: usize) -> f64;

    fn from_values(values: Vec<f64>) -> Result<Self>;
}

impl Elementwise for f64 {
    fn len(&self) -> usize {
        1
    }

    fn value(&self, _index: usize) -> f64 {
        *self
    }

    fn from_values(values: Vec<f64>) -> Result<Self> {
        values
            .first()
            .copied()
            .ok_or_else(|| GeodesyError::InvalidArgument("no value for scalar result".to_owned()))
    }
}

impl Elementwise for Vec<f64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn value(&self, index: usize) -> f64 {
        self[index]
    }

    fn from_values(values: Vec<f64>) -> Result<Self> {
        Ok(values)
    }
}

impl<const N: usize> Elementwise for [f64; N] {
    fn len(&self) -> usize {
        N
    }

    fn value(&self, index: usize) -> f64 {
        self[index]
    }

    fn from_values(values: Vec<f64>) -> Result<Self> {
        let len = values.len();
        values.try_into().map_err(|_| {
            GeodesyError::InvalidArgument(format!("expected {} values, got {}", N, len))
        })
    }
}

impl Elementwise for DVector<f64> {
    fn len(&self) -> usize {
        self.nrows()
    }

    fn value(&self, index: usize) -> f64 {
        self[index]
    }

    fn from_values(values: Vec<f64>) -> Result<Self> {
        Ok(DVector::from_vec(values))
    }
}

fn check_finite(name: &str, index: usize, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeodesyError::InvalidArgument(format!(
            "{} is not finite at index {}: {}",
            name, index, value
        )))
    }
}

fn check_lengths(lengths: &[(&str, usize)]) -> Result<usize> {
    let (first_name, len) = lengths[0];
    for &(name, other) in &lengths[1..] {
        if other != len {
            return Err(GeodesyError::InvalidArgument(format!(
                "component lengths differ: {} has {}, {} has {}",
                first_name, len, name, other
            )));
        }
    }
    Ok(len)
}

/// Applies `f` to each sample of `a`.
pub(crate) fn map1<T, F>(a: &T, f: F) -> Result<T>
where
    T: Elementwise,
    F: Fn(f64) -> f64,
{
    let values = (0..a.len())
        .map(|i| check_finite("component", i, a.value(i)).map(&f))
        .collect::<Result<Vec<_>>>()?;
    T::from_values(values)
}

/// Applies `f` to each pair of samples of `a` and `b`.
pub(crate) fn map2<T, F>(a: &T, b: &T, f: F) -> Result<T>
where
    T: Elementwise,
    F: Fn(f64, f64) -> f64,
{
    let len = check_lengths(&[("first", a.len()), ("second", b.len())])?;
    let mut values = Vec::with_capacity(len);
    for i in 0..len {
        let u = check_finite("first component", i, a.value(i))?;
        let v = check_finite("second component", i, b.value(i))?;
        values.push(f(u, v));
    }
    T::from_values(values)
}

/// Applies `f` to each triple of samples of `a`, `b` and `c`.
pub(crate) fn map3<T, F>(a: &T, b: &T, c: &T, f: F) -> Result<(T, T, T)>
where
    T: Elementwise,
    F: Fn(f64, f64, f64) -> [f64; 3],
{
    let len = check_lengths(&[("first", a.len()), ("second", b.len()), ("third", c.len())])?;
    let mut out = [
        Vec::with_capacity(len),
        Vec::with_capacity(len),
        Vec::with_capacity(len),
    ];
    for i in 0..len {
        let u = check_finite("first component", i, a.value(i))?;
        let v = check_finite("second component", i, b.value(i))?;
        let w = check_finite("third component", i, c.value(i))?;
        for (column, value) in out.iter_mut().zip(f(u, v, w)) {
            column.push(value);
        }
    }
    let [first, second, third] = out;
    Ok((
        T::from_values(first)?,
        T::from_values(second)?,
        T::from_values(third)?,
    ))
}
