use crate::core::DataPoint;

/// Indexed read access to an ordered run of `(x, y)` pairs.
///
/// Implementors only promise `len` and `xy`; callers must keep
/// `index < len()`. Aggregation assumes `x` is non-decreasing and roughly
/// evenly spaced along the index.
pub trait XYSource {
    fn len(&self) -> usize;

    fn xy(&self, index: usize) -> DataPoint;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl XYSource for [DataPoint] {
    fn len(&self) -> usize {
        <[DataPoint]>::len(self)
    }

    fn xy(&self, index: usize) -> DataPoint {
        self[index]
    }
}

impl XYSource for Vec<DataPoint> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn xy(&self, index: usize) -> DataPoint {
        self[index]
    }
}

impl<S: XYSource + ?Sized> XYSource for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn xy(&self, index: usize) -> DataPoint {
        (**self).xy(index)
    }
}
