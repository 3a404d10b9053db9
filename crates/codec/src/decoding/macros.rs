/// Copies `$size` bytes of the provided slice into $ty using $ty::from_be_bytes and advances the
/// buffer. The size defaults to the size of $ty. The caller checks the buffer length.
#[macro_export]
macro_rules! from_be_bytes_slice_and_advance_buf {
    ($ty: ty, $slice: expr) => {{ $crate::from_be_bytes_slice_and_advance_buf!($ty, ::std::mem::size_of::<$ty>(), $slice) }};
    ($ty:ty, $size: expr, $slice: expr) => {{
        let mut arr = [0u8; ::std::mem::size_of::<$ty>()];
        let size = $size;
        let size_of = ::std::mem::size_of::<$ty>();
        arr[size_of - size..].copy_from_slice(&$slice[0..size]);
        ::alloy_primitives::bytes::Buf::advance($slice, size);
        <$ty>::from_be_bytes(arr)
    }};
}

/// Writes the `$size` lowest bytes of the big endian representation of `$value` into the
/// [`BufMut`](::alloy_primitives::bytes::BufMut). Returns an [`EncodingError::FieldOverflow`]
/// from the calling function if the value doesn't fit.
///
/// [`EncodingError::FieldOverflow`]: $crate::EncodingError::FieldOverflow
#[macro_export]
macro_rules! put_be_bytes_truncated {
    ($field: expr, $value: expr, $size: expr, $buf: expr) => {{
        let value: u64 = $value;
        let size = $size;
        if size < 8 && value >> (8 * size) != 0 {
            return Err($crate::EncodingError::FieldOverflow { field: $field, value, width: size }.into())
        }
        ::alloy_primitives::bytes::BufMut::put_slice($buf, &value.to_be_bytes()[8 - size..]);
    }};
}
