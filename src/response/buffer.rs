use crate::errors::Error;
use bytes::BufMut;
use tracing::trace;

/// Byte buffer that grows by doubling its capacity, up to `max_capacity`.
///
/// Each append is all or nothing: failed growth leaves the written bytes and
/// the length untouched.
#[derive(Debug)]
pub(crate) struct GrowableBuffer {
    buf: Vec<u8>,
    max_capacity: usize,
}

impl GrowableBuffer {
    pub fn with_capacity(capacity: usize) -> Result<GrowableBuffer, Error> {
        GrowableBuffer::with_limit(capacity, usize::MAX)
    }

    pub fn with_limit(
        capacity: usize,
        max_capacity: usize,
    ) -> Result<GrowableBuffer, Error> {
        let capacity = capacity.min(max_capacity);
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory(capacity))?;

        Ok(GrowableBuffer { buf, max_capacity })
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Forget the written bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn append(&mut self, data: &[u8]) -> Result<(), Error> {
        self.append_all(&[data])
    }

    /// Append every part, or none of them.
    pub fn append_all(&mut self, parts: &[&[u8]]) -> Result<(), Error> {
        let mut required = self.buf.len();
        for part in parts {
            required = required
                .checked_add(part.len())
                .ok_or(Error::CapacityOverflow)?;
        }

        self.reserve_for(required)?;

        for part in parts {
            self.buf.put_slice(part);
        }

        Ok(())
    }

    fn reserve_for(&mut self, required: usize) -> Result<(), Error> {
        let current = self.buf.capacity();
        if required <= current {
            return Ok(());
        }

        let new_capacity = grown_capacity(current, required, self.max_capacity)?;
        self.buf
            .try_reserve_exact(new_capacity - self.buf.len())
            .map_err(|_| Error::OutOfMemory(new_capacity))?;
        trace!(old_capacity = current, new_capacity, "grew message buffer");

        Ok(())
    }
}

/// Double `current` until it holds `required` bytes. The result never
/// exceeds `max`.
fn grown_capacity(
    current: usize,
    required: usize,
    max: usize,
) -> Result<usize, Error> {
    if required > max {
        return Err(Error::CapacityLimit(max));
    }

    let mut capacity = current.max(1);
    while capacity < required {
        capacity = match capacity.checked_mul(2) {
            Some(doubled) => doubled,
            None if max < usize::MAX => max,
            None => return Err(Error::CapacityOverflow),
        };
    }

    Ok(capacity.min(max))
}

#[cfg(test)]
mod tests {
    use super::{grown_capacity, GrowableBuffer};
    use crate::assert_match;
    use crate::errors::Error;

    #[test]
    fn test_grown_capacity_doubles_until_sufficient() {
        assert_eq!(grown_capacity(1024, 1025, usize::MAX).unwrap(), 2048);
        assert_eq!(grown_capacity(1024, 2048, usize::MAX).unwrap(), 2048);
        assert_eq!(grown_capacity(1024, 5000, usize::MAX).unwrap(), 8192);
        assert_eq!(grown_capacity(0, 3, usize::MAX).unwrap(), 4);
    }

    #[test]
    fn test_grown_capacity_overflow() {
        let current = usize::MAX / 2 + 1;
        assert_match!(
            grown_capacity(current, usize::MAX, usize::MAX),
            Err(Error::CapacityOverflow)
        );
    }

    #[test]
    fn test_append_across_capacity() {
        let mut buffer = GrowableBuffer::with_capacity(4).unwrap();
        let mut expected = Vec::new();

        let fragments: [&[u8]; 4] =
            [b"ab", b"cde", b"", b"fghijklmnopqrstuvwxyz"];

        for fragment in fragments.iter() {
            buffer.append(fragment).unwrap();
            expected.extend_from_slice(fragment);
            assert!(buffer.len() <= buffer.capacity());
        }

        assert_eq!(buffer.as_slice(), &expected[..]);
        assert!(buffer.capacity() >= 32);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = GrowableBuffer::with_capacity(8).unwrap();
        buffer.append(&[7u8; 100]).unwrap();
        let capacity = buffer.capacity();

        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), capacity);
    }

    #[test]
    fn test_zero_initial_capacity() {
        let mut buffer = GrowableBuffer::with_capacity(0).unwrap();
        buffer.append(b"x").unwrap();
        assert_eq!(buffer.as_slice(), b"x");
    }

    #[test]
    fn test_grown_capacity_respects_limit() {
        assert_eq!(grown_capacity(1024, 1025, 1500).unwrap(), 1500);
        assert_eq!(grown_capacity(16, 17, 4096).unwrap(), 32);
        assert_match!(
            grown_capacity(1024, 1501, 1500),
            Err(Error::CapacityLimit(1500))
        );
    }

    #[test]
    fn test_failed_append_all_writes_nothing() {
        let mut buffer = GrowableBuffer::with_limit(8, 16).unwrap();
        buffer.append(b"0123456789").unwrap();

        let parts: [&[u8]; 3] = [b"name", b": ", b"too long value"];
        assert_match!(
            buffer.append_all(&parts),
            Err(Error::CapacityLimit(16))
        );
        assert_eq!(buffer.as_slice(), b"0123456789");
        assert_eq!(buffer.len(), 10);

        let parts: [&[u8]; 2] = [b"ab", b"cd"];
        buffer.append_all(&parts).unwrap();
        assert_eq!(buffer.as_slice(), b"0123456789abcd");
    }

    #[test]
    fn test_initial_capacity_clamped_to_limit() {
        let buffer = GrowableBuffer::with_limit(1024, 64).unwrap();
        assert!(buffer.capacity() >= 64);
        assert_eq!(buffer.len(), 0);
    }
}
