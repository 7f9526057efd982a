use std::convert::From;
use std::{fmt, io};

impl From<Error> for io::Error {
    fn from(f: Error) -> Self {
        let kind = match f {
            Error::OutOfMemory(_)
            | Error::CapacityOverflow
            | Error::CapacityLimit(_) => {
                io::ErrorKind::OutOfMemory
            }
            _ => io::ErrorKind::InvalidData,
        };

        io::Error::new(kind, f)
    }
}

macro_rules! errors {
    (
        [
            $(
                $(#[$docs1:meta])*
                ($name1:ident, $phrase1:expr);
            )+
        ],
        [
            $(
                $(#[$docs2:meta])*
                ($name2:ident, $type:ty, $phrase2:expr);
            )+
        ]
    ) => {
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum Error {
            $(
                $(#[$docs1])*
                $name1,
            )+
            $(
                $(#[$docs2])*
                $name2($type),
            )+
        }

        impl Error {
            fn desc(&self) -> String {
                match &*self {
                    $(
                        Error::$name1 => String::from($phrase1),
                    )+
                    $(
                        Error::$name2(val) => format!("{}: {:?}", $phrase2, val),
                    )+
                }
            }
        }

        impl fmt::Display for Error {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.desc())
            }
        }

        impl std::error::Error for Error {}
    };
}

errors! {
    [
        /// Doubling the buffer capacity would overflow `usize`
        (CapacityOverflow, "Buffer capacity overflow");
        /// A header or the body was added before the first line was written
        (NotInitialized, "Message written before the first line was initialized");
        /// The message was already finished and has not been reinitialized
        (AlreadyComplete, "Message is already complete");
        /// The data was read before `finish` was called
        (Incomplete, "Trying to get message data before it is finished");
    ],
    [
        /// The allocator could not provide the requested capacity in bytes
        (OutOfMemory, usize, "Allocation failed for capacity");
        /// Status codes must be within `100..1000`
        (InvalidStatusCode, u16, "Status code out of range");
        /// The message would outgrow the configured maximum capacity
        (CapacityLimit, usize, "Message exceeds the buffer limit");
    ]
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::{assert_error_message, assert_match};
    use std::io;

    #[test]
    fn test_error_description() {
        assert_error_message!(
            Error::InvalidStatusCode(42),
            "Status code out of range: 42"
        );
        assert_error_message!(
            Error::OutOfMemory(2048),
            "Allocation failed for capacity: 2048"
        );
        assert_error_message!(
            Error::Incomplete,
            "Trying to get message data before it is finished"
        );
    }

    #[test]
    fn test_convert_into_io_error() {
        let error: io::Error = Error::AlreadyComplete.into();
        assert_match!(error.kind(), io::ErrorKind::InvalidData);

        let error: io::Error = Error::OutOfMemory(4096).into();
        assert_match!(error.kind(), io::ErrorKind::OutOfMemory);

        let error: io::Error = Error::CapacityLimit(4096).into();
        assert_match!(error.kind(), io::ErrorKind::OutOfMemory);
    }
}
