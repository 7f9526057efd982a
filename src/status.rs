use crate::errors::Error;
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU16;

/// Status code of a response line.
///
/// Holds only values within `100..1000`, so every status line written from
/// it has a plain three-digit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

const MIN_STATUS_CODE: u16 = 100;
const MAX_STATUS_CODE: u16 = 1000;

macro_rules! status_code {
    (
        $(
            ($code:expr, $name:ident, $phrase:expr);
        )+
    ) => {
        impl StatusCode {
            $(
                #[allow(dead_code)]
                pub const $name: StatusCode = StatusCode(
                    unsafe { NonZeroU16::new_unchecked($code) }
                );
            )+

            #[allow(dead_code)]
            pub fn reason(num: u16) -> Option<&'static str> {
                match num {
                    $(
                        $code => Some($phrase),
                    )+
                    _ => None
                }
            }
        }
    };
}

status_code! {
    (100, CONTINUE, "Continue");
    (101, SWITCHING_PROTOCOLS, "Switching Protocols");
    (200, OK, "OK");
    (201, CREATED, "Created");
    (202, ACCEPTED, "Accepted");
    (204, NO_CONTENT, "No Content");
    (206, PARTIAL_CONTENT, "Partial Content");
    (250, LOW_ON_STORAGE_SPACE, "Low on Storage Space");
    (301, MOVED_PERMANENTLY, "Moved Permanently");
    (302, FOUND, "Found");
    (304, NOT_MODIFIED, "Not Modified");
    (400, BAD_REQUEST, "Bad Request");
    (401, UNAUTHORIZED, "Unauthorized");
    (403, FORBIDDEN, "Forbidden");
    (404, NOT_FOUND, "Not Found");
    (405, METHOD_NOT_ALLOWED, "Method Not Allowed");
    (406, NOT_ACCEPTABLE, "Not Acceptable");
    (408, REQUEST_TIMEOUT, "Request Timeout");
    (411, LENGTH_REQUIRED, "Length Required");
    (413, PAYLOAD_TOO_LARGE, "Payload Too Large");
    (415, UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type");
    (451, PARAMETER_NOT_UNDERSTOOD, "Parameter Not Understood");
    (453, NOT_ENOUGH_BANDWIDTH, "Not Enough Bandwidth");
    (454, SESSION_NOT_FOUND, "Session Not Found");
    (455, METHOD_NOT_VALID_IN_THIS_STATE, "Method Not Valid in This State");
    (459, AGGREGATE_OPERATION_NOT_ALLOWED, "Aggregate Operation Not Allowed");
    (461, UNSUPPORTED_TRANSPORT, "Unsupported Transport");
    (470, CONNECTION_AUTHORIZATION_REQUIRED, "Connection Authorization Required");
    (500, INTERNAL_SERVER_ERROR, "Internal Server Error");
    (501, NOT_IMPLEMENTED, "Not Implemented");
    (503, SERVICE_UNAVAILABLE, "Service Unavailable");
    (505, VERSION_NOT_SUPPORTED, "Version Not Supported");
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        self.0.get()
    }

    /// Reason phrase registered for this code, if any.
    pub fn canonical_reason(&self) -> Option<&'static str> {
        StatusCode::reason(self.as_u16())
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match NonZeroU16::new(value) {
            Some(code) if (MIN_STATUS_CODE..MAX_STATUS_CODE).contains(&value) => {
                Ok(StatusCode(code))
            }
            _ => Err(Error::InvalidStatusCode(value)),
        }
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> u16 {
        code.as_u16()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::StatusCode;
    use crate::assert_match;
    use crate::errors::Error;
    use std::convert::TryFrom;

    #[test]
    fn test_accept_codes_in_range() {
        for code in 100..1000 {
            let status = StatusCode::try_from(code).unwrap();
            assert_eq!(status.as_u16(), code);
            assert_eq!(status.to_string(), code.to_string());
        }
    }

    #[test]
    fn test_reject_codes_out_of_range() {
        for code in [0u16, 1, 99, 1000, 1001, u16::MAX].iter() {
            assert_match!(
                StatusCode::try_from(*code),
                Err(Error::InvalidStatusCode(c)) if c == *code
            );
        }
    }

    #[test]
    fn test_canonical_reason() {
        assert_eq!(StatusCode::OK.canonical_reason(), Some("OK"));
        assert_eq!(
            StatusCode::SESSION_NOT_FOUND.canonical_reason(),
            Some("Session Not Found")
        );
        let unregistered = StatusCode::try_from(299).unwrap();
        assert_eq!(unregistered.canonical_reason(), None);
    }
}
