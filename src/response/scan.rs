use crate::config::ContentTypeScan;
use lazy_static::lazy_static;
use regex::bytes::Regex;

const CONTENT_TYPE: &[u8] = b"Content-Type";

lazy_static! {
    /// A header line named Content-Type. Header lines always follow a CRLF,
    /// which keeps the first line out of the match.
    static ref CONTENT_TYPE_LINE: Regex =
        Regex::new(r"(?i)\r\ncontent-type:").unwrap();
}

/// Whether the bytes written so far declare a content type.
pub(crate) fn declares_content_type(head: &[u8], scan: ContentTypeScan) -> bool {
    match scan {
        ContentTypeScan::Substring => head
            .windows(CONTENT_TYPE.len())
            .any(|window| window == CONTENT_TYPE),
        ContentTypeScan::HeaderLines => CONTENT_TYPE_LINE.is_match(head),
    }
}
